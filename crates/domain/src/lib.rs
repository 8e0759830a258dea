pub mod content;
pub mod security;
