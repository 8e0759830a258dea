pub mod admin;
pub mod contact_info;
pub mod health;
