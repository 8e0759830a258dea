pub mod conn;
pub mod health;
pub mod migrate;
pub mod seed;
pub mod store;

// Re-export a clean API
pub use conn::connect;
pub use store::ContactInfoStore;
