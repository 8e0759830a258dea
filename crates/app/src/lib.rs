// Re-export the modules the tests (and main) need.
pub mod auth;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
