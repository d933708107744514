pub mod auth;
pub mod campaign;
pub mod constants;
pub mod tracing;
