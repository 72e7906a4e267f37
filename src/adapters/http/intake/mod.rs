//! Legal intake HTTP endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::IntakeHandlers;
pub use routes::intake_routes;
