//! Flow HTTP endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::FlowHandlers;
pub use routes::flow_routes;
