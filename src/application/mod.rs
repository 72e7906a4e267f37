//! Application layer - Use-case orchestration over the session registry.

pub mod handlers;
pub mod registry;

pub use registry::SessionRegistry;
