//! Adapters - Implementations of ports plus the HTTP surface.

pub mod http;
pub mod lead;
