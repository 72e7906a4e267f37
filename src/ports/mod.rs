//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LeadSink` - Delivery of captured leads to wherever sales reads them

pub mod lead_sink;

pub use lead_sink::{LeadRecord, LeadSink, LeadSource};
