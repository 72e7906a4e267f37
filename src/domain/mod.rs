//! Domain layer - Pure business logic.
//!
//! No IO, no framework types. The flow engine, catalog vocabulary, lead
//! capture, and entry routing all live here and are exercised directly by
//! unit tests.

pub mod catalog;
pub mod flow;
pub mod foundation;
pub mod lead;
pub mod routing;
