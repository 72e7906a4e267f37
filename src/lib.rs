//! Estate Guide - Conversational lead capture for a real-estate marketplace
//!
//! This crate hosts the rule-based chat flows behind the marketplace's
//! assistant widget: a declarative flow engine, contextual entry routing,
//! lead gates, and a small JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
