//! Catalog module - Fixed marketplace vocabulary.
//!
//! Property types, location availability, budget and bedroom option
//! sets, and the display snapshot attached to rich messages.

mod locations;
mod options;
mod property_ref;
mod property_type;

pub use locations::{available_locations, locations_for_label};
pub use options::{BHK_OPTIONS, BUDGET_OPTIONS, BUYER_OPTION, ROLE_OPTIONS, SELLER_ROLES};
pub use property_ref::PropertyRef;
pub use property_type::PropertyType;
