//! Location availability lookup.
//!
//! A fixed table mapping each property type to the cities where the
//! marketplace currently has inventory. The lookup is pure and total:
//! every known type returns the same list on every call, and an
//! unmapped label returns an empty list.

use super::PropertyType;

/// Returns the cities with inventory for the given property type.
pub fn available_locations(property_type: PropertyType) -> &'static [&'static str] {
    match property_type {
        PropertyType::Apartment => &["Bangalore", "Hyderabad", "Chennai", "Pune"],
        PropertyType::Villa => &["Bangalore", "Hyderabad"],
        PropertyType::IndependentHouse => &["Chennai", "Coimbatore"],
        PropertyType::PlotLand => &["Hyderabad", "Mysore"],
        PropertyType::CommercialSpace => &["Bangalore", "Mumbai"],
    }
}

/// Returns the cities with inventory for a property type named by its
/// option chip label. Unknown labels yield an empty list.
pub fn locations_for_label(label: &str) -> &'static [&'static str] {
    match PropertyType::from_label(label) {
        Some(t) => available_locations(t),
        None => &[],
    }
}
