//! Denormalized property snapshot for rich message rendering.

use serde::{Deserialize, Serialize};

/// Display snapshot of a listed property, attached to a message so the
/// widget can render a card. Never queried or mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRef {
    pub id: String,
    pub title: String,
    pub price: String,
    pub location: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area: String,
    pub image: String,
    pub kind: String,
}

impl PropertyRef {
    /// A short one-line summary used in bot copy referencing the property.
    pub fn summary(&self) -> String {
        format!("{} in {} ({})", self.title, self.location, self.price)
    }
}
