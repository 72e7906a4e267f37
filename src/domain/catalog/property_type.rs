//! Property type vocabulary.
//!
//! The five property types offered as option chips, plus the mapping
//! to the vocabulary the search page expects in its query string.

use serde::{Deserialize, Serialize};

/// A property type the marketplace lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    Villa,
    IndependentHouse,
    PlotLand,
    CommercialSpace,
}

impl PropertyType {
    /// All property types, in the order they are offered as options.
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::IndependentHouse,
        PropertyType::PlotLand,
        PropertyType::CommercialSpace,
    ];

    /// The option chip label for this property type.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::IndependentHouse => "Independent House",
            PropertyType::PlotLand => "Plot/Land",
            PropertyType::CommercialSpace => "Commercial Space",
        }
    }

    /// Parses a property type from its option chip label.
    ///
    /// Matching is case-insensitive to tolerate typed input.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(label))
    }

    /// Returns true for types where a bedroom count makes sense.
    pub fn is_residential(&self) -> bool {
        matches!(
            self,
            PropertyType::Apartment | PropertyType::Villa | PropertyType::IndependentHouse
        )
    }

    /// The value the search page expects in its `propertyType` query parameter.
    ///
    /// Residential types pass through verbatim; the other two use the
    /// search page's own naming.
    pub fn search_vocabulary(&self) -> &'static str {
        match self {
            PropertyType::CommercialSpace => "Commercial Space/Building",
            PropertyType::PlotLand => "Plots",
            other => other.label(),
        }
    }

    /// The option chip labels for all property types.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.label()).collect()
    }
}
