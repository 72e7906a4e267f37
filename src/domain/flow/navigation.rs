//! Navigation targets produced as terminal side effects.
//!
//! The engine never touches the browser; it emits a `NavigationTarget`
//! value and the hosting widget performs the actual location change.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PropertyType;

/// Path of the property posting page.
pub const POST_PROPERTY_PATH: &str = "/post-property";

/// Path of the filtered search page.
pub const SEARCH_PATH: &str = "/search";

/// Path of the contact page.
pub const CONTACT_PATH: &str = "/contact";

/// The listing type the search page accepts in its `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Buy,
    Commercial,
}

impl ListingType {
    /// The query parameter value for this listing type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Buy => "buy",
            ListingType::Commercial => "commercial",
        }
    }
}

/// A browser navigation request emitted by a terminal transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    path: String,
    query: Vec<(String, String)>,
}

impl NavigationTarget {
    /// Creates a target with no query parameters.
    pub fn to_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// The property posting page.
    pub fn post_property() -> Self {
        Self::to_path(POST_PROPERTY_PATH)
    }

    /// The contact page.
    pub fn contact() -> Self {
        Self::to_path(CONTACT_PATH)
    }

    /// A filtered search page honoring the search page's query contract:
    /// `type` ∈ {buy, commercial}, `location` free text, `propertyType`
    /// from the fixed search vocabulary.
    pub fn search(listing: ListingType, location: &str, property_type_label: &str) -> Self {
        let property_type = PropertyType::from_label(property_type_label)
            .map(|t| t.search_vocabulary())
            .unwrap_or(property_type_label);

        Self {
            path: SEARCH_PATH.to_string(),
            query: vec![
                ("type".to_string(), listing.as_str().to_string()),
                ("location".to_string(), location.to_string()),
                ("propertyType".to_string(), property_type.to_string()),
            ],
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Renders the target as a relative href, percent-encoding spaces.
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let params = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v.replace(' ', "%20")))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, params)
    }
}

/// A side effect the presentation shell must perform after a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SideEffect {
    /// Change the browser location and close the widget.
    Navigate { target: NavigationTarget },
    /// Open the inline lead-capture form.
    OpenLeadForm,
}
