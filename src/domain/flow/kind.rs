//! Flow kinds.

use serde::{Deserialize, Serialize};

/// The five independently-stateful flows the widget can host.
///
/// All five share the same engine; each kind supplies its own
/// declarative configuration (steps, copy, option sets, lead gate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Generic lead funnel shown on most pages.
    Buyer,

    /// Search-page funnel seeded by the active search tab.
    Search,

    /// Support funnel on the subscription plans page.
    PlanSupport,

    /// Support funnel on a property detail page.
    PropertySupport,

    /// Lead funnel on an external-service page.
    ServiceSupport,
}

impl FlowKind {
    /// Returns a short label for logs and APIs.
    pub fn label(&self) -> &'static str {
        match self {
            FlowKind::Buyer => "buyer",
            FlowKind::Search => "search",
            FlowKind::PlanSupport => "plan_support",
            FlowKind::PropertySupport => "property_support",
            FlowKind::ServiceSupport => "service_support",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&FlowKind::PlanSupport).unwrap();
        assert_eq!(json, "\"plan_support\"");
    }

    #[test]
    fn label_matches_serde_name() {
        for kind in [
            FlowKind::Buyer,
            FlowKind::Search,
            FlowKind::PlanSupport,
            FlowKind::PropertySupport,
            FlowKind::ServiceSupport,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
    }
}
