//! Context describing where on the site a chat session was opened.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PropertyRef;
use crate::domain::flow::ListingType;

/// Tab active on the search page when the widget opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTab {
    Buy,
    Rent,
    Commercial,
}

impl SearchTab {
    /// Listing type used when building search navigation from this tab.
    ///
    /// Rental inventory is served from the buy index, so the rent tab
    /// maps to buy listings.
    pub fn listing(&self) -> ListingType {
        match self {
            SearchTab::Buy | SearchTab::Rent => ListingType::Buy,
            SearchTab::Commercial => ListingType::Commercial,
        }
    }
}

/// A home service the marketplace offers alongside listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    LegalServices,
    HomeLoans,
    HomeInteriors,
    PropertyManagement,
    VastuConsultation,
    PackersAndMovers,
    RentalAgreement,
    PropertyValuation,
    HomeInspection,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 9] = [
        ServiceKind::LegalServices,
        ServiceKind::HomeLoans,
        ServiceKind::HomeInteriors,
        ServiceKind::PropertyManagement,
        ServiceKind::VastuConsultation,
        ServiceKind::PackersAndMovers,
        ServiceKind::RentalAgreement,
        ServiceKind::PropertyValuation,
        ServiceKind::HomeInspection,
    ];

    /// Human-readable name shown as a chat option.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::LegalServices => "Legal Services",
            ServiceKind::HomeLoans => "Home Loans",
            ServiceKind::HomeInteriors => "Home Interiors",
            ServiceKind::PropertyManagement => "Property Management",
            ServiceKind::VastuConsultation => "Vastu Consultation",
            ServiceKind::PackersAndMovers => "Packers and Movers",
            ServiceKind::RentalAgreement => "Rental Agreement",
            ServiceKind::PropertyValuation => "Property Valuation",
            ServiceKind::HomeInspection => "Home Inspection",
        }
    }

    /// All service labels, for option lists.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.label()).collect()
    }
}

/// Where the widget was opened: page path plus whatever page-specific
/// state the host passed along.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowContext {
    /// Path of the page hosting the widget, such as `/plans`.
    pub path: String,

    /// Active search tab, when opened from the search page.
    pub search_tab: Option<SearchTab>,

    /// Selected service, when opened from a service page.
    pub service: Option<ServiceKind>,

    /// Set when the host page is showing membership plans.
    #[serde(default)]
    pub plan: bool,

    /// Listing in view, when opened from a property page.
    pub property: Option<PropertyRef>,
}

impl FlowContext {
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_search_tab(mut self, tab: SearchTab) -> Self {
        self.search_tab = Some(tab);
        self
    }

    pub fn with_service(mut self, service: ServiceKind) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_plan(mut self) -> Self {
        self.plan = true;
        self
    }

    pub fn with_property(mut self, property: PropertyRef) -> Self {
        self.property = Some(property);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_tab_maps_to_buy_listings() {
        assert_eq!(SearchTab::Rent.listing(), ListingType::Buy);
        assert_eq!(SearchTab::Commercial.listing(), ListingType::Commercial);
    }

    #[test]
    fn service_labels_cover_every_kind() {
        assert_eq!(ServiceKind::labels().len(), ServiceKind::ALL.len());
    }

    #[test]
    fn context_builders_compose() {
        let ctx = FlowContext::for_path("/search").with_search_tab(SearchTab::Commercial);
        assert_eq!(ctx.path, "/search");
        assert_eq!(ctx.search_tab, Some(SearchTab::Commercial));
        assert!(ctx.service.is_none());
    }
}
