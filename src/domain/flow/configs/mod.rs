//! Flow configuration tables, one per flow kind.

pub mod buyer;
pub mod search;
pub mod support;

use crate::domain::flow::kind::FlowKind;
use crate::domain::flow::navigation::ListingType;
use crate::domain::flow::rules::FlowConfig;
use crate::domain::routing::FlowContext;

/// Builds the configuration for a flow, drawing page state from the
/// context it was opened in.
pub fn flow_config(kind: FlowKind, context: &FlowContext) -> FlowConfig {
    match kind {
        FlowKind::Buyer => buyer::config(),
        FlowKind::Search => search::config(
            context
                .search_tab
                .map(|tab| tab.listing())
                .unwrap_or(ListingType::Buy),
        ),
        FlowKind::PlanSupport => support::plan_config(),
        FlowKind::PropertySupport => support::property_config(context.property.clone()),
        FlowKind::ServiceSupport => support::service_config(context.service),
    }
}
