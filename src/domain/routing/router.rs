//! Entry routing: which flow to start for a given page context.

use crate::domain::flow::FlowKind;
use crate::domain::routing::context::FlowContext;

/// Picks the flow for the context the widget opened in.
///
/// Precedence, most specific first: an explicit service, a service page,
/// the plans page or flag, a property page or listing in view, an active
/// search tab. Anything else gets the generic buyer flow.
pub fn flow_kind_for(context: &FlowContext) -> FlowKind {
    if context.service.is_some() || context.path.starts_with("/services") {
        return FlowKind::ServiceSupport;
    }
    if context.plan || context.path.starts_with("/plans") {
        return FlowKind::PlanSupport;
    }
    if context.property.is_some() || context.path.starts_with("/property/") {
        return FlowKind::PropertySupport;
    }
    if context.search_tab.is_some() {
        return FlowKind::Search;
    }
    FlowKind::Buyer
}
