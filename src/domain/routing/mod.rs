//! Entry routing: page context and flow selection.

pub mod context;
pub mod router;

pub use context::{FlowContext, SearchTab, ServiceKind};
pub use router::flow_kind_for;
