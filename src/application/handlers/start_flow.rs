//! StartFlowHandler - Opens a session for a page context.

use std::sync::Arc;

use tracing::info;

use crate::application::registry::SessionRegistry;
use crate::domain::flow::{configs, FlowKind, FlowSession, Message};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::routing::{flow_kind_for, FlowContext};

/// Command to start a flow from a page context.
#[derive(Debug, Clone)]
pub struct StartFlowCommand {
    pub context: FlowContext,
}

/// Result of a started flow: the opening transcript, ready to render.
#[derive(Debug, Clone)]
pub struct StartFlowResult {
    pub session_id: SessionId,
    pub kind: FlowKind,
    pub transcript: Vec<Message>,
}

/// Handler for starting flows.
pub struct StartFlowHandler {
    registry: Arc<SessionRegistry>,
}

impl StartFlowHandler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: StartFlowCommand) -> Result<StartFlowResult, DomainError> {
        let kind = flow_kind_for(&cmd.context);
        let config = configs::flow_config(kind, &cmd.context);
        let session = FlowSession::start(config)?;

        let result = StartFlowResult {
            session_id: *session.id(),
            kind,
            transcript: session.transcript().to_vec(),
        };

        info!(
            session_id = %result.session_id,
            kind = kind.label(),
            path = %cmd.context.path,
            "flow started"
        );

        self.registry.insert(session).await;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routing::SearchTab;

    #[tokio::test]
    async fn starts_the_flow_the_context_calls_for() {
        let registry = Arc::new(SessionRegistry::new());
        let handler = StartFlowHandler::new(Arc::clone(&registry));

        let result = handler
            .handle(StartFlowCommand {
                context: FlowContext::for_path("/search").with_search_tab(SearchTab::Buy),
            })
            .await
            .unwrap();

        assert_eq!(result.kind, FlowKind::Search);
        assert!(!result.transcript.is_empty());
        assert_eq!(registry.len().await, 1);
    }
}
