//! Estate Guide server binary.
//!
//! Wires configuration, tracing, the session registry, and the HTTP
//! router, then serves until shutdown.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use estate_guide::adapters::http::{app_router, FlowHandlers, IntakeHandlers};
use estate_guide::adapters::lead::InMemoryLeadSink;
use estate_guide::application::handlers::{
    GetTranscriptHandler, SendInputHandler, StartFlowHandler, SubmitIntakeHandler,
    SubmitLeadHandler,
};
use estate_guide::application::SessionRegistry;
use estate_guide::config::AppConfig;
use estate_guide::ports::LeadSink;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let registry = Arc::new(SessionRegistry::new());
    let sink: Arc<dyn LeadSink> = Arc::new(InMemoryLeadSink::new());

    let flow_handlers = FlowHandlers::new(
        Arc::new(StartFlowHandler::new(Arc::clone(&registry))),
        Arc::new(SendInputHandler::new(
            Arc::clone(&registry),
            config.chat.typing_delay(),
        )),
        Arc::new(SubmitLeadHandler::new(
            Arc::clone(&registry),
            Arc::clone(&sink),
        )),
        Arc::new(GetTranscriptHandler::new(Arc::clone(&registry))),
    );
    let intake_handlers = IntakeHandlers::new(Arc::new(SubmitIntakeHandler::new(sink)));

    let app = app_router(flow_handlers, intake_handlers);

    let addr = config.server.socket_addr()?;
    info!(%addr, "estate-guide listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
