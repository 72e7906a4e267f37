//! End-to-end conversation scenarios through the application handlers.
//!
//! Each test drives a full flow the way the HTTP layer would, with the
//! typing delay set to zero.

use std::sync::Arc;
use std::time::Duration;

use estate_guide::adapters::lead::InMemoryLeadSink;
use estate_guide::application::handlers::{
    SendInputCommand, SendInputHandler, StartFlowCommand, StartFlowHandler, SubmitLeadCommand,
    SubmitLeadHandler,
};
use estate_guide::application::SessionRegistry;
use estate_guide::domain::flow::{FlowKind, SideEffect};
use estate_guide::domain::foundation::{ErrorCode, SessionId};
use estate_guide::domain::lead::LeadDetails;
use estate_guide::domain::routing::{FlowContext, SearchTab, ServiceKind};
use estate_guide::ports::{LeadSink, LeadSource};

struct Harness {
    registry: Arc<SessionRegistry>,
    sink: Arc<InMemoryLeadSink>,
    start: StartFlowHandler,
    input: SendInputHandler,
    lead: SubmitLeadHandler,
}

impl Harness {
    fn new() -> Self {
        let registry = Arc::new(SessionRegistry::new());
        let sink = Arc::new(InMemoryLeadSink::new());
        Self {
            start: StartFlowHandler::new(Arc::clone(&registry)),
            input: SendInputHandler::new(Arc::clone(&registry), Duration::ZERO),
            lead: SubmitLeadHandler::new(
                Arc::clone(&registry),
                Arc::clone(&sink) as Arc<dyn LeadSink>,
            ),
            registry,
            sink,
        }
    }

    async fn open(&self, context: FlowContext) -> (SessionId, FlowKind) {
        let result = self
            .start
            .handle(StartFlowCommand { context })
            .await
            .unwrap();
        (result.session_id, result.kind)
    }

    async fn say(
        &self,
        session_id: SessionId,
        input: &str,
    ) -> estate_guide::application::handlers::SendInputResult {
        self.input
            .handle(SendInputCommand {
                session_id,
                input: input.to_string(),
            })
            .await
            .unwrap()
    }

    async fn say_err(
        &self,
        session_id: SessionId,
        input: &str,
    ) -> estate_guide::domain::foundation::DomainError {
        self.input
            .handle(SendInputCommand {
                session_id,
                input: input.to_string(),
            })
            .await
            .unwrap_err()
    }
}

fn navigation_href(effect: &Option<SideEffect>) -> String {
    match effect {
        Some(SideEffect::Navigate { target }) => target.href(),
        other => panic!("expected navigation, got {:?}", other),
    }
}

#[tokio::test]
async fn seller_is_handed_off_to_the_listing_form() {
    let h = Harness::new();
    let (id, kind) = h.open(FlowContext::for_path("/")).await;
    assert_eq!(kind, FlowKind::Buyer);

    h.say(id, "Seller").await;
    let result = h.say(id, "Post Your Property").await;
    assert!(result.ended);
    assert_eq!(navigation_href(&result.side_effect), "/post-property");
}

#[tokio::test]
async fn buyer_funnel_ends_at_a_search_url() {
    let h = Harness::new();
    let (id, _) = h.open(FlowContext::for_path("/")).await;

    h.say(id, "Want to buy a property").await;
    h.say(id, "Villa").await;
    h.say(id, "1-2Cr").await;
    let result = h.say(id, "Hyderabad").await;

    assert!(result.ended);
    assert_eq!(
        navigation_href(&result.side_effect),
        "/search?type=buy&location=Hyderabad&propertyType=Villa"
    );
}

#[tokio::test]
async fn unrecognized_input_reprompts_without_advancing() {
    let h = Harness::new();
    let (id, _) = h.open(FlowContext::for_path("/")).await;

    let result = h.say(id, "what is the meaning of life").await;
    assert!(!result.ended);
    assert!(!result.superseded);
    assert_eq!(result.messages.len(), 1);
    assert!(!result.messages[0].options().is_empty());

    // Still on the opening prompt: a valid role continues normally.
    let result = h.say(id, "Builder").await;
    assert!(!result.messages.is_empty());
}

#[tokio::test]
async fn search_flow_requires_ten_digit_phone_at_the_gate() {
    let h = Harness::new();
    let (id, kind) = h
        .open(FlowContext::for_path("/search").with_search_tab(SearchTab::Buy))
        .await;
    assert_eq!(kind, FlowKind::Search);

    h.say(id, "Apartment").await;
    h.say(id, "2 BHK").await;
    h.say(id, "Whitefield, Bangalore").await;
    h.say(id, "Refine Search").await;
    h.say(id, "50L-1Cr").await;

    let bad = h
        .lead
        .handle(SubmitLeadCommand {
            session_id: id,
            details: LeadDetails::new("Asha", "asha@example.com", "98-76", None),
        })
        .await
        .unwrap_err();
    assert_eq!(bad.code, ErrorCode::InvalidFormat);
    assert_eq!(h.sink.count(), 0);

    h.lead
        .handle(SubmitLeadCommand {
            session_id: id,
            details: LeadDetails::new("Asha", "asha@example.com", "9876543210", None),
        })
        .await
        .unwrap();
    assert_eq!(h.sink.count(), 1);
    assert_eq!(
        h.sink.records()[0].source,
        LeadSource::ChatFlow(FlowKind::Search)
    );
}

#[tokio::test]
async fn commercial_tab_drives_commercial_search_vocabulary() {
    let h = Harness::new();
    let (id, _) = h
        .open(FlowContext::for_path("/search").with_search_tab(SearchTab::Commercial))
        .await;

    h.say(id, "Commercial Space").await;
    h.say(id, "Mumbai").await;
    let result = h.say(id, "Show Properties").await;

    assert_eq!(
        navigation_href(&result.side_effect),
        "/search?type=commercial&location=Mumbai&propertyType=Commercial%20Space/Building"
    );
}

#[tokio::test]
async fn plan_support_collects_a_lead_and_closes() {
    let h = Harness::new();
    let (id, kind) = h.open(FlowContext::for_path("/plans")).await;
    assert_eq!(kind, FlowKind::PlanSupport);

    h.say(id, "Platinum Plan").await;
    h.say(id, "Is there an annual discount?").await;

    let result = h
        .lead
        .handle(SubmitLeadCommand {
            session_id: id,
            details: LeadDetails::new(
                "Ravi",
                "ravi@example.com",
                "9123456780",
                Some("Platinum Plan".to_string()),
            ),
        })
        .await
        .unwrap();
    assert!(!result.messages.is_empty());

    let result = h.say(id, "That's all").await;
    assert!(result.ended);

    let err = h.say_err(id, "one more thing").await;
    assert_eq!(err.code, ErrorCode::FlowEnded);
}

#[tokio::test]
async fn service_context_routes_straight_to_detail_gathering() {
    let h = Harness::new();
    let (id, kind) = h
        .open(FlowContext::for_path("/services/home-loans").with_service(ServiceKind::HomeLoans))
        .await;
    assert_eq!(kind, FlowKind::ServiceSupport);

    h.say(id, "Need a loan for a resale flat").await;
    h.lead
        .handle(SubmitLeadCommand {
            session_id: id,
            details: LeadDetails::new("Meera", "meera@example.com", "9000000001", None),
        })
        .await
        .unwrap();
    assert_eq!(h.sink.count(), 1);
}

#[tokio::test]
async fn duplicate_lead_submission_conflicts() {
    let h = Harness::new();
    let (id, _) = h.open(FlowContext::for_path("/plans")).await;

    h.say(id, "Gold Plan").await;
    h.say(id, "Tell me more").await;

    let details = LeadDetails::new(
        "Asha",
        "asha@example.com",
        "9876543210",
        Some("Gold Plan".to_string()),
    );
    h.lead
        .handle(SubmitLeadCommand {
            session_id: id,
            details: details.clone(),
        })
        .await
        .unwrap();

    let err = h
        .lead
        .handle(SubmitLeadCommand {
            session_id: id,
            details,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::LeadAlreadyCaptured);
    assert_eq!(h.sink.count(), 1);
}

#[tokio::test]
async fn restart_discards_the_pending_reply() {
    let h = Harness::new();
    let registry = Arc::clone(&h.registry);
    let (id, _) = h.open(FlowContext::for_path("/")).await;

    let slow_input = SendInputHandler::new(Arc::clone(&registry), Duration::from_millis(50));
    let pending = tokio::spawn(async move {
        slow_input
            .handle(SendInputCommand {
                session_id: id,
                input: "Want to buy a property".to_string(),
            })
            .await
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    registry
        .modify(&id, |session| {
            let config = estate_guide::domain::flow::configs::flow_config(
                FlowKind::Buyer,
                &FlowContext::default(),
            );
            session.restart(config)
        })
        .await
        .unwrap();

    let result = pending.await.unwrap().unwrap();
    assert!(result.superseded);
    assert!(result.messages.is_empty());
}
