//! Use-case handlers, one file per operation.

pub mod get_transcript;
pub mod send_input;
pub mod start_flow;
pub mod submit_intake;
pub mod submit_lead;

pub use get_transcript::{GetTranscriptHandler, TranscriptView};
pub use send_input::{SendInputCommand, SendInputHandler, SendInputResult};
pub use start_flow::{StartFlowCommand, StartFlowHandler, StartFlowResult};
pub use submit_intake::{SubmitIntakeCommand, SubmitIntakeHandler, SubmitIntakeResult};
pub use submit_lead::{SubmitLeadCommand, SubmitLeadHandler, SubmitLeadResult};
