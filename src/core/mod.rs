//! Core orchestration logic.
//!
//! - `retry`: bounded retry-on-server-error combinator
//! - `orchestrator`: one end-to-end fetch/transform/submit run

pub mod orchestrator;
pub mod retry;

pub use orchestrator::{Orchestrator, RunError};
pub use retry::{retry_on_server_error, DEFAULT_ATTEMPTS};
