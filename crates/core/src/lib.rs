//! Core library for Referent: extract an English-language article from a
//! URL, translate it to Russian, and derive summaries, thesis lists, or
//! social-media posts through an external generation service.
//!
//! The flow is strictly sequential, fetch → extract → translate →
//! (artifact), and every outbound call shares the same 30-second deadline
//! with no retries. See [`pipeline::Session`] for the orchestrator and
//! [`extract::extract`] for the never-failing extraction heuristic.

pub mod deadline;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod generate;
pub mod parse;
pub mod pipeline;
pub mod preprocess;
pub mod prompt;

pub use deadline::{CallOutcome, with_deadline};
pub use error::{ReferentError, Result, UpstreamKind};
pub use extract::{NOT_FOUND, ParsedArticle, extract};
pub use fetch::{FetchConfig, fetch_url};
pub use generate::{GenerateConfig, Generator};
pub use parse::{Document, Element};
pub use pipeline::{Phase, Session, label_for_translation};
pub use preprocess::strip_boilerplate;
pub use prompt::{Action, Prompt, PromptBuilder};
