#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
///
/// The gateway collapses all transport, API, and parse failures into `Llm`
/// with an operation-tagged message; the state machine converts that into
/// the single user-facing error string. `Validation` is detected before any
/// external call and its message is shown verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
