//! Typed contract for model compile replies.
//!
//! The prompt asks the model for a single JSON object with `code` and
//! `imagined_terminal` fields. [`parse_reply`] enforces that shape before
//! anything reaches a caller: empty content and malformed or mis-shaped JSON
//! are rejected here instead of being passed through unchecked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A compiled Parrot program as promised by the prompt contract.
///
/// Extra fields in the reply are ignored; missing or wrong-typed required
/// fields fail the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledProgram {
    /// Executable JavaScript text.
    pub code: String,
    /// Model-guessed log lines in execution order. Non-authoritative.
    pub imagined_terminal: Vec<String>,
}

/// Ways a model reply can violate the compile contract.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Reply content was empty or whitespace-only.
    #[error("model reply content is empty")]
    Empty,

    /// Reply content was not the promised JSON object shape.
    #[error("model reply does not match the compile contract: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses raw reply content into a validated [`CompiledProgram`].
pub fn parse_reply(raw: &str) -> Result<CompiledProgram, ContractError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContractError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}
