//! Crate error type
//!
//! Every variant is a caller mistake (a malformed value handed to a
//! constructor or query). Nothing here is transient, so there is no retry.

use thiserror::Error;

/// Errors raised by simulation constructors, queries and config loading.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("{what} must be a finite vector, got ({x}, {y})")]
    NonFiniteVector { what: &'static str, x: f64, y: f64 },

    #[error("elapsed time must be finite and non-negative, got {0}")]
    InvalidStep(f64),

    #[error("coin spring phase must be finite, got {0}")]
    InvalidSpringPhase(f64),

    #[error("symbol table key {0:?} must be exactly one character")]
    SymbolKey(String),

    #[error("symbol table decode error: {0}")]
    SymbolTable(#[source] serde_json::Error),

    #[error("level data decode error: {0}")]
    LevelData(#[source] serde_json::Error),
}
