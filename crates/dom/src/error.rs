//! Error types for the node tree
//!
//! Tree operations never fail: absent targets are no-ops. The only fallible
//! path is loading a context configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
