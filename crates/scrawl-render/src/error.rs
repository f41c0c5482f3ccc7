//! Error type for payload rendering.
//!
//! This module provides [`RenderError`], returned by the structured-payload
//! rendering path. It abstracts over the underlying serialization crates so
//! the public API stays stable.

use std::fmt;

/// Error type for payload rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// Pretty-printing or payload serialization failed.
    Serialization(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}
