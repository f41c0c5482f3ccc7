//! Payload values accepted by the formatter.
//!
//! The formatter prints numbers, text, or structured data. Instead of
//! sniffing types at runtime, callers hand over a [`Payload`] — usually
//! implicitly, through the `From` impls for common numeric and string types
//! and for `serde_json::Value`.
//!
//! Structured payloads are rendered through the pretty-printer into
//! indented, multi-line key/value text. Numeric payloads are converted to
//! text and pre-painted with the current tint only (no accents) before the
//! whole line is styled again; the nested codes are intentional and
//! observable.

use serde::Serialize;
use serde_json::Value;

use crate::error::RenderError;
use crate::style::{StyleSpec, StylingChoice, Tint};

/// A value the formatter can print.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Number(f64),
    Text(String),
    Structured(Value),
}

impl Payload {
    /// Builds a structured payload from any serializable value.
    ///
    /// ```rust
    /// use scrawl_render::Payload;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Job { name: String, done: bool }
    ///
    /// let payload = Payload::structured(&Job { name: "sync".into(), done: false }).unwrap();
    /// assert!(payload.is_structured());
    /// ```
    pub fn structured<T: Serialize>(data: &T) -> Result<Self, RenderError> {
        Ok(Payload::Structured(serde_json::to_value(data)?))
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Payload::Structured(_))
    }

    /// Renders the payload to plain text for the print pipeline.
    ///
    /// Numbers are pre-painted with `tint` alone here; the caller styles
    /// the complete line afterwards, producing the doubled color codes.
    pub fn to_plain(&self, tint: Tint, choice: StylingChoice) -> Result<String, RenderError> {
        match self {
            Payload::Structured(value) => render_structured(value),
            Payload::Number(n) => {
                let spec = StyleSpec {
                    tint,
                    accents: Vec::new(),
                };
                Ok(spec.paint(&n.to_string(), choice))
            }
            Payload::Text(text) => Ok(text.clone()),
        }
    }

    /// Renders the payload without any styling.
    ///
    /// Used where the payload is embedded into a larger composed message
    /// (the progress caption) rather than printed on its own.
    pub fn to_unstyled(&self) -> Result<String, RenderError> {
        match self {
            Payload::Structured(value) => render_structured(value),
            Payload::Number(n) => Ok(n.to_string()),
            Payload::Text(text) => Ok(text.clone()),
        }
    }
}

/// Renders a structured value as indented key/value text, one entry per
/// line, nested maps indented below their key.
pub fn render_structured(value: &Value) -> Result<String, RenderError> {
    let text = serde_yaml::to_string(value)?;
    Ok(text.trim_end_matches('\n').to_string())
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Structured(value)
    }
}

impl From<f64> for Payload {
    fn from(n: f64) -> Self {
        Payload::Number(n)
    }
}

impl From<f32> for Payload {
    fn from(n: f32) -> Self {
        Payload::Number(f64::from(n))
    }
}

impl From<i32> for Payload {
    fn from(n: i32) -> Self {
        Payload::Number(f64::from(n))
    }
}

impl From<i64> for Payload {
    fn from(n: i64) -> Self {
        Payload::Number(n as f64)
    }
}

impl From<u32> for Payload {
    fn from(n: u32) -> Self {
        Payload::Number(f64::from(n))
    }
}

impl From<u64> for Payload {
    fn from(n: u64) -> Self {
        Payload::Number(n as f64)
    }
}

impl From<usize> for Payload {
    fn from(n: usize) -> Self {
        Payload::Number(n as f64)
    }
}
