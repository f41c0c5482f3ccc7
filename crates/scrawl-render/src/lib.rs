//! # Scrawl Render - Rendering Foundation
//!
//! `scrawl-render` provides the rendering layer for the `scrawl` terminal
//! formatter: payload values and their plain-text rendering, style
//! composition over the `console` primitive, and the output sink
//! abstraction that carries both text and terminal erase operations.
//!
//! This crate is the foundation for the `scrawl` facade, but can be used
//! independently wherever a styled line and a controllable destination are
//! enough.
//!
//! ## Core Concepts
//!
//! - [`Payload`]: tagged value to print — number, text, or structured data
//! - [`Tint`] / [`StyleSpec`]: color-first, ordered style composition
//! - [`StylingChoice`]: emit codes always, by detection, or never
//! - [`ConsoleSink`]: destination trait with write and erase operations
//! - [`TermSink`] / [`MemorySink`]: terminal and capturing implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use scrawl_render::{Payload, StyleSpec, StylingChoice, Tint};
//! use console::Attribute;
//!
//! let payload = Payload::from("3 files copied");
//! let body = payload.to_plain(Tint::Green, StylingChoice::Always).unwrap();
//!
//! let spec = StyleSpec { tint: Tint::Green, accents: vec![Attribute::Bold] };
//! let line = spec.paint(&body, StylingChoice::Always);
//! assert!(line.contains("3 files copied"));
//! ```

pub mod error;
pub mod sink;
pub mod style;
pub mod value;

pub use console::Attribute;
pub use error::RenderError;
pub use sink::{ConsoleSink, MemorySink, SinkOp, TermSink};
pub use style::{StyleSpec, StylingChoice, Tint};
pub use value::{render_structured, Payload};
