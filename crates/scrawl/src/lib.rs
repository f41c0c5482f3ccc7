//! # Scrawl - Fluent Terminal Line Formatter
//!
//! Scrawl renders strings, numbers, and structured data to a terminal with
//! color, emphasis, timestamps, and overwrite-in-place output, behind a
//! chainable configuration API:
//!
//! - Chainable accessors: colors (`red`…`white`), modifiers
//!   (`bold`…`hidden`), `timed`, `ow`
//! - Semantic levels: `log`, `error`, `success`, `warning`
//! - Conveniences: `sep` separator lines and a `progress` bar
//! - Overwrite mode that erases exactly what the previous in-place print
//!   wrote, even when it spanned multiple lines
//!
//! Styling rides on the `console` crate; structured payloads pretty-print
//! as indented key/value text; output and clock are injectable so nothing
//! global leaks between instances.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scrawl::{Fluent, Scrawl};
//!
//! let mut out = Scrawl::new();
//!
//! out.log("plain line")?;
//! out.red().bold().log("something broke")?;
//! out.timed().success("deployed")?;
//! out.sep(())?;
//!
//! for step in 0..=20u64 {
//!     out.progress("syncing", 20, step)?;
//! }
//! out.log("done")?;
//! # Ok::<(), scrawl::ScrawlError>(())
//! ```
//!
//! ## Pending Configuration
//!
//! Chained accessors accumulate a pending configuration; the terminal
//! operation at the end of the chain consumes it and resets to defaults
//! (white, no modifiers, not timed, not overwriting). The last color
//! selected wins; modifiers accumulate in order.
//!
//! ```rust
//! use scrawl::{Fluent, MemorySink, Scrawl};
//!
//! let sink = MemorySink::new();
//! let mut out = Scrawl::new().sink(sink.clone());
//!
//! // Green wins over red; bold and underline both apply.
//! out.red().bold().green().underline().log("fine")?;
//!
//! // The next print is back to defaults.
//! out.log("plain")?;
//! # Ok::<(), scrawl::ScrawlError>(())
//! ```
//!
//! ## Overwrite Mode
//!
//! `ow` writes without a trailing newline and records how many lines went
//! out; the next print first erases exactly those lines. `progress` uses
//! this to redraw its two-line message in place.
//!
//! ## Direct Invocation
//!
//! [`Pen`] wraps a formatter into a callable handle: `pen.call(v)` is
//! `pen.log(v)`, and every chainable member forwards, so the wrapper is
//! transparent.
//!
//! ## Configuration
//!
//! [`ScrawlConfig`] controls escape-code emission and bar/separator
//! geometry, programmatically or from YAML:
//!
//! ```rust
//! use scrawl::{Fluent, MemorySink, Scrawl, ScrawlConfig};
//!
//! let config = ScrawlConfig::from_yaml(r#"
//! styling: never
//! bar:
//!   width: 10
//! "#)?;
//!
//! let sink = MemorySink::new();
//! let mut out = Scrawl::new().sink(sink.clone()).config(config);
//! out.progress("copying", 2, 1)?;
//! assert!(sink.transcript().contains("|█████-----|"));
//! # Ok::<(), scrawl::ScrawlError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod fluent;
pub mod logger;
pub mod pen;
mod progress;

pub use clock::{SystemClock, WallClock};
pub use config::{BarStyle, RuleStyle, ScrawlConfig};
pub use error::{Result, ScrawlError};
pub use fluent::Fluent;
pub use logger::{Scrawl, SepArgs};
pub use pen::Pen;

pub use scrawl_render::{
    Attribute, ConsoleSink, MemorySink, Payload, RenderError, SinkOp, StyleSpec, StylingChoice,
    TermSink, Tint,
};
