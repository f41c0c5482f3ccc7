//! The chainable formatter surface.
//!
//! [`Fluent`] enumerates every forwarded member explicitly: the four state
//! mutations, the six terminal operations, and the named color/modifier
//! accessors layered on top as provided methods. Anything that implements
//! the required set — the formatter itself, or a wrapper delegating to one
//! — gets the full chainable surface, and chains keep returning the same
//! implementor so they stay chainable after delegation.
//!
//! [`call`](Fluent::call) is the invocation operation: directly invoking an
//! implementor is identical to its plain [`log`](Fluent::log).

use console::Attribute;

use scrawl_render::{Payload, Tint};

use crate::error::Result;
use crate::logger::SepArgs;

/// Chainable configuration plus terminal operations.
///
/// Configuration methods mutate pending state and return the implementor;
/// terminal operations consume the pending state, write one styled line,
/// reset to defaults, and also return the implementor for further chaining.
pub trait Fluent {
    /// Selects the foreground color for the next print. Last selection wins.
    fn tint(&mut self, tint: Tint) -> &mut Self;

    /// Appends a text modifier for the next print. Additive.
    fn accent(&mut self, accent: Attribute) -> &mut Self;

    /// Prefixes the next print with a bracketed `HH:MM:SS` label.
    fn timed(&mut self) -> &mut Self;

    /// Writes the next print in place over the previous output.
    fn ow(&mut self) -> &mut Self;

    /// Prints with whatever was chained.
    fn log(&mut self, message: impl Into<Payload>) -> Result<&mut Self>;

    /// Prints red, bold, and inverse.
    fn error(&mut self, message: impl Into<Payload>) -> Result<&mut Self>;

    /// Prints blue, bold, and inverse.
    fn success(&mut self, message: impl Into<Payload>) -> Result<&mut Self>;

    /// Prints yellow, with no forced modifiers.
    fn warning(&mut self, message: impl Into<Payload>) -> Result<&mut Self>;

    /// Prints a repeated-glyph separator line. See [`SepArgs`] for the
    /// accepted argument shapes.
    fn sep(&mut self, args: impl Into<SepArgs>) -> Result<&mut Self>;

    /// Prints a two-line progress message (caption, then counter and bar),
    /// timed, cyan, and overwriting in place.
    fn progress(&mut self, message: impl Into<Payload>, total: u64, current: u64)
        -> Result<&mut Self>;

    /// Direct invocation: identical to [`log`](Fluent::log).
    fn call(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.log(message)
    }

    fn red(&mut self) -> &mut Self {
        self.tint(Tint::Red)
    }

    fn green(&mut self) -> &mut Self {
        self.tint(Tint::Green)
    }

    fn yellow(&mut self) -> &mut Self {
        self.tint(Tint::Yellow)
    }

    fn blue(&mut self) -> &mut Self {
        self.tint(Tint::Blue)
    }

    fn magenta(&mut self) -> &mut Self {
        self.tint(Tint::Magenta)
    }

    fn cyan(&mut self) -> &mut Self {
        self.tint(Tint::Cyan)
    }

    fn white(&mut self) -> &mut Self {
        self.tint(Tint::White)
    }

    fn bold(&mut self) -> &mut Self {
        self.accent(Attribute::Bold)
    }

    fn italic(&mut self) -> &mut Self {
        self.accent(Attribute::Italic)
    }

    fn underline(&mut self) -> &mut Self {
        self.accent(Attribute::Underlined)
    }

    fn strikethrough(&mut self) -> &mut Self {
        self.accent(Attribute::StrikeThrough)
    }

    fn dim(&mut self) -> &mut Self {
        self.accent(Attribute::Dim)
    }

    fn blink(&mut self) -> &mut Self {
        self.accent(Attribute::Blink)
    }

    fn inverse(&mut self) -> &mut Self {
        self.accent(Attribute::Reverse)
    }

    fn hidden(&mut self) -> &mut Self {
        self.accent(Attribute::Hidden)
    }
}
