//! Style composition over the `console` primitive.
//!
//! A print operation carries one [`StyleSpec`]: a tint (foreground color,
//! last selection wins) plus any number of accents (text attributes, in the
//! order they were added). At print time the spec is composed into a single
//! [`console::Style`] and applied to the whole line.
//!
//! # Example
//!
//! ```rust
//! use scrawl_render::{StyleSpec, StylingChoice, Tint};
//! use console::Attribute;
//!
//! let spec = StyleSpec {
//!     tint: Tint::Red,
//!     accents: vec![Attribute::Bold],
//! };
//! let painted = spec.paint("failed", StylingChoice::Always);
//! assert!(painted.contains("\u{1b}[31m"));
//! assert!(painted.contains("\u{1b}[1m"));
//! ```

use console::{Attribute, Color, Style};
use serde::{Deserialize, Serialize};

/// The fixed set of named foreground colors a formatter can select.
///
/// Selecting a tint replaces any previously selected one; the default is
/// [`Tint::White`], which is also what every print resets back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl From<Tint> for Color {
    fn from(tint: Tint) -> Self {
        match tint {
            Tint::Red => Color::Red,
            Tint::Green => Color::Green,
            Tint::Yellow => Color::Yellow,
            Tint::Blue => Color::Blue,
            Tint::Magenta => Color::Magenta,
            Tint::Cyan => Color::Cyan,
            Tint::White => Color::White,
        }
    }
}

/// Whether escape codes are emitted when painting.
///
/// `Always` matches the behavior of skipping stream-capability validation:
/// codes are emitted even when the destination is not a terminal. `Auto`
/// defers to `console`'s own detection (TTY, `NO_COLOR`, `CLICOLOR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylingChoice {
    #[default]
    Always,
    Auto,
    Never,
}

/// The accumulated style for one print: tint first, then accents in the
/// order they were added.
///
/// Duplicate accents are kept here; the styling primitive coalesces them
/// when the escape codes are written, which is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSpec {
    pub tint: Tint,
    pub accents: Vec<Attribute>,
}

impl StyleSpec {
    /// Composes the spec into a single `console::Style`, tint first.
    pub fn compose(&self) -> Style {
        let mut style = Style::new().fg(self.tint.into());
        for accent in &self.accents {
            style = style.attr(*accent);
        }
        style
    }

    /// Applies the composed style to `text`.
    pub fn paint(&self, text: &str, choice: StylingChoice) -> String {
        match choice {
            StylingChoice::Never => text.to_string(),
            StylingChoice::Auto => self.compose().apply_to(text).to_string(),
            StylingChoice::Always => self
                .compose()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
        }
    }
}
