//! The formatter state machine: pending configuration, print, overwrite.
//!
//! A [`Scrawl`] accumulates one pending configuration (tint, accents,
//! timed, overwrite) through [`Fluent`] calls, then a terminal operation
//! consumes it: the payload is rendered to plain text, the timestamp label
//! is prefixed, the whole line is painted once with `[tint, ...accents]`,
//! any output left by a previous overwrite print is erased, the line is
//! written, and the pending configuration resets to defaults.
//!
//! Overwrite bookkeeping tracks the exact number of lines the last
//! overwrite print produced, so multi-line output (progress messages,
//! structured payloads) is erased completely before the replacement write.

use std::fmt;

use console::Attribute;

use scrawl_render::{ConsoleSink, Payload, StyleSpec, TermSink, Tint};

use crate::clock::{SystemClock, WallClock};
use crate::config::ScrawlConfig;
use crate::error::Result;
use crate::fluent::Fluent;
use crate::progress;

/// Pending per-print configuration. Never survives a print.
#[derive(Debug, Clone, Default)]
struct Pending {
    style: StyleSpec,
    timed: bool,
    overwrite: bool,
}

/// A stateful terminal line formatter.
///
/// Construct one explicitly and pass it where it is needed; sink, clock,
/// and config are all injectable, so instances are isolated and tests can
/// run in parallel without cross-contaminating pending state.
///
/// # Example
///
/// ```rust
/// use scrawl::{Fluent, MemorySink, Scrawl};
///
/// let sink = MemorySink::new();
/// let mut out = Scrawl::new().sink(sink.clone());
///
/// out.green().bold().log("ready")?;
/// assert!(sink.transcript().contains("ready"));
/// # Ok::<(), scrawl::ScrawlError>(())
/// ```
pub struct Scrawl {
    pending: Pending,
    /// Lines left on screen by the last overwrite print; erased before the
    /// next write. Updated only by the print pipeline.
    overhang: usize,
    sink: Box<dyn ConsoleSink>,
    clock: Box<dyn WallClock>,
    config: ScrawlConfig,
}

impl Scrawl {
    /// A formatter writing to stdout with the system clock and default
    /// config.
    pub fn new() -> Self {
        Self {
            pending: Pending::default(),
            overhang: 0,
            sink: Box::new(TermSink::stdout()),
            clock: Box::new(SystemClock),
            config: ScrawlConfig::default(),
        }
    }

    /// A formatter writing to stderr.
    pub fn stderr() -> Self {
        Self::new().sink(TermSink::stderr())
    }

    /// Replaces the output sink.
    pub fn sink(mut self, sink: impl ConsoleSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replaces the clock used for timed output.
    pub fn clock(mut self, clock: impl WallClock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the configuration.
    pub fn config(mut self, config: ScrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// The print pipeline. Every terminal operation funnels through here.
    fn print(&mut self, message: Payload) -> Result<&mut Self> {
        let choice = self.config.styling;

        let body = message.to_plain(self.pending.style.tint, choice)?;
        let composed = if self.pending.timed {
            let joint = if message.is_structured() { "\n" } else { " - " };
            format!("[{}]{}{}", self.clock.timestamp(), joint, body)
        } else {
            body
        };

        let styled = self.pending.style.paint(&composed, choice);

        // Erase whatever the previous overwrite print left behind: the line
        // the cursor sits on, then the lines above it.
        if self.overhang > 0 {
            self.sink.clear_line()?;
            if self.overhang > 1 {
                self.sink.clear_last_lines(self.overhang - 1)?;
            }
        }

        if self.pending.overwrite {
            self.sink.write_str(&styled)?;
            self.overhang = composed.matches('\n').count() + 1;
        } else {
            self.sink.write_line(&styled)?;
            self.overhang = 0;
        }

        self.pending = Pending::default();
        Ok(self)
    }
}

impl Default for Scrawl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scrawl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrawl")
            .field("pending", &self.pending)
            .field("overhang", &self.overhang)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Fluent for Scrawl {
    fn tint(&mut self, tint: Tint) -> &mut Self {
        self.pending.style.tint = tint;
        self
    }

    fn accent(&mut self, accent: Attribute) -> &mut Self {
        self.pending.style.accents.push(accent);
        self
    }

    fn timed(&mut self) -> &mut Self {
        self.pending.timed = true;
        self
    }

    fn ow(&mut self) -> &mut Self {
        self.pending.overwrite = true;
        self
    }

    fn log(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.print(message.into())
    }

    fn error(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.pending.style.tint = Tint::Red;
        self.pending.style.accents.push(Attribute::Bold);
        self.pending.style.accents.push(Attribute::Reverse);
        self.print(message.into())
    }

    fn success(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.pending.style.tint = Tint::Blue;
        self.pending.style.accents.push(Attribute::Bold);
        self.pending.style.accents.push(Attribute::Reverse);
        self.print(message.into())
    }

    fn warning(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.pending.style.tint = Tint::Yellow;
        self.print(message.into())
    }

    fn sep(&mut self, args: impl Into<SepArgs>) -> Result<&mut Self> {
        let args = args.into();
        let width = args.count.unwrap_or(self.config.rule.width);
        let glyph = args
            .glyph
            .unwrap_or_else(|| self.config.rule.glyph.clone());
        self.print(Payload::Text(glyph.repeat(width)))
    }

    fn progress(
        &mut self,
        message: impl Into<Payload>,
        total: u64,
        current: u64,
    ) -> Result<&mut Self> {
        self.pending.overwrite = true;
        self.pending.timed = true;
        self.pending.style.tint = Tint::Cyan;

        let caption = message.into().to_unstyled()?;
        let bar = progress::bar(total, current, &self.config.bar);
        let pct = progress::percentage(total, current);
        let counter = format!("{} of {}   |{}| {:.2}%", current, total, bar, pct);

        self.print(Payload::Text(format!("{}\n{}", caption, counter)))
    }
}

/// Arguments to [`Fluent::sep`]: a repeat count, a glyph, both in either
/// order, or neither.
///
/// ```rust
/// use scrawl::SepArgs;
///
/// assert_eq!(SepArgs::from(()), SepArgs { count: None, glyph: None });
/// assert_eq!(SepArgs::from((3, "#")), SepArgs::from(("#", 3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SepArgs {
    pub count: Option<usize>,
    pub glyph: Option<String>,
}

impl From<()> for SepArgs {
    fn from(_: ()) -> Self {
        SepArgs::default()
    }
}

impl From<usize> for SepArgs {
    fn from(count: usize) -> Self {
        SepArgs {
            count: Some(count),
            glyph: None,
        }
    }
}

impl From<i32> for SepArgs {
    fn from(count: i32) -> Self {
        SepArgs {
            count: Some(count.max(0) as usize),
            glyph: None,
        }
    }
}

impl From<&str> for SepArgs {
    fn from(glyph: &str) -> Self {
        SepArgs {
            count: None,
            glyph: Some(glyph.to_string()),
        }
    }
}

impl From<String> for SepArgs {
    fn from(glyph: String) -> Self {
        SepArgs {
            count: None,
            glyph: Some(glyph),
        }
    }
}

impl From<char> for SepArgs {
    fn from(glyph: char) -> Self {
        SepArgs {
            count: None,
            glyph: Some(glyph.to_string()),
        }
    }
}

impl From<(usize, &str)> for SepArgs {
    fn from((count, glyph): (usize, &str)) -> Self {
        SepArgs {
            count: Some(count),
            glyph: Some(glyph.to_string()),
        }
    }
}

impl From<(&str, usize)> for SepArgs {
    fn from((glyph, count): (&str, usize)) -> Self {
        (count, glyph).into()
    }
}

impl From<(i32, &str)> for SepArgs {
    fn from((count, glyph): (i32, &str)) -> Self {
        (count.max(0) as usize, glyph).into()
    }
}

impl From<(&str, i32)> for SepArgs {
    fn from((glyph, count): (&str, i32)) -> Self {
        (count, glyph).into()
    }
}

impl From<(i32, char)> for SepArgs {
    fn from((count, glyph): (i32, char)) -> Self {
        (count.max(0) as usize, glyph).into()
    }
}

impl From<(char, i32)> for SepArgs {
    fn from((glyph, count): (char, i32)) -> Self {
        (count, glyph).into()
    }
}

impl From<(usize, char)> for SepArgs {
    fn from((count, glyph): (usize, char)) -> Self {
        SepArgs {
            count: Some(count),
            glyph: Some(glyph.to_string()),
        }
    }
}

impl From<(char, usize)> for SepArgs {
    fn from((glyph, count): (char, usize)) -> Self {
        (count, glyph).into()
    }
}
