//! Callable wrapper around a formatter.
//!
//! [`Pen`] carries no state of its own: every [`Fluent`] member forwards to
//! the wrapped [`Scrawl`] and hands back the wrapper, so a chain that
//! passes through the delegation stays both callable and chainable at
//! every step. Invoking a pen via [`call`](Fluent::call) is identical to
//! its plain [`log`](Fluent::log).
//!
//! # Example
//!
//! ```rust
//! use scrawl::{Fluent, MemorySink, Pen, Scrawl};
//!
//! let sink = MemorySink::new();
//! let mut pen = Pen::wrap(Scrawl::new().sink(sink.clone()));
//!
//! pen.call("hello")?;
//! pen.red().bold().log("danger")?;
//! assert!(sink.transcript().contains("hello"));
//! # Ok::<(), scrawl::ScrawlError>(())
//! ```

use console::Attribute;

use scrawl_render::{Payload, Tint};

use crate::error::Result;
use crate::fluent::Fluent;
use crate::logger::{Scrawl, SepArgs};

/// A stateless, invocable handle over a [`Scrawl`].
#[derive(Debug, Default)]
pub struct Pen {
    inner: Scrawl,
}

impl Pen {
    /// A pen over a default formatter (stdout, system clock).
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing formatter.
    pub fn wrap(inner: Scrawl) -> Self {
        Self { inner }
    }

    /// Unwraps back into the formatter.
    pub fn into_inner(self) -> Scrawl {
        self.inner
    }
}

impl Fluent for Pen {
    fn tint(&mut self, tint: Tint) -> &mut Self {
        self.inner.tint(tint);
        self
    }

    fn accent(&mut self, accent: Attribute) -> &mut Self {
        self.inner.accent(accent);
        self
    }

    fn timed(&mut self) -> &mut Self {
        self.inner.timed();
        self
    }

    fn ow(&mut self) -> &mut Self {
        self.inner.ow();
        self
    }

    fn log(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.inner.log(message)?;
        Ok(self)
    }

    fn error(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.inner.error(message)?;
        Ok(self)
    }

    fn success(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.inner.success(message)?;
        Ok(self)
    }

    fn warning(&mut self, message: impl Into<Payload>) -> Result<&mut Self> {
        self.inner.warning(message)?;
        Ok(self)
    }

    fn sep(&mut self, args: impl Into<SepArgs>) -> Result<&mut Self> {
        self.inner.sep(args)?;
        Ok(self)
    }

    fn progress(
        &mut self,
        message: impl Into<Payload>,
        total: u64,
        current: u64,
    ) -> Result<&mut Self> {
        self.inner.progress(message, total, current)?;
        Ok(self)
    }
}
