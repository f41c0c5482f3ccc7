//! Wall-clock access for timestamped output.
//!
//! Timed prints carry a bracketed `HH:MM:SS` label. The label's source is
//! behind [`WallClock`] so tests can pin the time; a blanket impl lets any
//! `Fn() -> String` closure act as a clock.
//!
//! ```rust
//! use scrawl::clock::WallClock;
//!
//! let fixed = || String::from("12:34:56");
//! assert_eq!(fixed.timestamp(), "12:34:56");
//! ```

use chrono::Local;

/// Source of the label used by timed output.
pub trait WallClock {
    /// The current wall-clock time as zero-padded 24-hour `HH:MM:SS`.
    fn timestamp(&self) -> String;
}

impl<F> WallClock for F
where
    F: Fn() -> String,
{
    fn timestamp(&self) -> String {
        (self)()
    }
}

/// The process-local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}
