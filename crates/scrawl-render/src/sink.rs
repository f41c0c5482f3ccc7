//! Output sinks: where rendered lines and erase sequences go.
//!
//! The formatter talks to the terminal through the [`ConsoleSink`] trait so
//! the write/erase stream is injectable. [`TermSink`] is the production
//! implementation over [`console::Term`]; [`MemorySink`] records the exact
//! operation sequence for assertions.
//!
//! # Single-Threaded Design
//!
//! Formatters are single-threaded by design; [`MemorySink`] shares its
//! buffer through `Rc` and makes no `Send`/`Sync` promises.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use console::Term;

/// Destination for rendered output and terminal erase operations.
pub trait ConsoleSink {
    /// Writes `text` without a trailing newline.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Clears the line the cursor is on and returns to column start.
    fn clear_line(&mut self) -> io::Result<()>;

    /// Clears the `n` lines above the cursor, leaving it at the top of the
    /// cleared block.
    fn clear_last_lines(&mut self, n: usize) -> io::Result<()>;
}

/// Sink writing to a real terminal via `console::Term`.
pub struct TermSink {
    term: Term,
}

impl TermSink {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl ConsoleSink for TermSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.term.write_str(text)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn clear_line(&mut self) -> io::Result<()> {
        self.term.clear_line()
    }

    fn clear_last_lines(&mut self, n: usize) -> io::Result<()> {
        self.term.clear_last_lines(n)
    }
}

/// One recorded sink operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOp {
    Write(String),
    WriteLine(String),
    ClearLine,
    ClearLastLines(usize),
}

/// Capturing sink for tests and headless use.
///
/// Cloning a `MemorySink` clones the handle, not the buffer: keep one clone
/// and hand the other to the formatter, then inspect [`ops`](MemorySink::ops)
/// or [`transcript`](MemorySink::transcript) afterwards.
///
/// ```rust
/// use scrawl_render::{ConsoleSink, MemorySink, SinkOp};
///
/// let sink = MemorySink::new();
/// let mut writer = sink.clone();
/// writer.write_line("hello").unwrap();
/// assert_eq!(sink.ops(), vec![SinkOp::WriteLine("hello".into())]);
/// ```
#[derive(Clone, Default)]
pub struct MemorySink {
    ops: Rc<RefCell<Vec<SinkOp>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded operations, in order.
    pub fn ops(&self) -> Vec<SinkOp> {
        self.ops.borrow().clone()
    }

    /// The text written so far, newline-terminated per `write_line`.
    /// Erase operations contribute nothing.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for op in self.ops.borrow().iter() {
            match op {
                SinkOp::Write(text) => out.push_str(text),
                SinkOp::WriteLine(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                SinkOp::ClearLine | SinkOp::ClearLastLines(_) => {}
            }
        }
        out
    }
}

impl ConsoleSink for MemorySink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.ops.borrow_mut().push(SinkOp::Write(text.to_string()));
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.ops
            .borrow_mut()
            .push(SinkOp::WriteLine(text.to_string()));
        Ok(())
    }

    fn clear_line(&mut self) -> io::Result<()> {
        self.ops.borrow_mut().push(SinkOp::ClearLine);
        Ok(())
    }

    fn clear_last_lines(&mut self, n: usize) -> io::Result<()> {
        self.ops.borrow_mut().push(SinkOp::ClearLastLines(n));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_operations_in_order() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_str("a").unwrap();
        writer.clear_line().unwrap();
        writer.clear_last_lines(2).unwrap();
        writer.write_line("b").unwrap();

        assert_eq!(
            sink.ops(),
            vec![
                SinkOp::Write("a".into()),
                SinkOp::ClearLine,
                SinkOp::ClearLastLines(2),
                SinkOp::WriteLine("b".into()),
            ]
        );
    }

    #[test]
    fn transcript_skips_erase_operations() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_line("one").unwrap();
        writer.clear_line().unwrap();
        writer.write_str("two").unwrap();

        assert_eq!(sink.transcript(), "one\ntwo");
    }

    #[test]
    fn clones_share_one_buffer() {
        let sink = MemorySink::new();
        let mut a = sink.clone();
        let mut b = sink.clone();
        a.write_line("from a").unwrap();
        b.write_line("from b").unwrap();
        assert_eq!(sink.ops().len(), 2);
    }
}
