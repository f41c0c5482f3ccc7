//! End-to-end tests for the print pipeline: styling composition, level
//! preconfiguration, reset-to-defaults, and wrapper equivalence.

use scrawl::{Fluent, MemorySink, Pen, Scrawl, ScrawlConfig, SinkOp, StylingChoice};

const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const YELLOW: &str = "\u{1b}[33m";
const BLUE: &str = "\u{1b}[34m";
const WHITE: &str = "\u{1b}[37m";
const BOLD: &str = "\u{1b}[1m";
const REVERSE: &str = "\u{1b}[7m";

fn styled_scrawl(sink: &MemorySink) -> Scrawl {
    Scrawl::new()
        .sink(sink.clone())
        .clock(|| String::from("12:34:56"))
}

fn last_line(sink: &MemorySink) -> String {
    match sink.ops().last().expect("no output") {
        SinkOp::Write(text) | SinkOp::WriteLine(text) => text.clone(),
        other => panic!("expected a write, got {:?}", other),
    }
}

#[test]
fn last_color_wins() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.red().green().log("fine").unwrap();

    let line = last_line(&sink);
    assert!(line.contains(GREEN));
    assert!(!line.contains(RED));
}

#[test]
fn modifiers_accumulate_across_the_chain() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.yellow().bold().inverse().log("loud").unwrap();

    let line = last_line(&sink);
    assert!(line.contains(YELLOW));
    assert!(line.contains(BOLD));
    assert!(line.contains(REVERSE));
}

#[test]
fn configuration_resets_after_every_print() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.red().bold().timed().log("styled").unwrap();
    out.log("plain").unwrap();

    let line = last_line(&sink);
    assert!(line.contains(WHITE));
    assert!(!line.contains(RED));
    assert!(!line.contains(BOLD));
    assert!(!line.contains("[12:34:56]"));
}

#[test]
fn error_forces_red_bold_inverse() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.error("broken").unwrap();

    let line = last_line(&sink);
    assert!(line.contains(RED));
    assert!(line.contains(BOLD));
    assert!(line.contains(REVERSE));
}

#[test]
fn error_keeps_forced_modifiers_under_prior_chaining() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.green().dim().error("still red").unwrap();

    let line = last_line(&sink);
    assert!(line.contains(RED));
    assert!(!line.contains(GREEN));
    assert!(line.contains(BOLD));
    assert!(line.contains(REVERSE));
    // Chained modifiers are additive, not replaced.
    assert!(line.contains("\u{1b}[2m"));
}

#[test]
fn success_forces_blue_bold_inverse() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.success("shipped").unwrap();

    let line = last_line(&sink);
    assert!(line.contains(BLUE));
    assert!(line.contains(BOLD));
    assert!(line.contains(REVERSE));
}

#[test]
fn warning_applies_color_only() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.warning("careful").unwrap();

    let line = last_line(&sink);
    assert!(line.contains(YELLOW));
    assert!(!line.contains(BOLD));
    assert!(!line.contains(REVERSE));
}

#[test]
fn numbers_get_the_color_twice() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.red().log(5).unwrap();

    let line = last_line(&sink);
    assert_eq!(line.matches(RED).count(), 2);
    assert!(line.contains('5'));
}

#[test]
fn strings_get_the_color_once() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.red().log("5").unwrap();

    let line = last_line(&sink);
    assert_eq!(line.matches(RED).count(), 1);
}

#[test]
fn structured_payloads_skip_the_numeric_prestyle() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.red().log(serde_json::json!({"n": 5})).unwrap();

    // One style pass over the whole line; the pretty-printed body carries
    // no nested codes of its own.
    let line = last_line(&sink);
    assert_eq!(line.matches(RED).count(), 1);
    assert!(line.contains("n: 5"));
}

#[test]
fn timed_label_sits_inside_the_styled_region() {
    let sink = MemorySink::new();
    let mut out = styled_scrawl(&sink);
    out.timed().log("hi").unwrap();

    let line = last_line(&sink);
    assert!(line.contains("[12:34:56] - hi"));
    assert!(line.starts_with('\u{1b}'));
}

#[test]
fn pen_call_matches_plain_log_exactly() {
    let via_call = MemorySink::new();
    let via_log = MemorySink::new();

    Pen::wrap(styled_scrawl(&via_call)).call("hello").unwrap();
    styled_scrawl(&via_log).log("hello").unwrap();

    assert_eq!(via_call.ops(), via_log.ops());
}

#[test]
fn pen_forwards_the_whole_surface() {
    let via_pen = MemorySink::new();
    let direct = MemorySink::new();

    let mut pen = Pen::wrap(styled_scrawl(&via_pen));
    pen.magenta().underline().timed().log("a").unwrap();
    pen.sep((4, "=")).unwrap();
    pen.progress("copy", 10, 5).unwrap();

    let mut out = styled_scrawl(&direct);
    out.magenta().underline().timed().log("a").unwrap();
    out.sep((4, "=")).unwrap();
    out.progress("copy", 10, 5).unwrap();

    assert_eq!(via_pen.ops(), direct.ops());
}

#[test]
fn styling_never_writes_plain_text() {
    let sink = MemorySink::new();
    let config = ScrawlConfig {
        styling: StylingChoice::Never,
        ..ScrawlConfig::default()
    };
    let mut out = styled_scrawl(&sink).config(config);
    out.red().bold().log("quiet").unwrap();

    assert_eq!(sink.ops(), vec![SinkOp::WriteLine("quiet".into())]);
}
