//! Progress-bar arithmetic.
//!
//! Out-of-range input is defined, not undefined: the completion ratio is
//! clamped to `[0, 1]` and an empty total counts as no progress, so
//! `current > total` caps at a full bar and `total == 0` renders 0%.

use crate::config::BarStyle;

/// Completion ratio clamped to `[0, 1]`.
pub(crate) fn ratio(total: u64, current: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (current as f64 / total as f64).clamp(0.0, 1.0)
}

/// Completion percentage in `[0, 100]`.
pub(crate) fn percentage(total: u64, current: u64) -> f64 {
    ratio(total, current) * 100.0
}

/// Fixed-width bar: filled cells, then unfilled cells.
pub(crate) fn bar(total: u64, current: u64, style: &BarStyle) -> String {
    let filled = (ratio(total, current) * style.width as f64).round() as usize;
    let filled = filled.min(style.width);

    let mut out = String::with_capacity(style.width * 4);
    for _ in 0..filled {
        out.push(style.fill);
    }
    for _ in filled..style.width {
        out.push(style.empty);
    }
    out
}
