//! Consumer-side helpers over pipeline output: series selection and
//! presentation formatting. Pure functions only; rendering stays outside the
//! crate's core.

use crate::model::TimePoint;

/// Most recent entry of a series, if any.
pub fn latest(series: &[TimePoint]) -> Option<&TimePoint> {
    series.last()
}

/// Second most recent entry of a series, if any.
pub fn previous(series: &[TimePoint]) -> Option<&TimePoint> {
    series.len().checked_sub(2).and_then(|i| series.get(i))
}

/// Trailing window of at most `count` entries, preserving order.
pub fn trailing(series: &[TimePoint], count: usize) -> &[TimePoint] {
    let start = series.len().saturating_sub(count);
    &series[start..]
}

/// Formats a fractional rate as a percentage at one decimal, e.g. `0.265`
/// becomes `"26.5%"`. NaN renders as an em dash.
pub fn fmt_percent(rate: f64) -> String {
    if rate.is_nan() {
        "—".to_string()
    } else {
        format!("{:.1}%", rate * 100.0)
    }
}

/// [`fmt_percent`] over an optional series entry; absent entries render as
/// an em dash.
pub fn fmt_point(point: Option<&TimePoint>) -> String {
    point.map_or_else(|| "—".to_string(), |p| fmt_percent(p.rate))
}
