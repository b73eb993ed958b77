// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bar-chart normalization for the progress screen
//!
//! The progress charts draw a fixed-size window of samples as bars whose
//! heights are fractions of the chart area. Two normalizations exist:
//! min/max range scaling for measurements like body weight, and
//! max-only scaling for count-like series where zero is a meaningful
//! baseline.

use tracing::warn;

/// Scale a window of samples into bar heights in [0, 1] over its range
///
/// Each height is `(value - min) / (max - min)`, floored at `floor` so the
/// smallest bar stays visible. When every sample is equal the range is
/// zero and every bar gets the floor instead of a division by zero.
///
/// # Examples
///
/// ```rust
/// use fittrack_core::intelligence::normalize_range;
///
/// let heights = normalize_range(&[77.0, 76.5, 76.0, 75.5, 75.0, 74.5], 0.1);
/// assert_eq!(heights[0], 1.0);
/// assert_eq!(*heights.last().unwrap(), 0.1); // floored minimum
/// ```
pub fn normalize_range(window: &[f64], floor: f64) -> Vec<f64> {
    if window.is_empty() {
        return Vec::new();
    }

    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        warn!(samples = window.len(), value = min, "flat chart window, using floor height");
        return vec![floor; window.len()];
    }

    window
        .iter()
        .map(|v| ((v - min) / range).max(floor))
        .collect()
}

/// Scale a window of count-like samples against the window maximum
///
/// Each height is `value / max`, clamped to [0, 1]. A window maximum of
/// zero yields all-zero heights: an empty week renders as an empty bar,
/// not a floored one.
pub fn normalize_against_max(window: &[u32]) -> Vec<f64> {
    let max = window.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; window.len()];
    }

    window.iter().map(|&v| f64::from(v) / f64::from(max)).collect()
}

/// The tail window of a series, at most `n` samples long
///
/// The charts render the last six progress points; shorter series are
/// rendered whole.
pub fn last_window<T>(series: &[T], n: usize) -> &[T] {
    let start = series.len().saturating_sub(n);
    &series[start..]
}
