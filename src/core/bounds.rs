//! Geometry helpers: axis ranges + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{BORDER_WIDTH, LABEL_GUTTER},
    style::Figure,
};

/// Rows a figure gives up to chrome: the titled top border, the y caption,
/// the x tick line, the bottom border, and a blank row above the key hint.
pub const CHROME_ROWS: usize = 5;

/// Inclusive y range for a count axis.
///
/// * Starts at zero; bars grow up from the baseline.
/// * The top is the smallest 1/2/5 × 10^k at or above `max`.
/// * An empty or all-zero series gets `(0.0, 1.0)` so the range stays valid.
#[must_use]
pub fn count_axis(max: u32) -> (f64, f64) {
    if max == 0 {
        return (0.0, 1.0);
    }
    (0.0, nice_ceiling(f64::from(max)))
}

fn nice_ceiling(v: f64) -> f64 {
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = 10f64.powi(v.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= v)
        .unwrap_or(10.0 * magnitude)
}

/// Current terminal geometry in character cells, `None` when stdout is not
/// a terminal.
#[inline]
#[must_use]
pub fn terminal_geometry() -> Option<(usize, usize)> {
    terminal_size().map(|(Width(w), Height(h))| (usize::from(w), usize::from(h)))
}

/// Fit a figure into the terminal and convert it to the plot-area char grid.
/// Leaves space for borders, labels and captions.
#[inline]
#[must_use]
pub fn graph_dims(
    (term_w, term_h): (usize, usize),
    figure: Figure,
    label_width: usize,
) -> (usize, usize) {
    let cols = figure.cols.min(term_w);
    let rows = figure.rows.min(term_h.saturating_sub(1));
    let x_chars = cols.saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_width);
    let y_chars = rows.saturating_sub(CHROME_ROWS);
    (x_chars, y_chars)
}

/// How wide will the y-axis labels be for the given range?
#[inline]
#[must_use]
pub fn y_label_width((low, high): (f64, f64), decimals: usize) -> usize {
    let lo = format!("{low:.decimals$}").len();
    let hi = format!("{high:.decimals$}").len();
    lo.max(hi)
}
