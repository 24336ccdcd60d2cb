//! Counts to UTF-8 braille grid.
//!
//! ### Workflow
//! 1. `rasterize_bars` / `rasterize_line` map a series into pixel-space
//!    spans (`DotSpan`), one optional entry per *half* column.
//! 2. `encode_braille_into_frame` fills a caller-supplied buffer laid out
//!    row-major with exactly three bytes per character cell.  Every braille
//!    scalar U+2800..U+28FF encodes to the fixed pattern
//!    `E2 A0+((mask>>6)&3) 80|mask&0x3F`, so bytes are written directly
//!    without `char::encode_utf8`.
//!
//! The intersection of a contiguous vertical span with a 4-dot braille cell
//! is one of 11 canonical patterns; their masks are precomputed for the left
//! and right half-columns.

use crate::core::{
    config::Config,
    constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR},
};

/// Lit dots inside one half-column, `top <= bottom`, 0 is the top dot row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DotSpan {
    pub top: usize,
    pub bottom: usize,
}

/// One entry per half-column; `None` leaves the column blank.
#[derive(Debug)]
pub struct BraillePlot {
    pub columns: Vec<Option<DotSpan>>,
}

// --- Pre-Computed Masks ---

/// 0 empty (⠀), 1 full (⡇), 2 top-three (⠇), 3 bottom-three(⡆), 4 top-two (⠃), 5 middle-two (⠆), 6 bottom-two (⡄),
/// 7 dot-zero (⠁), 8 dot-one (⠂), 9 dot-two (⠄), 10 dot-three (⡀)
const LEFT_MASKS: [u8; 11] = [
    0x00, 0x47, 0x07, 0x46, 0x03, 0x06, 0x44, 0x01, 0x02, 0x04, 0x40,
];
/// 0 empty (⠀), 1 full (⢸), 2 top-three (⠸), 3 bottom-three(⢰), 4 top-two (⠘), 5 middle-two (⠰), 6 bottom-two (⢠),
/// 7 dot-zero (⠈), 8 dot-one (⠐), 9 dot-two (⠠), 10 dot-three (⢀)
const RIGHT_MASKS: [u8; 11] = [
    0x00, 0xB8, 0x38, 0xB0, 0x18, 0x30, 0xA0, 0x08, 0x10, 0x20, 0x80,
];

/// Map `(low, high)` dot offsets inside a 4-row cell to the pattern id.
#[inline]
const fn pattern_id(low: usize, high: usize) -> usize {
    match (low, high) {
        (0, 3) => 1,
        (0, 2) => 2,
        (1, 3) => 3,
        (0, 1) => 4,
        (1, 2) => 5,
        (2, 3) => 6,
        (0, 0) => 7,
        (1, 1) => 8,
        (2, 2) => 9,
        (3, 3) => 10,
        _ => 0,
    }
}

/// Dot row for a value; the top of the range is row 0.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn dot_row(config: &Config, y: f64) -> usize {
    let vert_px = config.y_chars * VR;
    let y_span = config.y_max - config.y_min; // > 0 by construction
    let r = ((y - config.y_min) / y_span).clamp(0.0, 1.0) * (vert_px - 1) as f64;
    (vert_px - 1) - r.round() as usize
}

/// Half-columns given to each of `bars` bars, `None` when they do not fit.
#[inline]
#[must_use]
pub fn bar_band(bars: usize, x_chars: usize) -> Option<usize> {
    match (x_chars * HR).checked_div(bars) {
        Some(band) if band > 0 => Some(band),
        _ => None,
    }
}

/// One bar per value, each centred in a band of `band` half-columns with
/// `gap` blank half-columns split around it.  A zero count draws nothing.
#[must_use]
pub fn rasterize_bars(values: &[u32], config: &Config, band: usize, gap: usize) -> BraillePlot {
    let mut columns = vec![None; config.x_chars * HR];
    let bottom = config.y_chars * VR - 1;
    let width = band.saturating_sub(gap).max(1);
    let lead = band.saturating_sub(width) / 2;

    for (i, &v) in values.iter().enumerate() {
        if v == 0 {
            continue;
        }
        let top = dot_row(config, f64::from(v));
        let start = i * band + lead;
        for col in columns.iter_mut().skip(start).take(width) {
            *col = Some(DotSpan { top, bottom });
        }
    }
    BraillePlot { columns }
}

/// Half-column of `x` when `[x_min, x_max]` spans all `half_cols`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn x_position(x: f64, (x_min, x_max): (f64, f64), half_cols: usize) -> usize {
    let span = x_max - x_min;
    if span <= 0.0 || half_cols == 0 {
        return 0;
    }
    (((x - x_min) / span).clamp(0.0, 1.0) * (half_cols - 1) as f64).round() as usize
}

/// Points joined by straight segments.  Consecutive half-columns are bridged
/// vertically so steep segments stay connected, then thickened downwards to
/// `thickness` dots.  `points` must be sorted by x.
#[must_use]
pub fn rasterize_line(points: &[(f64, f64)], config: &Config, thickness: usize) -> BraillePlot {
    let half_cols = config.x_chars * HR;
    let bottom = config.y_chars * VR - 1;
    let mut rows: Vec<Option<usize>> = vec![None; half_cols];

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return BraillePlot {
            columns: vec![None; half_cols],
        };
    };
    let x_range = (first.0, last.0);

    if let [(x, y)] = points {
        rows[x_position(*x, x_range, half_cols)] = Some(dot_row(config, *y));
    }
    for pair in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        let c0 = x_position(x0, x_range, half_cols);
        let c1 = x_position(x1, x_range, half_cols);
        for c in c0..=c1 {
            #[allow(clippy::cast_precision_loss)]
            let t = if c1 == c0 {
                1.0
            } else {
                (c - c0) as f64 / (c1 - c0) as f64
            };
            rows[c] = Some(dot_row(config, y0 + (y1 - y0) * t));
        }
    }

    let mut columns = Vec::with_capacity(half_cols);
    let mut prev: Option<usize> = None;
    for row in rows {
        columns.push(row.map(|r| {
            let (top, low) = match prev {
                Some(p) => (r.min(p), r.max(p)),
                None => (r, r),
            };
            DotSpan {
                top,
                bottom: (low + thickness.saturating_sub(1)).min(bottom),
            }
        }));
        prev = row;
    }
    BraillePlot { columns }
}

#[inline]
fn cell_pattern(span: Option<&DotSpan>, row_top: usize, row_bottom: usize) -> usize {
    span.and_then(|s| {
        if s.bottom < row_top || s.top > row_bottom {
            None
        } else {
            Some(pattern_id(
                s.top.max(row_top) - row_top,
                s.bottom.min(row_bottom) - row_top,
            ))
        }
    })
    .unwrap_or(0)
}

/// Encode `plot` straight into `buf`.
///
/// * `offset` -- byte index of the first braille cell (row 0, col 0)
/// * `row_stride` -- bytes between successive graph rows in `buf`
pub fn encode_braille_into_frame(
    buf: &mut [u8],
    offset: usize,
    row_stride: usize,
    plot: &BraillePlot,
    x_chars: usize,
    y_chars: usize,
) {
    debug_assert!(
        buf.len() >= offset + row_stride * y_chars,
        "frame buffer too small"
    );

    for row in 0..y_chars {
        let row_top = row * VR;
        let row_bottom = row_top + VR - 1;
        let row_base = offset + row * row_stride;

        for col in 0..x_chars {
            let left = cell_pattern(
                plot.columns.get(col * HR).and_then(Option::as_ref),
                row_top,
                row_bottom,
            );
            let right = cell_pattern(
                plot.columns.get(col * HR + 1).and_then(Option::as_ref),
                row_top,
                row_bottom,
            );

            // https://en.wikipedia.org/wiki/Braille_Patterns
            let mask = LEFT_MASKS[left] | RIGHT_MASKS[right];
            let cell = row_base + col * 3;
            buf[cell] = 0xE2;
            // bottom left and right dots live in the second byte
            buf[cell + 1] = 0xA0 | ((mask >> 6) & 0x03);
            // the six classic dots
            buf[cell + 2] = 0x80 | (mask & 0x3F);
        }
    }
}
