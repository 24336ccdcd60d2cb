//! Text-row bars for long category labels.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest label shown before truncation.
pub const MAX_LABEL_WIDTH: usize = 24;

const FULL: char = '█';
/// Left-aligned eighth blocks, index = eighths of a cell.
const PARTIAL: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// Bar for `value` where `scale` fills `width` cells, in eighth-cell steps.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn bar_glyphs(value: u32, scale: f64, width: usize) -> String {
    if scale <= 0.0 || width == 0 {
        return String::new();
    }
    let eighths = ((f64::from(value) / scale).clamp(0.0, 1.0) * (width * 8) as f64).round() as usize;
    let mut bar: String = std::iter::repeat_n(FULL, eighths / 8).collect();
    bar.push_str(PARTIAL[eighths % 8]);
    bar
}

/// Right-align `label` in `width` terminal cells, cutting it with an
/// ellipsis when it is too long. Wide glyphs count as two cells.
#[must_use]
pub fn fit_label(label: &str, width: usize) -> String {
    let w = label.width();
    if w <= width {
        return format!("{}{label}", " ".repeat(width - w));
    }
    if width == 0 {
        return String::new();
    }
    let room = width - 1;
    let mut cut = String::new();
    let mut used = 0;
    for c in label.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > room {
            break;
        }
        cut.push(c);
        used += cw;
    }
    // a wide glyph that did not fit leaves a gap on the left
    format!("{}{cut}…", " ".repeat(room - used))
}
