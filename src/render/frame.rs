//! Full-screen chart frame:
//! - box-drawn chrome with a centred title and the x caption in the footer
//! - y caption line, y tick labels, x tick line
//! - braille payload for bars, histograms and lines; text rows for
//!   horizontal bars

use std::io::Write;

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::{
    analysis::{Bin, Ranking},
    core::{
        bounds::{count_axis, graph_dims, y_label_width},
        color::{AnsiCode, colorize},
        config::Config,
        constants::{
            BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR,
            GRID_EVERY, LABEL_GUTTER, LABEL_PRECISION, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
        },
        error::EdaError,
        style::{Figure, Grid, Style},
    },
    render::{
        braille::{
            BraillePlot, bar_band, encode_braille_into_frame, rasterize_bars, rasterize_line,
            x_position,
        },
        chart::{Chart, Series},
        hbar::{MAX_LABEL_WIDTH, bar_glyphs, fit_label},
    },
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

/// Lines around the rows of a horizontal-bar frame: titled top border,
/// y caption, count axis, bottom border.
const ROW_CHROME: usize = 4;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

/// Character column + text under the plot.
type Tick = (usize, String);

// --- Helpers ---

/// Write centred colored text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: &AnsiCode) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&colorize(color, text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Lay tick labels out on a `width`-char line, centred on their column.
/// Labels that would overlap an earlier one, or the final one, are dropped.
fn tick_row(ticks: &[Tick], width: usize) -> String {
    let place = |col: usize, len: usize| col.saturating_sub(len / 2).min(width - len);
    let reserved = ticks.last().and_then(|(col, label)| {
        let len = label.chars().count();
        (len <= width).then(|| place(*col, len))
    });

    let mut row = vec![' '; width];
    let mut free_from = 0;
    for (i, (col, label)) in ticks.iter().enumerate() {
        let len = label.chars().count();
        if len > width {
            continue;
        }
        let start = place(*col, len);
        let is_last = i + 1 == ticks.len();
        if start < free_from || (!is_last && reserved.is_some_and(|r| start + len >= r)) {
            continue;
        }
        for (slot, ch) in row[start..].iter_mut().zip(label.chars()) {
            *slot = ch;
        }
        free_from = start + len + 1;
    }
    row.into_iter().collect()
}

/// Label for graph row `row`, if that row carries one.
#[allow(clippy::cast_precision_loss)]
fn y_tick(cfg: &Config, row: usize) -> Option<String> {
    let last = cfg.y_chars - 1;
    let labelled = row == 0 || row == last || (cfg.grid == Grid::Dark && row % GRID_EVERY == 0);
    if !labelled {
        return None;
    }
    let value = if row == last {
        cfg.y_min
    } else {
        let vert_px = cfg.y_chars * VR;
        cfg.y_max - (row * VR) as f64 / (vert_px - 1) as f64 * (cfg.y_max - cfg.y_min)
    };
    Some(format!("{value:.LABEL_PRECISION$}"))
}

/// Pick a tick step that keeps year labels readable.
fn year_step(span: i32) -> i32 {
    match span {
        s if s >= 40 => 10,
        s if s >= 15 => 5,
        s if s >= 6 => 2,
        _ => 1,
    }
}

fn check_size(x_chars: usize, y_chars: usize) -> Result<(), EdaError> {
    if x_chars < MIN_GRAPH_WIDTH || y_chars < MIN_GRAPH_HEIGHT {
        return Err(EdaError::GraphTooSmall {
            want_w: MIN_GRAPH_WIDTH,
            want_h: MIN_GRAPH_HEIGHT,
            got_w: x_chars,
            got_h: y_chars,
        });
    }
    Ok(())
}

// --- Series layout ---

fn bars(cfg: &Config, ranking: &Ranking) -> Result<(BraillePlot, Vec<Tick>), EdaError> {
    let values: Vec<u32> = ranking.iter().map(|(_, c)| *c).collect();
    if values.is_empty() {
        return Ok(blank());
    }
    let Some(band) = bar_band(values.len(), cfg.x_chars) else {
        return too_narrow(cfg, values.len());
    };
    let plot = rasterize_bars(&values, cfg, band, band / 3);
    let ticks = ranking
        .iter()
        .enumerate()
        .map(|(i, (label, _))| ((i * band + band / 2) / HR, label.clone()))
        .collect();
    Ok((plot, ticks))
}

fn histogram(cfg: &Config, bins: &[Bin]) -> Result<(BraillePlot, Vec<Tick>), EdaError> {
    let values: Vec<u32> = bins.iter().map(|b| b.count).collect();
    if values.is_empty() {
        return Ok(blank());
    }
    let Some(band) = bar_band(values.len(), cfg.x_chars) else {
        return too_narrow(cfg, values.len());
    };
    // one dot of daylight between neighbouring bins
    let plot = rasterize_bars(&values, cfg, band, usize::from(band > 2));
    let edges = bins
        .iter()
        .map(|b| b.start)
        .chain(bins.last().map(|b| b.end));
    let ticks = edges
        .enumerate()
        .map(|(i, year)| (((i * band) / HR).min(cfg.x_chars - 1), year.to_string()))
        .collect();
    Ok((plot, ticks))
}

fn line(
    cfg: &Config,
    points: &[(i32, u32)],
    thickness: usize,
) -> Result<(BraillePlot, Vec<Tick>), EdaError> {
    let xy: Vec<(f64, f64)> = points
        .iter()
        .map(|&(year, count)| (f64::from(year), f64::from(count)))
        .collect();
    let plot = rasterize_line(&xy, cfg, thickness);

    let (Some(&(first, _)), Some(&(last, _))) = (points.first(), points.last()) else {
        return Ok((plot, Vec::new()));
    };
    let half_cols = cfg.x_chars * HR;
    let range = (f64::from(first), f64::from(last));
    let step = year_step(last - first);
    let at = |year: i32| (x_position(f64::from(year), range, half_cols) / HR, year.to_string());

    let mut ticks = vec![at(first)];
    ticks.extend((first + 1..last).filter(|y| y % step == 0).map(&at));
    if last != first {
        ticks.push(at(last));
    }
    Ok((plot, ticks))
}

fn blank() -> (BraillePlot, Vec<Tick>) {
    (
        BraillePlot {
            columns: Vec::new(),
        },
        Vec::new(),
    )
}

fn too_narrow<T>(cfg: &Config, bars: usize) -> Result<T, EdaError> {
    Err(EdaError::GraphTooSmall {
        want_w: bars.div_ceil(HR),
        want_h: cfg.y_chars,
        got_w: cfg.x_chars,
        got_h: cfg.y_chars,
    })
}

/// Turns a [`Chart`] into the bytes of one full frame, sized to a given
/// terminal geometry.
pub struct Renderer<'a> {
    style: &'a Style,
    geometry: (usize, usize),
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(style: &'a Style, geometry: (usize, usize)) -> Self {
        Self { style, geometry }
    }

    fn figure(&self, chart: &Chart) -> Figure {
        chart.figure.unwrap_or(self.style.figure)
    }

    /// Main render entry.
    pub fn render(&self, chart: &Chart) -> Result<Vec<u8>, EdaError> {
        let thickness = self.style.line_width;
        match &chart.series {
            Series::Bar(r) => self.render_graph(chart, |cfg| bars(cfg, r)),
            Series::Histogram(b) => self.render_graph(chart, |cfg| histogram(cfg, b)),
            Series::Line(p) => self.render_graph(chart, |cfg| line(cfg, p, thickness)),
            Series::HorizontalBar(r) => self.render_rows(chart, r),
        }
    }

    fn render_graph<F>(&self, chart: &Chart, layout: F) -> Result<Vec<u8>, EdaError>
    where
        F: FnOnce(&Config) -> Result<(BraillePlot, Vec<Tick>), EdaError>,
    {
        let (y_lo, y_hi) = count_axis(chart.max_count());
        let label_width = y_label_width((y_lo, y_hi), LABEL_PRECISION);
        let (x_chars, y_chars) = graph_dims(self.geometry, self.figure(chart), label_width);
        check_size(x_chars, y_chars)?;

        let cfg = Config::builder(x_chars, y_chars, y_lo..=y_hi)
            .title(chart.title.as_str())
            .x_label_opt(chart.x_label.as_deref())
            .y_label_opt(chart.y_label.as_deref())
            .style(self.style)
            .build()?;
        let (plot, ticks) = layout(&cfg)?;
        debug!(
            title = %cfg.title,
            x_chars,
            y_chars,
            points = chart.len(),
            "graph frame"
        );

        let inner = label_width + LABEL_GUTTER + x_chars;
        let mut out = Vec::with_capacity((inner * 3 + 32) * (y_chars + 4));
        write_header(&mut out, &cfg, inner)?;

        // braille payload, one row per graph line
        let stride = x_chars * 3;
        let mut cells = vec![0u8; stride * y_chars];
        encode_braille_into_frame(&mut cells, 0, stride, &plot, x_chars, y_chars);

        let background = match cfg.grid {
            Grid::Dark => AnsiCode::grid_background().to_string(),
            Grid::Plain => String::new(),
        };
        for (r, row) in cells.chunks(stride).enumerate() {
            let label = y_tick(&cfg, r).unwrap_or_default();
            write!(out, "{V}{label:>label_width$}{:LABEL_GUTTER$}{background}{}", "", cfg.color)?;
            out.extend_from_slice(row);
            writeln!(out, "{}{V}", AnsiCode::reset())?;
        }

        let ticks = tick_row(&ticks, x_chars);
        writeln!(
            out,
            "{V}{:pad$}{}{V}",
            "",
            colorize(&cfg.label_color, &ticks),
            pad = label_width + LABEL_GUTTER
        )?;
        write_footer(&mut out, &cfg, inner)?;
        Ok(out)
    }

    fn render_rows(&self, chart: &Chart, ranking: &Ranking) -> Result<Vec<u8>, EdaError> {
        let cols = self.figure(chart).cols.min(self.geometry.0);
        let inner = cols.saturating_sub(BORDER_WIDTH);

        // one terminal line stays free for the key hint
        let fit = self.geometry.1.saturating_sub(1 + ROW_CHROME);
        if fit == 0 && !ranking.is_empty() {
            return Err(EdaError::GraphTooSmall {
                want_w: MIN_GRAPH_WIDTH,
                want_h: 1 + ROW_CHROME + 1,
                got_w: inner,
                got_h: self.geometry.1,
            });
        }
        let rows = &ranking[..ranking.len().min(fit)];
        if rows.len() < ranking.len() {
            debug!(
                title = %chart.title,
                shown = rows.len(),
                dropped = ranking.len() - rows.len(),
                "lowest-ranked rows do not fit the terminal"
            );
        }

        let (_, scale) = count_axis(chart.max_count());
        let scale_label = format!("{scale:.LABEL_PRECISION$}");
        let count_w = scale_label.len();
        let name_w = rows
            .iter()
            .map(|(name, _)| name.as_str().width())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);
        // name, " │", bar, " ", count
        let bar_w = inner.saturating_sub(name_w + 2 + 1 + count_w);
        if bar_w < MIN_GRAPH_WIDTH {
            return Err(EdaError::GraphTooSmall {
                want_w: MIN_GRAPH_WIDTH,
                want_h: rows.len(),
                got_w: bar_w,
                got_h: rows.len(),
            });
        }

        let cfg = Config::builder(bar_w, rows.len(), 0.0..=scale)
            .title(chart.title.as_str())
            .x_label_opt(chart.x_label.as_deref())
            .y_label_opt(chart.y_label.as_deref())
            .style(self.style)
            .build()?;
        debug!(title = %cfg.title, bar_w, rows = rows.len(), "row frame");

        let mut out = Vec::new();
        write_header(&mut out, &cfg, inner)?;
        for (name, count) in rows {
            let bar = bar_glyphs(*count, scale, bar_w);
            let used = bar.chars().count() + 1 + count.to_string().len();
            let pad = (bar_w + 1 + count_w).saturating_sub(used);
            writeln!(
                out,
                "{V}{} {V}{} {count}{:pad$}{V}",
                fit_label(name, name_w),
                colorize(&cfg.color, &bar),
                "",
            )?;
        }
        let axis = tick_row(
            &[(0, "0".to_owned()), (bar_w - 1, scale_label)],
            bar_w + 1 + count_w,
        );
        writeln!(
            out,
            "{V}{:pad$}{}{V}",
            "",
            colorize(&cfg.label_color, &axis),
            pad = name_w + 2
        )?;
        write_footer(&mut out, &cfg, inner)?;
        Ok(out)
    }
}

/// Top border with the title, then the y caption line.
fn write_header(out: &mut Vec<u8>, cfg: &Config, inner: usize) -> Result<(), EdaError> {
    let mut top = String::new();
    top.push_str(TL);
    push_centered(&mut top, &cfg.title, inner, &cfg.title_color);
    top.push_str(TR);
    writeln!(out, "{top}")?;

    let caption = fit_caption(cfg.y_label.as_deref().unwrap_or_default(), inner);
    writeln!(out, "{V}{}{V}", colorize(&cfg.label_color, &caption))?;
    Ok(())
}

/// Bottom border carrying the x caption.
fn write_footer(out: &mut Vec<u8>, cfg: &Config, inner: usize) -> Result<(), EdaError> {
    let mut bot = String::new();
    bot.push_str(BL);
    match &cfg.x_label {
        Some(x) => push_centered(&mut bot, x, inner, &cfg.label_color),
        None => bot.push_str(&H.repeat(inner)),
    }
    bot.push_str(BR);
    writeln!(out, "{bot}")?;
    Ok(())
}

/// Left-aligned caption padded or cut to exactly `width` chars.
fn fit_caption(text: &str, width: usize) -> String {
    let cut: String = format!(" {text}").chars().take(width).collect();
    format!("{cut:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: (usize, usize) = (100, 40);

    fn plain() -> Style {
        Style::configure().with_grid(Grid::Plain)
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for n in chars.by_ref() {
                    if n.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn lines(frame: &[u8]) -> Vec<String> {
        strip_ansi(&String::from_utf8(frame.to_vec()).unwrap())
            .lines()
            .map(str::to_owned)
            .collect()
    }

    fn assert_rectangular(lines: &[String]) {
        let w = lines[0].as_str().width();
        for l in lines {
            assert_eq!(l.as_str().width(), w, "ragged line: {l:?}");
        }
    }

    #[test]
    fn bar_frame_has_title_labels_and_captions() {
        let chart = Chart::new(
            "Movies vs TV Shows",
            Series::Bar(vec![("Movie".into(), 6131), ("TV Show".into(), 2676)]),
        )
        .x_label("Type")
        .y_label("Titles");
        let style = plain();
        let frame = Renderer::new(&style, GEOMETRY).render(&chart).unwrap();
        let lines = lines(&frame);

        assert_rectangular(&lines);
        assert_eq!(lines[0].chars().count(), Figure::standard().cols);
        assert!(lines[0].contains("Movies vs TV Shows"));
        assert!(lines[1].contains("Titles"));
        assert!(lines[2].contains("10000"));
        let ticks = &lines[lines.len() - 2];
        assert!(ticks.contains("Movie") && ticks.contains("TV Show"));
        assert!(lines.last().unwrap().contains("Type"));
        // 20 figure rows minus the chrome rows, plus the 4 drawn chrome lines
        assert_eq!(lines.len(), 15 + 4);
    }

    #[test]
    fn histogram_labels_every_edge() {
        let bins: Vec<Bin> = (0..5)
            .map(|i| Bin {
                start: 1990 + 2 * i,
                end: 1992 + 2 * i,
                count: 10 + i.unsigned_abs(),
            })
            .collect();
        let chart = Chart::new("Releases", Series::Histogram(bins)).figure(Figure::wide());
        let style = plain();
        let frame = Renderer::new(&style, GEOMETRY).render(&chart).unwrap();
        let lines = lines(&frame);

        assert_rectangular(&lines);
        assert_eq!(lines[0].chars().count(), GEOMETRY.0);
        let ticks = &lines[lines.len() - 2];
        for year in ["1990", "1992", "1994", "1996", "1998", "2000"] {
            assert!(ticks.contains(year), "missing {year} in {ticks:?}");
        }
    }

    #[test]
    fn line_frame_marks_first_and_last_year() {
        let points = vec![(1942, 2), (1975, 7), (2000, 33), (2021, 592)];
        let chart = Chart::new("Movie Trend", Series::Line(points))
            .x_label("Year")
            .y_label("Count");
        let style = Style::configure();
        let frame = Renderer::new(&style, GEOMETRY).render(&chart).unwrap();
        let lines = lines(&frame);

        assert_rectangular(&lines);
        let ticks = &lines[lines.len() - 2];
        assert!(ticks.contains("1942"));
        assert!(ticks.contains("2021"));
        assert!(ticks.contains("1980"));
        // dark grid labels every fourth graph row
        assert!(lines[2].contains("1000"));
        assert!(lines[6].trim_start_matches('│').trim_start().starts_with(char::is_numeric));
    }

    #[test]
    fn horizontal_rows_follow_the_ranking() {
        let ranking: Ranking = vec![
            ("Anupam Kher".into(), 42),
            ("Shah Rukh Khan".into(), 35),
            ("Om Puri".into(), 30),
        ];
        let chart = Chart::new("Top 3 Actors", Series::HorizontalBar(ranking))
            .x_label("Number of movies");
        let style = plain();
        let frame = Renderer::new(&style, GEOMETRY).render(&chart).unwrap();
        let lines = lines(&frame);

        assert_rectangular(&lines);
        assert!(lines[2].contains("Anupam Kher") && lines[2].contains("42"));
        assert!(lines[3].contains("Shah Rukh Khan"));
        assert!(lines[4].contains("Om Puri") && lines[4].contains("30"));
        assert!(lines[2].chars().filter(|c| *c == '█').count() > lines[4].chars().filter(|c| *c == '█').count());
        assert!(lines[5].contains("50"));
    }

    #[test]
    fn twenty_rows_fit_an_80_by_24_terminal() {
        let ranking: Ranking = (0..20u32)
            .map(|i| (format!("Actor {i:02}"), 40 - i))
            .collect();
        let chart = Chart::new("Top 20 Actors by Movie Count", Series::HorizontalBar(ranking))
            .x_label("Number of movies");
        let style = plain();
        let frame = Renderer::new(&style, (80, 24)).render(&chart).unwrap();
        let lines = lines(&frame);

        // the key hint takes the 24th line
        assert!(lines.len() <= 23, "{} lines", lines.len());
        assert_rectangular(&lines);
        assert!(lines[0].contains("Top 20 Actors"));
        assert!(lines[2].contains("Actor 00"));
        // lowest-ranked rows go first
        assert!(lines.iter().any(|l| l.contains("Actor 18")));
        assert!(!lines.iter().any(|l| l.contains("Actor 19")));
    }

    #[test]
    fn rows_need_at_least_one_line() {
        let chart = Chart::new("t", Series::HorizontalBar(vec![("Ann".into(), 1)]));
        let style = plain();
        let err = Renderer::new(&style, (80, 5)).render(&chart).unwrap_err();
        assert!(matches!(err, EdaError::GraphTooSmall { .. }));
    }

    #[test]
    fn wide_names_keep_the_bar_column_aligned() {
        let ranking: Ranking = vec![("木村拓哉".into(), 3), ("Ann".into(), 2)];
        let chart = Chart::new("Cast", Series::HorizontalBar(ranking));
        let style = plain();
        let frame = Renderer::new(&style, GEOMETRY).render(&chart).unwrap();
        let lines = lines(&frame);

        assert_rectangular(&lines);
        let bar_col = |l: &str| l.split_once(" │").map(|(head, _)| head.width());
        assert_eq!(bar_col(&lines[2]), bar_col(&lines[3]));
        assert!(bar_col(&lines[2]).is_some());
    }

    #[test]
    fn empty_series_still_draws_a_frame() {
        let chart = Chart::new("Nothing", Series::Bar(Vec::new()));
        let style = plain();
        let frame = Renderer::new(&style, GEOMETRY).render(&chart).unwrap();
        let lines = lines(&frame);
        assert_rectangular(&lines);
        assert!(lines[0].contains("Nothing"));
    }

    #[test]
    fn tiny_terminal_is_rejected() {
        let chart = Chart::new("t", Series::Line(vec![(2000, 1)]));
        let style = plain();
        let err = Renderer::new(&style, (20, 8)).render(&chart).unwrap_err();
        assert!(matches!(err, EdaError::GraphTooSmall { .. }));
    }

    #[test]
    fn overlapping_ticks_are_dropped() {
        let row = tick_row(&[(0, "1990".into()), (2, "1992".into()), (8, "2000".into())], 12);
        assert_eq!(row, "1990  2000  ");
    }
}
