//! Process-wide rendering defaults, built once and handed to the viewer.

use crate::core::color::AnsiCode;

/// Background treatment of the plotting area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grid {
    /// Shaded background, y labels on every [`GRID_EVERY`](crate::core::constants::GRID_EVERY) rows.
    Dark,
    /// Terminal background, y labels on the first and last row only.
    Plain,
}

/// Size of a chart in character cells, before clamping to the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Figure {
    pub cols: usize,
    pub rows: usize,
}

impl Figure {
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Default figure, 80×20 cells.
    pub const fn standard() -> Self {
        Self::new(80, 20)
    }

    /// Wider figure used for the release histogram.
    pub const fn wide() -> Self {
        Self::new(120, 24)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// Series colour.
    pub accent: AnsiCode,
    pub title: AnsiCode,
    pub label: AnsiCode,
    /// Thickness of line charts, in braille dots.
    pub line_width: usize,
    pub figure: Figure,
    pub grid: Grid,
}

impl Style {
    /// The defaults every chart starts from.  Pure: calling it twice yields
    /// the same value.
    #[must_use]
    pub fn configure() -> Self {
        Self {
            accent: AnsiCode::steel(),
            title: AnsiCode::bold(),
            label: AnsiCode::dim(),
            line_width: 2,
            figure: Figure::standard(),
            grid: Grid::Dark,
        }
    }

    #[must_use]
    pub fn with_accent(mut self, accent: AnsiCode) -> Self {
        self.accent = accent;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::configure()
    }
}
