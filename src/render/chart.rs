//! What a viewer is asked to show: a titled series plus optional captions.

use crate::{
    analysis::{Bin, Ranking},
    core::style::Figure,
};

/// The data of one chart; the variant decides how it is drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// Vertical bar per category.
    Bar(Ranking),
    /// One text row per category, longest count first.
    HorizontalBar(Ranking),
    /// Contiguous bars over year bins.
    Histogram(Vec<Bin>),
    /// Count per year, joined by a line.
    Line(Vec<(i32, u32)>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Overrides the style's default figure.
    pub figure: Option<Figure>,
    pub series: Series,
}

impl Chart {
    pub fn new(title: impl Into<String>, series: Series) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            figure: None,
            series,
        }
    }

    #[must_use]
    pub fn x_label(mut self, s: impl Into<String>) -> Self {
        self.x_label = Some(s.into());
        self
    }

    #[must_use]
    pub fn y_label(mut self, s: impl Into<String>) -> Self {
        self.y_label = Some(s.into());
        self
    }

    #[must_use]
    pub fn figure(mut self, f: Figure) -> Self {
        self.figure = Some(f);
        self
    }

    /// Largest count in the series, 0 when empty.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        let counts: Box<dyn Iterator<Item = u32> + '_> = match &self.series {
            Series::Bar(r) | Series::HorizontalBar(r) => Box::new(r.iter().map(|(_, c)| *c)),
            Series::Histogram(bins) => Box::new(bins.iter().map(|b| b.count)),
            Series::Line(points) => Box::new(points.iter().map(|(_, c)| *c)),
        };
        counts.max().unwrap_or(0)
    }

    /// Number of bars, bins or points.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.series {
            Series::Bar(r) | Series::HorizontalBar(r) => r.len(),
            Series::Histogram(bins) => bins.len(),
            Series::Line(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
