//! Per-frame configuration object + fluent builder.

use std::ops::RangeInclusive;

use crate::core::{
    color::AnsiCode,
    error::ConfigError,
    style::{Grid, Style},
};

/// Immutable parameters handed to the frame renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub y_min: f64,
    pub y_max: f64,
    pub x_chars: usize,
    pub y_chars: usize,
    pub color: AnsiCode,
    pub title_color: AnsiCode,
    pub label_color: AnsiCode,
    pub grid: Grid,
}

impl Config {
    /// Every frame needs a y range; the rest falls back to the default style.
    #[inline]
    pub fn builder(
        x_chars: usize,
        y_chars: usize,
        y_range: RangeInclusive<f64>,
    ) -> ConfigBuilder {
        ConfigBuilder::new(x_chars, y_chars, y_range)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    y_min: f64,
    y_max: f64,
    color: Option<AnsiCode>,
    title_color: Option<AnsiCode>,
    label_color: Option<AnsiCode>,
    grid: Option<Grid>,
}

impl ConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize, y_range: RangeInclusive<f64>) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            x_label: None,
            y_label: None,
            y_min: *y_range.start(),
            y_max: *y_range.end(),
            color: None,
            title_color: None,
            label_color: None,
            grid: None,
        }
    }

    #[inline]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    pub fn x_label_opt(mut self, s: Option<&str>) -> Self {
        self.x_label = s.map(str::to_owned);
        self
    }
    #[inline]
    pub fn y_label_opt(mut self, s: Option<&str>) -> Self {
        self.y_label = s.map(str::to_owned);
        self
    }

    /// Colours and grid from the process-wide style.
    #[inline]
    pub fn style(mut self, s: &Style) -> Self {
        self.color = Some(s.accent);
        self.title_color = Some(s.title);
        self.label_color = Some(s.label);
        self.grid = Some(s.grid);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let (y_min, y_max) = (self.y_min, self.y_max);
        if y_min >= y_max {
            return Err(ConfigError::InvalidRange {
                low: y_min,
                high: y_max,
            });
        }
        let defaults = Style::configure();
        Ok(Config {
            title: self.title.unwrap_or_default(),
            x_label: self.x_label,
            y_label: self.y_label,
            y_min,
            y_max,
            x_chars: self.x_chars,
            y_chars: self.y_chars,
            color: self.color.unwrap_or(defaults.accent),
            title_color: self.title_color.unwrap_or(defaults.title),
            label_color: self.label_color.unwrap_or(defaults.label),
            grid: self.grid.unwrap_or(defaults.grid),
        })
    }
}
