//! Exploratory charts for a Netflix catalog CSV: load it, aggregate it, and
//! draw each summary as a full-screen terminal chart.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod data;
pub mod render;
pub mod report;

pub use core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder},
    error::{ConfigError, EdaError},
    style::{Figure, Grid, Style},
};

pub use analysis::{
    Bin, Ranking, nineties_histogram, top_actors, type_distribution, year_histogram, yearly_trend,
};
pub use data::{Catalog, load_catalog, read_catalog};
pub use render::{Chart, Renderer, Series, TerminalViewer, Viewer};
