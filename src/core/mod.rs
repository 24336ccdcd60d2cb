//! Aggregates the shared plumbing: errors, colours, style, geometry.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod style;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{
    BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION, LABEL_GUTTER,
    LABEL_PRECISION, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
};
pub use error::{ConfigError, EdaError};
pub use style::{Figure, Grid, Style};
