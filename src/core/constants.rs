//! A collection of constants.

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between y axis labels and the plotted data
pub const LABEL_GUTTER: usize = 1;

/// Graph must be at least 7 characters tall
pub const MIN_GRAPH_HEIGHT: usize = 7;
/// Graph must be at least 14 characters wide
pub const MIN_GRAPH_WIDTH: usize = 14;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Counts are whole numbers, so axis labels carry no decimals.
pub const LABEL_PRECISION: usize = 0;

/// With a dark grid every fourth row carries a y label.
pub const GRID_EVERY: usize = 4;

/// Where the catalog lives relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "../data/raw/netflix_data.csv";
/// How many actors the ranking chart shows.
pub const DEFAULT_TOP_N: usize = 20;

pub const TYPE_COLUMN: &str = "type";
pub const CAST_COLUMN: &str = "cast";
pub const YEAR_COLUMN: &str = "release_year";

/// `type` value of a film, as opposed to `"TV Show"`.
pub const MOVIE_TYPE: &str = "Movie";

/// Separator between names in the `cast` column.
pub const CAST_DELIMITER: &str = ", ";

/// First and last release year of the 1990s histogram (inclusive).
pub const NINETIES: (i32, i32) = (1990, 1999);
/// Width of a histogram bin, in years.
pub const NINETIES_BIN_WIDTH: i32 = 2;
