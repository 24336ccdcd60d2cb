//! The fixed analysis: each aggregation paired with its chart.

use tracing::info;

use crate::{
    analysis::{
        Bin, Ranking, nineties_histogram, top_actors, type_distribution, yearly_trend,
    },
    core::{
        constants::{NINETIES, NINETIES_BIN_WIDTH},
        error::EdaError,
        style::Figure,
    },
    data::Catalog,
    render::{Chart, Series, Viewer},
};

#[must_use]
pub fn type_distribution_chart(counts: Ranking) -> Chart {
    Chart::new("Movies vs TV Shows", Series::Bar(counts))
        .x_label("Type")
        .y_label("Titles")
}

#[must_use]
pub fn top_actors_chart(ranking: Ranking, n: usize) -> Chart {
    Chart::new(
        format!("Top {n} Actors by Movie Count"),
        Series::HorizontalBar(ranking),
    )
    .x_label("Number of movies")
}

#[must_use]
pub fn nineties_chart(bins: Vec<Bin>) -> Chart {
    Chart::new(
        format!("Movie Releases {}-{}", NINETIES.0, NINETIES.1),
        Series::Histogram(bins),
    )
    .x_label(format!("Release year ({NINETIES_BIN_WIDTH}-year bins)"))
    .y_label("Number of movies")
    .figure(Figure::wide())
}

#[must_use]
pub fn trend_chart(points: Vec<(i32, u32)>) -> Chart {
    Chart::new("Movie Trend", Series::Line(points))
        .x_label("Year")
        .y_label("Count")
}

/// Type distribution, top actors, 1990s histogram, yearly trend, in that
/// order. Each chart is shown before the next aggregation runs.
pub fn run<V: Viewer>(catalog: &Catalog, top_n: usize, viewer: &mut V) -> Result<(), EdaError> {
    info!("type distribution");
    viewer.show(&type_distribution_chart(type_distribution(catalog)?))?;

    info!(top_n, "top actors");
    viewer.show(&top_actors_chart(top_actors(catalog, top_n)?, top_n))?;

    info!("1990s releases");
    viewer.show(&nineties_chart(nineties_histogram(catalog)?))?;

    info!("yearly trend");
    viewer.show(&trend_chart(yearly_trend(catalog)?))?;
    Ok(())
}
