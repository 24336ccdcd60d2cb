use std::ops::RangeInclusive;

use tracing::debug;

use crate::{
    core::{
        constants::{MOVIE_TYPE, NINETIES, NINETIES_BIN_WIDTH},
        error::EdaError,
    },
    data::Catalog,
};

/// Half-open year interval `[start, end)` and how many titles fall in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bin {
    pub start: i32,
    pub end: i32,
    pub count: u32,
}

/// Titles of `kind` released within `years`, bucketed into `width`-year bins
/// anchored at the first year. Years outside the window are dropped, never
/// clipped into the edge bins.
///
/// A bin reaching past `i32::MAX` gets `end == i32::MAX`.
pub fn year_histogram(
    catalog: &Catalog,
    kind: &str,
    years: RangeInclusive<i32>,
    width: i32,
) -> Result<Vec<Bin>, EdaError> {
    let mut bins = Vec::new();
    if width <= 0 {
        return Ok(bins);
    }
    let (first, last) = (*years.start(), *years.end());
    let mut edge = Some(first);
    while let Some(start) = edge.filter(|e| *e <= last) {
        bins.push(Bin {
            start,
            end: start.saturating_add(width),
            count: 0,
        });
        edge = start.checked_add(width);
    }

    let release = catalog.release_years()?;
    for (k, year) in catalog.kinds()?.into_iter().zip(release) {
        let (Some(k), Some(year)) = (k, year) else {
            continue;
        };
        if k != kind || !years.contains(&year) {
            continue;
        }
        let offset = i64::from(year) - i64::from(first);
        let Ok(i) = usize::try_from(offset / i64::from(width)) else {
            continue;
        };
        if let Some(bin) = bins.get_mut(i) {
            bin.count += 1;
        }
    }

    debug!(bins = bins.len(), "year histogram");
    Ok(bins)
}

/// Movies released 1990-1999 in two-year bins.
pub fn nineties_histogram(catalog: &Catalog) -> Result<Vec<Bin>, EdaError> {
    year_histogram(
        catalog,
        MOVIE_TYPE,
        NINETIES.0..=NINETIES.1,
        NINETIES_BIN_WIDTH,
    )
}
