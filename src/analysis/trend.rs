use std::collections::BTreeMap;

use tracing::debug;

use crate::{core::error::EdaError, data::Catalog};

/// Titles released per year, every year present in the data, oldest first.
/// Years with no releases are not filled in.
pub fn yearly_trend(catalog: &Catalog) -> Result<Vec<(i32, u32)>, EdaError> {
    let mut counts: BTreeMap<i32, u32> = BTreeMap::new();
    for year in catalog.release_years()?.into_iter().flatten() {
        *counts.entry(year).or_default() += 1;
    }
    debug!(years = counts.len(), "yearly trend");
    Ok(counts.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalog;

    #[test]
    fn ascending_distinct_years() {
        let catalog =
            read_catalog("type,release_year\nMovie,2001\nTV Show,1999\nMovie,1999\nMovie,2001\n")
                .unwrap();
        assert_eq!(yearly_trend(&catalog).unwrap(), vec![(1999, 2), (2001, 2)]);
    }

    #[test]
    fn gaps_are_not_filled() {
        let catalog = read_catalog("type,release_year\nMovie,1950\nMovie,2020\n").unwrap();
        let trend = yearly_trend(&catalog).unwrap();
        assert_eq!(trend.len(), 2);
        assert!(trend.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
