use rustc_hash::FxHashMap as HashMap;
use tracing::debug;

use crate::{
    analysis::{Ranking, rank},
    core::error::EdaError,
    data::Catalog,
};

/// Number of titles per distinct `type`. Titles without a type are skipped.
pub fn type_distribution(catalog: &Catalog) -> Result<Ranking, EdaError> {
    let mut counts: HashMap<&str, u32> = HashMap::default();
    for kind in catalog.kinds()?.into_iter().flatten() {
        *counts.entry(kind).or_default() += 1;
    }
    let ranking = rank(counts);
    debug!(kinds = ranking.len(), "type distribution");
    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalog;

    #[test]
    fn counts_sum_to_row_count() {
        let catalog = read_catalog(
            "type,release_year\nMovie,2001\nTV Show,2002\nMovie,2003\nMovie,2004\n",
        )
        .unwrap();
        let counts = type_distribution(&catalog).unwrap();
        assert_eq!(
            counts,
            vec![("Movie".to_owned(), 3), ("TV Show".to_owned(), 1)]
        );
        let total: u32 = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total as usize, catalog.len());
    }

    #[test]
    fn empty_table_gives_empty_mapping() {
        let catalog = read_catalog("type,cast,release_year\n").unwrap();
        assert!(catalog.is_empty());
        assert!(type_distribution(&catalog).unwrap().is_empty());
    }
}
