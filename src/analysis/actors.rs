use rustc_hash::FxHashMap as HashMap;
use tracing::debug;

use crate::{
    analysis::{Ranking, rank},
    core::{
        constants::{CAST_DELIMITER, MOVIE_TYPE},
        error::EdaError,
    },
    data::Catalog,
};

/// The `n` names credited in the most movies.
///
/// Only movies with a cast list count. Each cast entry is split on `", "`
/// and every name adds one appearance; equal counts are ordered by name.
pub fn top_actors(catalog: &Catalog, n: usize) -> Result<Ranking, EdaError> {
    if n == 0 {
        return Ok(Ranking::new());
    }

    let mut counts: HashMap<&str, u32> = HashMap::default();
    let mut movies = 0usize;

    for (kind, cast) in catalog.kinds()?.into_iter().zip(catalog.casts()?) {
        let (Some(kind), Some(cast)) = (kind, cast) else {
            continue;
        };
        if kind != MOVIE_TYPE {
            continue;
        }
        movies += 1;
        for name in cast.split(CAST_DELIMITER).filter(|name| !name.is_empty()) {
            *counts.entry(name).or_default() += 1;
        }
    }

    debug!(movies, actors = counts.len(), "cast appearances counted");
    let mut ranking = rank(counts);
    ranking.truncate(n);
    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalog;

    const CSV: &str = "\
type,cast,release_year
Movie,\"A, B\",2000
TV Show,A,2001
Movie,,2002
";

    #[test]
    fn only_movies_with_cast_contribute() {
        let catalog = read_catalog(CSV).unwrap();
        let top = top_actors(&catalog, 10).unwrap();
        assert_eq!(top, vec![("A".to_owned(), 1), ("B".to_owned(), 1)]);
    }

    #[test]
    fn zero_n_is_empty() {
        let catalog = read_catalog(CSV).unwrap();
        assert!(top_actors(&catalog, 0).unwrap().is_empty());
    }

    #[test]
    fn ranking_is_descending_and_truncated() {
        let catalog = read_catalog(
            "type,cast,release_year
Movie,\"Zoe, Max, Ann\",2000
Movie,\"Max, Ann\",2001
Movie,Max,2002
Movie,\"Bea, Zoe\",2003
",
        )
        .unwrap();
        let all = top_actors(&catalog, 100).unwrap();
        assert_eq!(
            all,
            vec![
                ("Max".to_owned(), 3),
                ("Ann".to_owned(), 2),
                ("Zoe".to_owned(), 2),
                ("Bea".to_owned(), 1),
            ]
        );
        let top2 = top_actors(&catalog, 2).unwrap();
        assert_eq!(top2, all[..2]);
    }

    #[test]
    fn split_is_on_comma_space_only() {
        let catalog = read_catalog("type,cast,release_year\nMovie,\"A,B, C\",2000\n").unwrap();
        let top = top_actors(&catalog, 5).unwrap();
        assert_eq!(top, vec![("A,B".to_owned(), 1), ("C".to_owned(), 1)]);
    }
}
