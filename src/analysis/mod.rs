//! Pure aggregations: `&Catalog` in, owned summary out.
//!
//! None of them touch a display; the pairing with a chart lives in
//! [`crate::report`].

pub mod actors;
pub mod distribution;
pub mod histogram;
pub mod trend;

use rustc_hash::FxHashMap as HashMap;

pub use actors::top_actors;
pub use distribution::type_distribution;
pub use histogram::{Bin, nineties_histogram, year_histogram};
pub use trend::yearly_trend;

/// Label/count pairs, highest count first.
pub type Ranking = Vec<(String, u32)>;

/// Order counts by count descending, then label ascending, so ties come out
/// the same on every run.
fn rank(counts: HashMap<&str, u32>) -> Ranking {
    let mut ranking: Ranking = counts
        .into_iter()
        .map(|(label, count)| (label.to_owned(), count))
        .collect();
    ranking.sort_unstable_by(|(la, ca), (lb, cb)| cb.cmp(ca).then_with(|| la.cmp(lb)));
    ranking
}
