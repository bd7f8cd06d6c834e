//! Popularity ranking of registries.

use super::aggregate::{Aggregation, Registry, ReverseIndex};
use crate::content::Entity;
use std::cmp::Reverse;

/// Order entities by descending post count.
///
/// The sort is stable, so entities with equal counts keep their current
/// relative order. The reverse index is only read.
pub fn rank_by_popularity<T: Entity>(entities: &mut [T], index: &ReverseIndex) {
    entities.sort_by_key(|entity| Reverse(index.count(entity.id())));
}

impl<T: Entity> Registry<T> {
    /// This registry with its entities ranked by popularity.
    pub fn ranked(mut self) -> Self {
        rank_by_popularity(&mut self.entities, &self.index);
        self
    }
}

impl Aggregation {
    /// Rank tags, series and authors independently.
    pub fn ranked(self) -> Self {
        Self {
            authors: self.authors.ranked(),
            tags: self.tags.ranked(),
            series: self.series.ranked(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::{aggregate, tests::post};
    use crate::content::Entity;

    fn corpus() -> Vec<crate::content::Post> {
        vec![
            post("p1", "alice", &["cli"], Some("intro")),
            post("p2", "bob", &["rust", "web"], Some("deep")),
            post("p3", "bob", &["rust"], Some("deep")),
            post("p4", "carol", &["web", "rust"], None),
            post("p5", "bob", &["go"], Some("intro")),
        ]
    }

    #[test]
    fn test_ranked_by_descending_count() {
        let agg = aggregate(&corpus()).ranked();

        let tags: Vec<_> = agg.tags.entities().iter().map(|t| t.id()).collect();
        // rust 3, web 2, then cli and go (1 each) in first-seen order
        assert_eq!(tags, vec!["rust", "web", "cli", "go"]);

        let authors: Vec<_> = agg.authors.entities().iter().map(|a| a.id()).collect();
        assert_eq!(authors, vec!["bob", "alice", "carol"]);
    }

    #[test]
    fn test_ranking_property_holds() {
        let agg = aggregate(&corpus()).ranked();

        let counts: Vec<_> = agg
            .tags
            .entities()
            .iter()
            .map(|t| agg.tags.index().count(t.id()))
            .collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_equal_counts_keep_first_seen_order() {
        let agg = aggregate(&corpus()).ranked();

        let series: Vec<_> = agg.series.entities().iter().map(|s| s.id()).collect();
        assert_eq!(series, vec!["intro", "deep"]);
    }

    #[test]
    fn test_ranking_leaves_reverse_index_untouched() {
        let posts = corpus();
        let plain = aggregate(&posts);
        let ranked = plain.clone().ranked();

        assert_eq!(plain.tags.index(), ranked.tags.index());
        assert_eq!(ranked.tags.posts_of("rust"), ["p2", "p3", "p4"]);
    }
}
