//! Entity aggregation.
//!
//! One pass over the validated posts builds a registry per entity kind:
//! the unique entities in first-seen order plus a reverse index from entity
//! id to the ids of the posts referencing it, in post order.
//!
//! The result is a plain value owned by the caller; every build aggregates
//! from scratch.

use crate::content::{Author, Entity, Post, Series, Tag};
use rustc_hash::FxHashMap;

/// Entity id → ids of the posts that reference it.
///
/// Post ids are appended as references are encountered, so each list keeps
/// the order of the post sequence it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseIndex {
    map: FxHashMap<String, Vec<String>>,
}

impl ReverseIndex {
    /// Append `post` to `entity`'s list. Returns `true` on the first reference.
    fn push(&mut self, entity: &str, post: &str) -> bool {
        match self.map.get_mut(entity) {
            Some(posts) => {
                posts.push(post.to_owned());
                false
            }
            None => {
                self.map.insert(entity.to_owned(), vec![post.to_owned()]);
                true
            }
        }
    }

    /// Posts referencing `entity`; empty for unknown ids.
    pub fn posts(&self, entity: &str) -> &[String] {
        self.map.get(entity).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn count(&self, entity: &str) -> usize {
        self.posts(entity).len()
    }

    /// Number of (post, entity) associations.
    pub fn associations(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}

/// Unique entities of one kind and their reverse index.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    pub(super) entities: Vec<T>,
    pub(super) index: ReverseIndex,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            index: ReverseIndex::default(),
        }
    }
}

impl<T: Entity> Registry<T> {
    fn register(&mut self, entity: &T, post: &str) {
        if self.index.push(entity.id(), post) {
            self.entities.push(entity.clone());
        }
    }

    /// Entities in registry order (first-seen, or popularity once ranked).
    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    pub fn index(&self) -> &ReverseIndex {
        &self.index
    }

    /// Posts referencing `id`, in post order.
    pub fn posts_of(&self, id: &str) -> &[String] {
        self.index.posts(id)
    }

    /// Ids of the first `n` entities.
    pub fn top_ids(&self, n: usize) -> Vec<String> {
        self.entities
            .iter()
            .take(n)
            .map(|e| e.id().to_owned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Registries for authors, tags and series of one build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub authors: Registry<Author>,
    pub tags: Registry<Tag>,
    pub series: Registry<Series>,
}

/// Aggregate posts (in load order) into registries and reverse indices.
pub fn aggregate(posts: &[Post]) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for post in posts {
        for tag in &post.tags {
            aggregation.tags.register(tag, &post.id);
        }
        if let Some(series) = &post.series {
            aggregation.series.register(series, &post.id);
        }
        aggregation.authors.register(&post.author, &post.id);
    }

    aggregation
}
