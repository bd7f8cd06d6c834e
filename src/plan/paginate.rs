//! Pagination planning.
//!
//! Splits an ordered list of post ids into listing pages and links them.
//!
//! ```text
//! Pagination::new(ids, "/list/", "index")
//!     .override_path(0, "/")          page 0 lives at the site root
//!     .plan()
//!
//!   i=0  /        prev: null     next: /list/2
//!   i=1  /list/2  prev: /        next: /list/3
//!   i=2  /list/3  prev: /list/2  next: null
//! ```

use super::page::{ListingContext, PageContext, PageDescriptor, PageKind};
use crate::{config::SliceBound, utils::slug::join_url};
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::ops::Range;

/// Listing context keys owned by the planner.
const RESERVED_KEYS: &[&str] = &["prev", "next", "curr", "total", "posts"];

/// Path and/or component replacing the defaults for one page index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOverride {
    pub path: Option<String>,
    pub component: Option<String>,
}

/// Options for one paginated listing.
#[derive(Debug, Clone)]
pub struct Pagination<'a> {
    items: &'a [String],
    prefix: &'a str,
    component: &'a str,
    page_size: usize,
    kind: PageKind,
    overrides: FxHashMap<usize, PageOverride>,
    context: Map<String, Value>,
    bound: SliceBound,
}

impl<'a> Pagination<'a> {
    /// Default page size for listings.
    pub const PAGE_SIZE: usize = 10;

    pub fn new(items: &'a [String], prefix: &'a str, component: &'a str) -> Self {
        Self {
            items,
            prefix,
            component,
            page_size: Self::PAGE_SIZE,
            kind: PageKind::Index,
            overrides: FxHashMap::default(),
            context: Map::new(),
            bound: SliceBound::default(),
        }
    }

    /// Items per page. Must be greater than zero.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn kind(mut self, kind: PageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn bound(mut self, bound: SliceBound) -> Self {
        self.bound = bound;
        self
    }

    pub fn override_page(mut self, index: usize, page: PageOverride) -> Self {
        self.overrides.insert(index, page);
        self
    }

    pub fn override_path(self, index: usize, path: impl Into<String>) -> Self {
        self.override_page(
            index,
            PageOverride {
                path: Some(path.into()),
                component: None,
            },
        )
    }

    /// Extra context copied into every page. Planner-owned keys are dropped.
    pub fn context(mut self, mut context: Map<String, Value>) -> Self {
        context.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));
        self.context = context;
        self
    }

    /// `ceil(items / page_size)`.
    pub fn total(&self) -> usize {
        debug_assert!(self.page_size > 0, "page size must be greater than zero");
        self.items.len().div_ceil(self.page_size)
    }

    /// Path of page `index`: its override, else `prefix/(index + 1)`.
    fn path_of(&self, index: usize) -> String {
        self.overrides
            .get(&index)
            .and_then(|o| o.path.clone())
            .unwrap_or_else(|| join_url(self.prefix, &(index + 1).to_string()))
    }

    fn component_of(&self, index: usize) -> String {
        self.overrides
            .get(&index)
            .and_then(|o| o.component.clone())
            .unwrap_or_else(|| self.component.to_owned())
    }

    /// Item range of page `index`.
    fn slice(&self, index: usize) -> Range<usize> {
        let len = self.items.len();
        let start = index * self.page_size;
        let end = match self.bound {
            SliceBound::Page => ((index + 1) * self.page_size).min(len),
            SliceBound::Tail => ((index + 1) * self.page_size).max(len).min(len),
        };
        start..end
    }

    /// Page descriptors for every page; none for an empty item list.
    pub fn plan(&self) -> Vec<PageDescriptor> {
        let total = self.total();

        (0..total)
            .map(|i| {
                let prev = (i > 0).then(|| self.path_of(i - 1));
                let next = (i + 1 < total).then(|| self.path_of(i + 1));

                PageDescriptor {
                    path: self.path_of(i),
                    component: self.component_of(i),
                    kind: self.kind,
                    context: PageContext::Listing(ListingContext {
                        extra: self.context.clone(),
                        prev,
                        next,
                        curr: i,
                        total,
                        posts: self.items[self.slice(i)].to_vec(),
                    }),
                }
            })
            .collect()
    }
}
