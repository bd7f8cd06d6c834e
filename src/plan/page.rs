//! Page descriptors handed to the page emitter.

use serde::Serialize;
use serde_json::{Map, Value};

/// Which part of the site a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Post,
    Index,
    Tag,
    Series,
    Author,
    Archive,
}

impl PageKind {
    pub const ALL: [Self; 6] = [
        Self::Post,
        Self::Index,
        Self::Tag,
        Self::Series,
        Self::Author,
        Self::Archive,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Index => "index",
            Self::Tag => "tag",
            Self::Series => "series",
            Self::Author => "author",
            Self::Archive => "archive",
        }
    }
}

/// One static route: where it lives, what renders it, and with which data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDescriptor {
    pub path: String,
    pub component: String,
    #[serde(skip)]
    pub kind: PageKind,
    pub context: PageContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageContext {
    Listing(ListingContext),
    Post(PostContext),
}

/// Context of a paginated listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingContext {
    /// Caller-supplied fields, e.g. `{"tag": "rust"}`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub prev: Option<String>,
    pub next: Option<String>,
    /// Zero-based page index.
    pub curr: usize,
    pub total: usize,
    /// Post ids shown on this page.
    pub posts: Vec<String>,
}

/// Context of a post detail page.
///
/// Neighbours follow the newest-first post order: `next` is the newer post,
/// `prev` the older one. Empty strings at either end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContext {
    pub id: String,
    pub prev_slug: String,
    pub next_slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_context_json() {
        let page = PageDescriptor {
            path: "/hello".into(),
            component: "post.js".into(),
            kind: PageKind::Post,
            context: PageContext::Post(PostContext {
                id: "hello".into(),
                prev_slug: "/older".into(),
                next_slug: String::new(),
            }),
        };

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "path": "/hello",
                "component": "post.js",
                "context": {"id": "hello", "prevSlug": "/older", "nextSlug": ""}
            })
        );
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<_> = PageKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["post", "index", "tag", "series", "author", "archive"]);
    }
}
