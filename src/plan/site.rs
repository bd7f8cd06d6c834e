//! Site-wide route planning.
//!
//! Turns the loaded posts and the ranked aggregation into the full, ordered
//! list of page descriptors:
//!
//! | Pages | First page | Further pages | Page size |
//! |-------|------------|---------------|-----------|
//! | post detail | `<slug>` | | |
//! | index | `/` | `/list/<n>` | `page_size` |
//! | tag | `/tag/<id>` | `/tag/<id>/<n>` | `page_size` |
//! | series | `/series/<id>` | `/series/<id>/<n>` | `page_size` |
//! | author | `/author/<id>` | `/author/<id>/<n>` | `page_size` |
//! | archive | `/archive` | `/archive/<n>` | `archive_page_size` |

use super::{
    aggregate::Aggregation,
    page::{PageContext, PageDescriptor, PageKind, PostContext},
    paginate::Pagination,
};
use crate::{config::SiteConfig, content::Post};
use rustc_hash::FxHashSet;
use serde_json::{Map, Value, json};

/// Plan every page of the site.
///
/// `posts` must be newest first and `aggregation` ranked; listings over
/// registries follow registry order.
pub fn plan_site(posts: &[Post], aggregation: &Aggregation, config: &SiteConfig) -> Vec<PageDescriptor> {
    let planner = SitePlanner::new(posts, aggregation, config);

    let mut pages = planner.post_pages();
    pages.extend(planner.index_pages());
    pages.extend(planner.tag_pages());
    pages.extend(planner.series_pages());
    pages.extend(planner.author_pages());
    pages.extend(planner.archive_pages());
    pages
}

/// Paths claimed by more than one page, e.g. a post slugged `/archive`.
///
/// Each path is reported once, in planning order.
pub fn duplicate_paths(pages: &[PageDescriptor]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    pages
        .iter()
        .map(|page| page.path.as_str())
        .filter(|&path| !seen.insert(path) && reported.insert(path))
        .collect()
}

struct SitePlanner<'a> {
    posts: &'a [Post],
    post_ids: Vec<String>,
    aggregation: &'a Aggregation,
    config: &'a SiteConfig,
    /// `[extra]`, shared with every listing under `site`.
    site: Option<Value>,
}

impl<'a> SitePlanner<'a> {
    fn new(posts: &'a [Post], aggregation: &'a Aggregation, config: &'a SiteConfig) -> Self {
        let site = (!config.extra.is_empty()).then(|| config.extra_json());
        Self {
            posts,
            post_ids: posts.iter().map(|p| p.id.clone()).collect(),
            aggregation,
            config,
            site,
        }
    }

    /// Listing over `items` with the configured page size and slice bound.
    fn listing<'p>(&self, items: &'p [String], prefix: &'p str, component: &'p str) -> Pagination<'p> {
        Pagination::new(items, prefix, component)
            .page_size(self.config.pagination.page_size)
            .bound(self.config.pagination.slice)
    }

    /// Listing context: `fields` plus the shared `site` table.
    fn context(&self, fields: Value) -> Map<String, Value> {
        let mut context = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if let Some(site) = &self.site {
            context.insert("site".into(), site.clone());
        }
        context
    }

    fn post_pages(&self) -> Vec<PageDescriptor> {
        let slug_at = |i: Option<usize>| {
            i.and_then(|i| self.posts.get(i))
                .map(|p| p.slug.clone())
                .unwrap_or_default()
        };

        self.posts
            .iter()
            .enumerate()
            .map(|(i, post)| PageDescriptor {
                path: post.slug.clone(),
                component: self.config.templates.post.clone(),
                kind: PageKind::Post,
                context: PageContext::Post(PostContext {
                    id: post.id.clone(),
                    prev_slug: slug_at(Some(i + 1)),
                    next_slug: slug_at(i.checked_sub(1)),
                }),
            })
            .collect()
    }

    fn index_pages(&self) -> Vec<PageDescriptor> {
        let featured = self.config.pagination.featured;
        let context = self.context(json!({
            "tags": self.aggregation.tags.top_ids(featured),
            "series": self.aggregation.series.top_ids(featured),
            "authors": self.aggregation.authors.top_ids(featured),
        }));

        self.listing(&self.post_ids, "/list/", &self.config.templates.index)
            .kind(PageKind::Index)
            .override_path(0, "/")
            .context(context)
            .plan()
    }

    fn tag_pages(&self) -> Vec<PageDescriptor> {
        let tags = &self.aggregation.tags;
        tags.entities()
            .iter()
            .flat_map(|tag| {
                let root = format!("/tag/{}", tag.id);
                let prefix = format!("{root}/");
                self.listing(tags.posts_of(&tag.id), &prefix, &self.config.templates.tag)
                    .kind(PageKind::Tag)
                    .override_path(0, root.as_str())
                    .context(self.context(json!({ "tag": tag.id })))
                    .plan()
            })
            .collect()
    }

    fn series_pages(&self) -> Vec<PageDescriptor> {
        let series = &self.aggregation.series;
        series
            .entities()
            .iter()
            .flat_map(|s| {
                let root = format!("/series/{}", s.id);
                let prefix = format!("{root}/");
                self.listing(series.posts_of(&s.id), &prefix, &self.config.templates.series)
                    .kind(PageKind::Series)
                    .override_path(0, root.as_str())
                    .context(self.context(json!({ "series": s.id })))
                    .plan()
            })
            .collect()
    }

    fn author_pages(&self) -> Vec<PageDescriptor> {
        let authors = &self.aggregation.authors;
        let templates = &self.config.templates;
        authors
            .entities()
            .iter()
            .flat_map(|author| {
                let root = format!("/author/{}", author.id);
                let prefix = format!("{root}/");
                let component = if author.organization {
                    &templates.organization
                } else {
                    &templates.author
                };
                self.listing(authors.posts_of(&author.id), &prefix, component)
                    .kind(PageKind::Author)
                    .override_path(0, root.as_str())
                    .context(self.context(json!({ "author": author.id })))
                    .plan()
            })
            .collect()
    }

    fn archive_pages(&self) -> Vec<PageDescriptor> {
        self.listing(&self.post_ids, "/archive/", &self.config.templates.archive)
            .page_size(self.config.pagination.archive_page_size)
            .kind(PageKind::Archive)
            .override_path(0, "/archive")
            .context(self.context(json!({})))
            .plan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::Author,
        plan::{aggregate::aggregate, aggregate::tests::post, page::ListingContext},
    };

    fn corpus() -> Vec<Post> {
        let mut posts = vec![
            post("p1", "alice", &["rust"], Some("intro")),
            post("p2", "acme", &["rust", "web"], None),
            post("p3", "alice", &[], Some("intro")),
        ];
        posts[1].author = Author {
            id: "acme".into(),
            name: "ACME".into(),
            organization: true,
        };
        posts
    }

    fn plan(posts: &[Post], config: &SiteConfig) -> Vec<PageDescriptor> {
        plan_site(posts, &aggregate(posts).ranked(), config)
    }

    fn listing(page: &PageDescriptor) -> &ListingContext {
        match &page.context {
            PageContext::Listing(ctx) => ctx,
            PageContext::Post(_) => panic!("expected listing"),
        }
    }

    fn paths(pages: &[PageDescriptor], kind: PageKind) -> Vec<&str> {
        pages
            .iter()
            .filter(|p| p.kind == kind)
            .map(|p| p.path.as_str())
            .collect()
    }

    #[test]
    fn test_every_kind_is_planned() {
        let pages = plan(&corpus(), &SiteConfig::default());

        assert_eq!(paths(&pages, PageKind::Post), vec!["/p1", "/p2", "/p3"]);
        assert_eq!(paths(&pages, PageKind::Index), vec!["/"]);
        assert_eq!(paths(&pages, PageKind::Tag), vec!["/tag/rust", "/tag/web"]);
        assert_eq!(paths(&pages, PageKind::Series), vec!["/series/intro"]);
        assert_eq!(paths(&pages, PageKind::Author), vec!["/author/alice", "/author/acme"]);
        assert_eq!(paths(&pages, PageKind::Archive), vec!["/archive"]);
    }

    #[test]
    fn test_post_neighbours() {
        let pages = plan(&corpus(), &SiteConfig::default());
        let contexts: Vec<_> = pages
            .iter()
            .filter_map(|p| match &p.context {
                PageContext::Post(ctx) => Some(ctx),
                PageContext::Listing(_) => None,
            })
            .collect();

        assert_eq!(contexts[0].next_slug, "");
        assert_eq!(contexts[0].prev_slug, "/p2");
        assert_eq!(contexts[1].next_slug, "/p1");
        assert_eq!(contexts[1].prev_slug, "/p3");
        assert_eq!(contexts[2].prev_slug, "");
    }

    #[test]
    fn test_index_pagination_and_featured() {
        let posts: Vec<_> = (0..12)
            .map(|i| post(&format!("p{i}"), "alice", &["rust"], None))
            .collect();
        let mut config = SiteConfig::default();
        config.pagination.featured = 1;
        let pages = plan(&posts, &config);

        let index: Vec<_> = pages.iter().filter(|p| p.kind == PageKind::Index).collect();
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].path, "/");
        assert_eq!(index[1].path, "/list/2");
        assert_eq!(listing(index[1]).prev.as_deref(), Some("/"));
        assert_eq!(listing(index[0]).extra["tags"], json!(["rust"]));
        assert_eq!(listing(index[0]).extra["authors"], json!(["alice"]));
        assert_eq!(listing(index[0]).extra["series"], json!([]));
    }

    #[test]
    fn test_tag_listing_context() {
        let pages = plan(&corpus(), &SiteConfig::default());
        let rust = pages.iter().find(|p| p.path == "/tag/rust").unwrap();

        assert_eq!(rust.component, "src/templates/tag/page.js");
        assert_eq!(listing(rust).extra["tag"], "rust");
        assert_eq!(listing(rust).posts, vec!["p1", "p2"]);
    }

    #[test]
    fn test_organization_component() {
        let config = SiteConfig::default();
        let pages = plan(&corpus(), &config);

        let acme = pages.iter().find(|p| p.path == "/author/acme").unwrap();
        let alice = pages.iter().find(|p| p.path == "/author/alice").unwrap();
        assert_eq!(acme.component, config.templates.organization);
        assert_eq!(alice.component, config.templates.author);
    }

    #[test]
    fn test_archive_uses_archive_page_size() {
        let posts: Vec<_> = (0..60)
            .map(|i| post(&format!("p{i}"), "alice", &[], None))
            .collect();
        let pages = plan(&posts, &SiteConfig::default());

        let archive: Vec<_> = pages.iter().filter(|p| p.kind == PageKind::Archive).collect();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive[0].path, "/archive");
        assert_eq!(archive[1].path, "/archive/2");
        assert_eq!(listing(archive[0]).posts.len(), 50);
        assert_eq!(listing(archive[1]).posts.len(), 10);
        assert_eq!(paths(&pages, PageKind::Index).len(), 6);
    }

    #[test]
    fn test_extra_shared_as_site() {
        let mut config = SiteConfig::default();
        config.extra.insert("slogan".into(), toml::Value::String("Stay hungry".into()));
        let pages = plan(&corpus(), &config);

        let archive = pages.iter().find(|p| p.path == "/archive").unwrap();
        assert_eq!(listing(archive).extra["site"]["slogan"], "Stay hungry");
    }

    #[test]
    fn test_duplicate_paths() {
        let mut posts = corpus();
        posts[0].slug = "/archive".into();
        posts[2].slug = "/tag/rust".into();
        let pages = plan(&posts, &SiteConfig::default());

        assert_eq!(duplicate_paths(&pages), vec!["/tag/rust", "/archive"]);
        assert!(duplicate_paths(&plan(&corpus(), &SiteConfig::default())).is_empty());
    }

    #[test]
    fn test_no_posts_no_pages() {
        assert!(plan(&[], &SiteConfig::default()).is_empty());
    }
}
