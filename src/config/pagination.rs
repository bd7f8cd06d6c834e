//! `[pagination]` and `[templates]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Upper bound used when slicing a listing page out of its items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceBound {
    /// `[i*size, min((i+1)*size, len))`: every page holds at most `size` items.
    #[default]
    Page,
    /// `[i*size, max((i+1)*size, len))` clipped to `len`: every page holds
    /// the whole remaining tail. Reproduces the legacy listing behavior.
    Tail,
}

/// `[pagination]` section in folio.toml.
///
/// # Example
/// ```toml
/// [pagination]
/// page_size = 10
/// archive_page_size = 50
/// featured = 5
/// slice = "page"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PaginationConfig {
    /// Posts per page for index, tag, series and author listings.
    #[serde(default = "defaults::pagination::page_size")]
    #[educe(Default = defaults::pagination::page_size())]
    pub page_size: usize,

    /// Posts per page for the archive listing.
    #[serde(default = "defaults::pagination::archive_page_size")]
    #[educe(Default = defaults::pagination::archive_page_size())]
    pub archive_page_size: usize,

    /// How many top-ranked tags/series/authors the index pages receive.
    #[serde(default = "defaults::pagination::featured")]
    #[educe(Default = defaults::pagination::featured())]
    pub featured: usize,

    #[serde(default)]
    pub slice: SliceBound,
}

/// `[templates]` section - rendering component bound to each page kind.
///
/// Values are opaque to the planner; the page emitter resolves them.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    #[serde(default = "defaults::templates::post")]
    #[educe(Default = defaults::templates::post())]
    pub post: String,

    #[serde(default = "defaults::templates::index")]
    #[educe(Default = defaults::templates::index())]
    pub index: String,

    #[serde(default = "defaults::templates::tag")]
    #[educe(Default = defaults::templates::tag())]
    pub tag: String,

    #[serde(default = "defaults::templates::series")]
    #[educe(Default = defaults::templates::series())]
    pub series: String,

    #[serde(default = "defaults::templates::author")]
    #[educe(Default = defaults::templates::author())]
    pub author: String,

    /// Used instead of `author` for organization authors.
    #[serde(default = "defaults::templates::organization")]
    #[educe(Default = defaults::templates::organization())]
    pub organization: String,

    #[serde(default = "defaults::templates::archive")]
    #[educe(Default = defaults::templates::archive())]
    pub archive: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.pagination.archive_page_size, 50);
        assert_eq!(config.pagination.featured, 5);
        assert_eq!(config.pagination.slice, SliceBound::Page);
    }

    #[test]
    fn test_pagination_tail_slice() {
        let config: SiteConfig = toml::from_str(
            r#"
            [pagination]
            page_size = 20
            slice = "tail"
        "#,
        )
        .unwrap();

        assert_eq!(config.pagination.page_size, 20);
        assert_eq!(config.pagination.slice, SliceBound::Tail);
    }

    #[test]
    fn test_templates_override() {
        let config: SiteConfig = toml::from_str(
            r#"
            [templates]
            organization = "templates/org.html"
        "#,
        )
        .unwrap();

        assert_eq!(config.templates.organization, "templates/org.html");
        assert_eq!(config.templates.author, "src/templates/author/page.js");
    }

    #[test]
    fn test_templates_unknown_kind() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [templates]
            category = "x"
        "#,
        );
        assert!(result.is_err());
    }
}
