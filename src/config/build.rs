//! `[build]` section configuration.
//!
//! Contains source/output paths, the build mode, and the sitemap/rss switches.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Selects whether draft posts take part in the build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Drafts are kept (default, for local preview).
    #[default]
    Development,
    /// Posts with `draft: true` are dropped before aggregation.
    Production,
}

impl BuildMode {
    pub const fn includes_drafts(self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// `[build]` section in folio.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # Source directory
/// posts = "posts"          # Markdown posts, relative to content
/// data = "data"            # authors/tags/series json, relative to content
/// output = "public"
/// mode = "production"
///
/// [build.sitemap]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content source directory.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Markdown posts directory, relative to `content`.
    #[serde(default = "defaults::build::posts")]
    #[educe(Default = defaults::build::posts())]
    pub posts: PathBuf,

    /// Entity data directory (authors/tags/series json), relative to `content`.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Route manifest file name, relative to `output`.
    #[serde(default = "defaults::build::manifest")]
    #[educe(Default = defaults::build::manifest())]
    pub manifest: PathBuf,

    #[serde(default)]
    pub mode: BuildMode,

    /// Remove the output directory before writing (CLI `--clean` only).
    #[serde(skip)]
    pub clean: bool,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub rss: RssConfig,
}

/// `[build.sitemap]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Output path, relative to `output`.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.rss]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Output path, relative to `output`.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,

    /// Number of newest posts in the feed.
    #[serde(default = "defaults::build::rss::limit")]
    #[educe(Default = defaults::build::rss::limit())]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.posts, PathBuf::from("posts"));
        assert_eq!(config.build.data, PathBuf::from("data"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.manifest, PathBuf::from("routes.json"));
        assert_eq!(config.build.mode, BuildMode::Development);
        assert!(!config.build.sitemap.enable);
        assert!(!config.build.rss.enable);
        assert_eq!(config.build.rss.limit, 20);
    }

    #[test]
    fn test_build_mode_parse() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build]
            mode = "production"
        "#,
        )
        .unwrap();

        assert_eq!(config.build.mode, BuildMode::Production);
        assert!(!config.build.mode.includes_drafts());
        assert!(BuildMode::Development.includes_drafts());
    }

    #[test]
    fn test_build_mode_invalid() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [build]
            mode = "staging"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rss_section() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build.rss]
            enable = true
            path = "feed.xml"
            limit = 5
        "#,
        )
        .unwrap();

        assert!(config.build.rss.enable);
        assert_eq!(config.build.rss.path, PathBuf::from("feed.xml"));
        assert_eq!(config.build.rss.limit, 5);
    }
}
