//! rss feed generation.
//!
//! Publishes the newest posts (up to `[build.rss] limit`) as an rss 2.0 channel.

use super::Artifact;
use crate::{
    config::SiteConfig,
    content::{Entity, Post},
    utils::{date::to_rfc2822, slug::absolute_url},
};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::sync::LazyLock;

/// Render and validate the rss feed if enabled in config.
///
/// `posts` must be newest first.
pub fn build_rss(config: &SiteConfig, posts: &[Post]) -> Result<Option<Artifact>> {
    if !config.build.rss.enable {
        return Ok(None);
    }
    Ok(Some(Artifact {
        module: "rss",
        path: config.output_path(&config.build.rss.path),
        content: RssFeed::new(config, posts).into_xml()?,
    }))
}

struct RssFeed<'a> {
    config: &'a SiteConfig,
    posts: &'a [Post],
}

impl<'a> RssFeed<'a> {
    fn new(config: &'a SiteConfig, posts: &'a [Post]) -> Self {
        let limit = config.build.rss.limit.min(posts.len());
        Self {
            config,
            posts: &posts[..limit],
        }
    }

    fn into_xml(self) -> Result<String> {
        let items: Vec<_> = self
            .posts
            .iter()
            .map(|post| post_to_rss_item(post, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.base.title)
            .link(self.config.base.url.as_deref().unwrap_or_default())
            .description(&self.config.base.description)
            .language(self.config.base.language.clone())
            .generator("folio".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }
}

fn post_to_rss_item(post: &Post, config: &SiteConfig) -> rss::Item {
    let link = absolute_url(config.base.url.as_deref().unwrap_or_default(), &post.slug);

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.excerpt.clone())
        .pub_date(to_rfc2822(&post.date))
        .author(normalize_rss_author(post.author.name(), config))
        .build()
}

/// Normalize author field to rss format: "email@example.com (Name)"
///
/// Priority:
/// 1. Post author if already in valid format
/// 2. Site author if in valid format
/// 3. Site email combined with the post author's name (site author if blank)
fn normalize_rss_author(author: &str, config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$")
            .expect("valid author regex")
    });

    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.to_owned());
    }

    let site_author = &config.base.author;
    if RE_VALID_AUTHOR.is_match(site_author) {
        return Some(site_author.clone());
    }

    let name = if author.trim().is_empty() { site_author } else { author };
    if name.trim().is_empty() {
        return None;
    }
    Some(format!("{} ({})", config.base.email, name))
}
