//! Post validation and reference resolution.
//!
//! Runs after draft filtering and date ordering, before aggregation. Two
//! sequential checks guard the required fields, covers first, then authors;
//! the first post failing the first failing check is reported. Only when
//! both pass are tag and series references resolved into [`Post`]s.

use super::{
    data::EntityData,
    error::ContentError,
    frontmatter::FrontMatter,
    types::{Author, Entity, Post, Series, Tag},
};
use chrono::NaiveDateTime;
use rustc_hash::FxHashMap;
use std::path::PathBuf;

/// A parsed post whose references are still bare ids.
#[derive(Debug, Clone)]
pub struct RawPost {
    pub source: PathBuf,
    pub slug: String,
    pub date: NaiveDateTime,
    pub excerpt: Option<String>,
    pub front: FrontMatter,
}

impl RawPost {
    /// Post id: explicit front matter `id`, else the slug.
    pub fn id(&self) -> &str {
        self.front.id.as_deref().unwrap_or(&self.slug)
    }

    fn cover(&self) -> Option<&str> {
        non_blank(self.front.cover.as_deref())
    }

    fn author_id(&self) -> Option<&str> {
        non_blank(self.front.author.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate required fields and resolve references.
///
/// An author id missing from `authors.json` counts as a missing author.
pub fn validate(raw: Vec<RawPost>, data: &EntityData) -> Result<Vec<Post>, ContentError> {
    if let Some(post) = raw.iter().find(|post| post.cover().is_none()) {
        return Err(ContentError::MissingCover(post.source.clone()));
    }

    let authors = raw
        .iter()
        .map(|post| {
            post.author_id()
                .and_then(|id| data.authors.resolve(id))
                .ok_or_else(|| ContentError::MissingAuthor(post.source.clone()))
        })
        .collect::<Result<Vec<Author>, _>>()?;

    let mut seen: FxHashMap<String, PathBuf> = FxHashMap::default();
    raw.into_iter()
        .zip(authors)
        .map(|(post, author)| {
            if let Some(first) = seen.insert(post.id().to_owned(), post.source.clone()) {
                return Err(ContentError::DuplicateId {
                    id: post.id().to_owned(),
                    first,
                    second: post.source,
                });
            }
            resolve(post, author, data)
        })
        .collect()
}

fn resolve(post: RawPost, author: Author, data: &EntityData) -> Result<Post, ContentError> {
    let unknown = |kind: &'static str, id: &str| ContentError::UnknownReference {
        path: post.source.clone(),
        kind,
        id: id.to_owned(),
    };

    let tags = post
        .front
        .tags
        .iter()
        .flatten()
        .map(|id| data.tags.resolve(id).ok_or_else(|| unknown(Tag::KIND, id)))
        .collect::<Result<Vec<_>, _>>()?;

    let series = non_blank(post.front.series.as_deref())
        .map(|id| {
            data.series
                .resolve(id)
                .ok_or_else(|| unknown(Series::KIND, id))
        })
        .transpose()?;

    let id = post.id().to_owned();
    let cover = post.cover().unwrap_or_default().to_owned();

    Ok(Post {
        id,
        slug: post.slug,
        source: post.source,
        title: post.front.title,
        date: post.date,
        excerpt: post.excerpt,
        author,
        tags,
        series,
        cover,
        draft: post.front.draft,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::Lookup;
    use chrono::NaiveDate;

    fn raw(slug: &str) -> RawPost {
        RawPost {
            source: PathBuf::from(format!("posts{slug}.md")),
            slug: slug.to_owned(),
            date: NaiveDate::from_ymd_opt(2019, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            excerpt: None,
            front: FrontMatter {
                title: slug.trim_start_matches('/').to_owned(),
                cover: Some("cover.png".into()),
                author: Some("westwood".into()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_validate_resolves_references() {
        let mut post = raw("/a");
        post.front.tags = Some(vec!["rust".into(), "blog".into()]);
        post.front.series = Some("intro".into());

        let posts = validate(vec![post], &EntityData::open()).unwrap();

        assert_eq!(posts[0].id, "/a");
        assert_eq!(posts[0].author.id, "westwood");
        assert_eq!(posts[0].tags, vec![Tag::from_id("rust"), Tag::from_id("blog")]);
        assert_eq!(posts[0].series, Some(Series::from_id("intro")));
        assert_eq!(posts[0].cover, "cover.png");
    }

    #[test]
    fn test_validate_explicit_id() {
        let mut post = raw("/a");
        post.front.id = Some("post-1".into());

        let posts = validate(vec![post], &EntityData::open()).unwrap();
        assert_eq!(posts[0].id, "post-1");
        assert_eq!(posts[0].slug, "/a");
    }

    #[test]
    fn test_missing_cover_after_valid_posts() {
        let mut bad = raw("/c");
        bad.front.cover = None;

        let err = validate(vec![raw("/a"), raw("/b"), bad], &EntityData::open()).unwrap_err();
        assert!(matches!(err, ContentError::MissingCover(path) if path.ends_with("c.md")));
    }

    #[test]
    fn test_blank_cover_is_missing() {
        let mut bad = raw("/a");
        bad.front.cover = Some("  ".into());

        let err = validate(vec![bad], &EntityData::open()).unwrap_err();
        assert!(matches!(err, ContentError::MissingCover(_)));
    }

    #[test]
    fn test_cover_check_runs_before_author_check() {
        let mut no_author = raw("/a");
        no_author.front.author = None;
        let mut no_cover = raw("/b");
        no_cover.front.cover = None;

        let err = validate(vec![no_author, no_cover], &EntityData::open()).unwrap_err();
        assert!(matches!(err, ContentError::MissingCover(path) if path.ends_with("b.md")));
    }

    #[test]
    fn test_missing_author() {
        let mut bad = raw("/b");
        bad.front.author = None;

        let err = validate(vec![raw("/a"), bad], &EntityData::open()).unwrap_err();
        assert!(matches!(err, ContentError::MissingAuthor(path) if path.ends_with("b.md")));
    }

    #[test]
    fn test_unresolvable_author_is_missing() {
        let data = EntityData {
            authors: Lookup::from_entries([Author::from_id("someone-else")]),
            tags: Lookup::open(),
            series: Lookup::open(),
        };

        let err = validate(vec![raw("/a")], &data).unwrap_err();
        assert!(matches!(err, ContentError::MissingAuthor(_)));
    }

    #[test]
    fn test_unknown_tag() {
        let data = EntityData {
            authors: Lookup::open(),
            tags: Lookup::from_entries([Tag::from_id("rust")]),
            series: Lookup::open(),
        };
        let mut post = raw("/a");
        post.front.tags = Some(vec!["rust".into(), "ruts".into()]);

        let err = validate(vec![post], &data).unwrap_err();
        assert!(matches!(
            err,
            ContentError::UnknownReference { kind: "tag", ref id, .. } if id == "ruts"
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let mut first = raw("/a");
        first.front.id = Some("same".into());
        let mut second = raw("/b");
        second.front.id = Some("same".into());

        let err = validate(vec![first, second], &EntityData::open()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { ref id, .. } if id == "same"));
    }

    #[test]
    fn test_empty_input() {
        assert!(validate(vec![], &EntityData::open()).unwrap().is_empty());
    }
}
