//! Post discovery and loading.
//!
//! ```text
//! load_posts()
//!     │
//!     ├── collect_markdown()   walk content/posts, sorted by file name
//!     ├── read_post()          parallel: front matter, slug, date, excerpt
//!     ├── select()             drop drafts (production), newest first
//!     ├── EntityData::load()   authors/tags/series json
//!     └── validate()           cover, author, references
//! ```

use super::{
    data::EntityData,
    error::ContentError,
    frontmatter,
    types::Post,
    validate::{RawPost, validate},
};
use crate::{
    config::{BuildMode, SiteConfig},
    log,
    logger::ProgressBar,
    utils::{date::parse_date, slug::slug_from_path},
};
use anyhow::{Result, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Load, filter, order and validate every post of the site.
///
/// Fails without partial results on the first invalid post.
pub fn load_posts(config: &SiteConfig) -> Result<Vec<Post>> {
    let posts_dir = config.posts_dir();
    if !posts_dir.is_dir() {
        bail!("posts directory `{}` not found", posts_dir.display());
    }

    let files = collect_markdown(&posts_dir)?;
    log!("load"; "reading {} posts", files.len());

    let progress = ProgressBar::new("load", files.len());
    let raw = files
        .par_iter()
        .map(|path| {
            let post = read_post(path, &posts_dir);
            progress.inc();
            post
        })
        .collect::<Result<Vec<_>>>();
    progress.finish();
    let raw = raw?;

    let total = raw.len();
    let raw = select(raw, config.build.mode);
    if raw.len() < total {
        log!("load"; "{} drafts skipped ({} mode)", total - raw.len(), config.build.mode.name());
    }

    let data = EntityData::load(&config.data_dir())?;
    Ok(validate(raw, &data)?)
}

/// Markdown files below `dir`, in a stable (file name) order.
///
/// Any entry that cannot be walked fails the whole collection.
pub fn collect_markdown(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() && is_markdown(e.path()) => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(ContentError::Walk(dir.to_owned(), err))),
        })
        .collect()
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Read and parse one markdown post.
pub fn read_post(path: &Path, posts_dir: &Path) -> Result<RawPost> {
    let source = fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_owned(), err))?;
    let doc = frontmatter::parse(&source)
        .map_err(|err| ContentError::FrontMatter(path.to_owned(), err))?;

    let value = doc
        .front
        .date
        .as_deref()
        .ok_or_else(|| ContentError::MissingDate(path.to_owned()))?;
    let date = parse_date(value).ok_or_else(|| ContentError::InvalidDate {
        path: path.to_owned(),
        value: value.to_owned(),
    })?;

    Ok(RawPost {
        source: path.to_owned(),
        slug: slug_from_path(path, posts_dir)?,
        date,
        excerpt: doc.excerpt(),
        front: doc.front,
    })
}

/// Apply the draft filter and order posts newest first.
///
/// The sort is stable: posts sharing a date keep their discovery order.
pub fn select(raw: Vec<RawPost>, mode: BuildMode) -> Vec<RawPost> {
    let mut posts: Vec<_> = raw
        .into_iter()
        .filter(|post| mode.includes_drafts() || !post.front.draft)
        .collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}
