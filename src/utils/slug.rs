//! URL path utilities.
//!
//! Derives post slugs from their source location and joins route segments.

use anyhow::{Result, anyhow};
use std::path::{Component, Path};

/// Derive a post slug from its markdown file path.
///
/// The slug is the path relative to the posts directory, without extension,
/// with `index` files collapsing onto their directory. No trailing slash.
///
/// | Source | Slug |
/// |--------|------|
/// | `posts/hello/index.md` | `/hello` |
/// | `posts/notes/rust.md` | `/notes/rust` |
/// | `posts/about.md` | `/about` |
pub fn slug_from_path(path: &Path, posts_dir: &Path) -> Result<String> {
    let relative = path.strip_prefix(posts_dir).map_err(|_| {
        anyhow!(
            "`{}` is not inside the posts directory `{}`",
            path.display(),
            posts_dir.display()
        )
    })?;

    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let file = segments
        .pop()
        .ok_or_else(|| anyhow!("empty post path: {}", path.display()))?;
    let stem = Path::new(&file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or(file);

    if stem != "index" {
        segments.push(stem);
    }

    Ok(format!("/{}", segments.join("/")))
}

/// Join a route prefix and a segment the way a path join would:
/// exactly one `/` between them, duplicate slashes collapsed.
///
/// `("/list/", "2")` → `/list/2`, `("/tag/rust", "3")` → `/tag/rust/3`.
pub fn join_url(prefix: &str, segment: &str) -> String {
    let joined = if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    };

    let mut out = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Prefix a site-relative route with the base url.
pub fn absolute_url(base: &str, route: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), route.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn slug(file: &str) -> String {
        let dir = PathBuf::from("/site/content/posts");
        slug_from_path(&dir.join(file), &dir).unwrap()
    }

    #[test]
    fn test_slug_index_collapses() {
        assert_eq!(slug("hello/index.md"), "/hello");
        assert_eq!(slug("2019/intro/index.md"), "/2019/intro");
    }

    #[test]
    fn test_slug_plain_file() {
        assert_eq!(slug("about.md"), "/about");
        assert_eq!(slug("notes/rust.md"), "/notes/rust");
    }

    #[test]
    fn test_slug_root_index() {
        assert_eq!(slug("index.md"), "/");
    }

    #[test]
    fn test_slug_keeps_unicode() {
        assert_eq!(slug("随笔/index.md"), "/随笔");
    }

    #[test]
    fn test_slug_outside_posts_dir() {
        let result = slug_from_path(
            Path::new("/elsewhere/post.md"),
            Path::new("/site/content/posts"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/list/", "2"), "/list/2");
        assert_eq!(join_url("/list", "2"), "/list/2");
        assert_eq!(join_url("/tag/rust/", "3"), "/tag/rust/3");
        assert_eq!(join_url("/", "1"), "/1");
        assert_eq!(join_url("", "1"), "1");
        assert_eq!(join_url("//archive//", "4"), "/archive/4");
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("https://example.com/", "/tag/rust"), "https://example.com/tag/rust");
        assert_eq!(absolute_url("https://example.com", "/"), "https://example.com/");
    }
}
