//! Front matter parsing for markdown posts.
//!
//! Two fences are recognized:
//!
//! ```text
//! ---                       +++
//! title: Hello              title = "Hello"
//! date: 2019-03-08          date = 2019-03-08
//! cover: ./cover.png        cover = "./cover.png"
//! author: westwood          author = "westwood"
//! tags: [rust, blog]        tags = ["rust", "blog"]
//! ---                       +++
//! ```
//!
//! Fields other than the ones in [`FrontMatter`] are ignored; they belong to
//! the renderer.

use serde::Deserialize;
use thiserror::Error;

const YAML_FENCE: &str = "---";
const TOML_FENCE: &str = "+++";

/// Separates the excerpt from the rest of the post body.
pub const EXCERPT_SEPARATOR: &str = "<!-- end -->";

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("post does not start with a `---` or `+++` front matter block")]
    Missing,

    #[error("front matter block opened with `{0}` is never closed")]
    Unterminated(&'static str),

    #[error("yaml front matter")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("toml front matter")]
    Toml(#[from] toml::de::Error),
}

/// Planner-relevant front matter fields. References are entity ids.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Explicit post id; the slug is used when absent.
    pub id: Option<String>,
    pub title: String,
    pub date: Option<String>,
    pub cover: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub series: Option<String>,
    pub draft: bool,
}

/// A markdown document split into front matter and body.
#[derive(Debug)]
pub struct Document<'a> {
    pub front: FrontMatter,
    pub body: &'a str,
}

impl Document<'_> {
    /// Body text before [`EXCERPT_SEPARATOR`], if the post has one.
    pub fn excerpt(&self) -> Option<String> {
        self.body
            .split_once(EXCERPT_SEPARATOR)
            .map(|(excerpt, _)| excerpt.trim().to_owned())
            .filter(|excerpt| !excerpt.is_empty())
    }
}

/// Parse a markdown source into front matter and body.
pub fn parse(source: &str) -> Result<Document<'_>, FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    if let Some((header, body)) = split_fenced(source, YAML_FENCE)? {
        let front = if header.trim().is_empty() {
            FrontMatter::default()
        } else {
            serde_yaml_ng::from_str(header)?
        };
        return Ok(Document { front, body });
    }

    if let Some((header, body)) = split_fenced(source, TOML_FENCE)? {
        return Ok(Document {
            front: parse_toml(header)?,
            body,
        });
    }

    Err(FrontMatterError::Missing)
}

/// Split `fence\n<header>fence\n<body>`.
///
/// Returns `Ok(None)` when the source does not open with `fence`.
fn split_fenced<'a>(
    source: &'a str,
    fence: &'static str,
) -> Result<Option<(&'a str, &'a str)>, FrontMatterError> {
    let Some(rest) = source.strip_prefix(fence) else {
        return Ok(None);
    };
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == fence {
            return Ok(Some((&rest[..offset], &rest[offset + line.len()..])));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated(fence))
}

/// TOML dates are native datetimes; turn them into strings first so both
/// fences feed the same `date: Option<String>` field.
fn parse_toml(header: &str) -> Result<FrontMatter, FrontMatterError> {
    let mut table: toml::Table = header.parse()?;
    for (_, value) in table.iter_mut() {
        if let toml::Value::Datetime(dt) = value {
            *value = toml::Value::String(dt.to_string());
        }
    }
    Ok(toml::Value::Table(table).try_into()?)
}
