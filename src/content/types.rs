//! Content entities: posts and the authors/tags/series they reference.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A registry entity identified by a unique string id.
///
/// Implemented by [`Author`], [`Tag`] and [`Series`] so aggregation and
/// ranking can treat the three registries uniformly.
pub trait Entity: Clone {
    /// Name used in logs and error messages (`"tag"`, `"series"`, ...).
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    fn name_mut(&mut self) -> &mut String;

    /// Entity synthesized from a bare reference when no data file exists.
    fn from_id(id: &str) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    #[serde(default, alias = "nickname")]
    pub name: String,
    /// Organization authors get their own listing template.
    #[serde(default)]
    pub organization: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Entity for Author {
    const KIND: &'static str = "author";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn from_id(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: id.to_owned(),
            organization: false,
        }
    }
}

impl Entity for Tag {
    const KIND: &'static str = "tag";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn from_id(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: id.to_owned(),
        }
    }
}

impl Entity for Series {
    const KIND: &'static str = "series";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn from_id(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: id.to_owned(),
        }
    }
}

/// A validated post. Immutable for the rest of the build.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    /// Route of the post detail page, e.g. `/hello`.
    pub slug: String,
    /// Markdown source, for error messages.
    pub source: PathBuf,
    pub title: String,
    pub date: NaiveDateTime,
    /// Text before the `<!-- end -->` separator.
    pub excerpt: Option<String>,
    pub author: Author,
    pub tags: Vec<Tag>,
    pub series: Option<Series>,
    /// Cover image reference, resolved by the renderer.
    pub cover: String,
    pub draft: bool,
}
