//! Content loading and validation errors.

use std::path::PathBuf;
use thiserror::Error;

use super::frontmatter::FrontMatterError;

/// Errors that abort a build before any page is planned.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cannot walk `{0}`")]
    Walk(PathBuf, #[source] walkdir::Error),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] FrontMatterError),

    #[error("invalid entity data in `{0}`")]
    Data(PathBuf, #[source] serde_json::Error),

    #[error("[post] every post must have a cover field: `{0}`")]
    MissingCover(PathBuf),

    #[error("[post] every post must have an author field: `{0}`")]
    MissingAuthor(PathBuf),

    #[error("[post] `{0}` has no date")]
    MissingDate(PathBuf),

    #[error("[post] `{path}` has an invalid date `{value}`")]
    InvalidDate { path: PathBuf, value: String },

    #[error("[post] `{path}` references unknown {kind} `{id}`")]
    UnknownReference {
        path: PathBuf,
        kind: &'static str,
        id: String,
    },

    #[error("[post] duplicate post id `{id}` in `{first}` and `{second}`")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}
