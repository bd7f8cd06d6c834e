//! Entity data files: `authors.json`, `tags.json`, `series.json`.
//!
//! Each file is a JSON array of objects carrying at least an `id`. Post front
//! matter refers to entries by id. A missing file is not an error: references
//! then resolve to entities named after their id.

use super::{
    error::ContentError,
    types::{Author, Entity, Series, Tag},
};
use crate::log;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use std::{fs, path::Path};

pub const AUTHORS_FILE: &str = "authors.json";
pub const TAGS_FILE: &str = "tags.json";
pub const SERIES_FILE: &str = "series.json";

/// Id lookup for one entity kind.
#[derive(Debug)]
pub struct Lookup<T> {
    /// `None` when the data file does not exist.
    entries: Option<FxHashMap<String, T>>,
}

impl<T: Entity> Lookup<T> {
    /// Lookup that synthesizes every referenced entity.
    pub fn open() -> Self {
        Self { entries: None }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut entity| {
                fill_name(&mut entity);
                (entity.id().to_owned(), entity)
            })
            .collect();
        Self {
            entries: Some(entries),
        }
    }

    /// Resolve a reference. `None` means the id is absent from an existing file.
    pub fn resolve(&self, id: &str) -> Option<T> {
        match &self.entries {
            None => Some(T::from_id(id)),
            Some(entries) => entries.get(id).cloned(),
        }
    }
}

impl<T: Entity + DeserializeOwned> Lookup<T> {
    fn load(dir: &Path, file: &str) -> Result<Self, ContentError> {
        let path = dir.join(file);
        if !path.exists() {
            log!("warn"; "{} not found, {} names default to their ids", file, T::KIND);
            return Ok(Self::open());
        }

        let content = fs::read_to_string(&path).map_err(|err| ContentError::Io(path.clone(), err))?;
        let entries: Vec<T> =
            serde_json::from_str(&content).map_err(|err| ContentError::Data(path, err))?;
        Ok(Self::from_entries(entries))
    }
}

/// Entities without a display name are shown by id.
fn fill_name<T: Entity>(entity: &mut T) {
    if entity.name().is_empty() {
        let id = entity.id().to_owned();
        *entity.name_mut() = id;
    }
}

/// Lookups for all three entity kinds.
#[derive(Debug)]
pub struct EntityData {
    pub authors: Lookup<Author>,
    pub tags: Lookup<Tag>,
    pub series: Lookup<Series>,
}

impl EntityData {
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        Ok(Self {
            authors: Lookup::load(dir, AUTHORS_FILE)?,
            tags: Lookup::load(dir, TAGS_FILE)?,
            series: Lookup::load(dir, SERIES_FILE)?,
        })
    }

    /// Every reference resolves to an entity named after its id.
    #[cfg(test)]
    pub fn open() -> Self {
        Self {
            authors: Lookup::open(),
            tags: Lookup::open(),
            series: Lookup::open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_lookup_synthesizes() {
        let lookup: Lookup<Tag> = Lookup::open();
        assert_eq!(lookup.resolve("rust"), Some(Tag::from_id("rust")));
    }

    #[test]
    fn test_closed_lookup_rejects_unknown() {
        let lookup = Lookup::from_entries([Tag {
            id: "rust".into(),
            name: "Rust".into(),
        }]);

        assert_eq!(lookup.resolve("rust").unwrap().name, "Rust");
        assert_eq!(lookup.resolve("go"), None);
    }

    #[test]
    fn test_empty_name_falls_back_to_id() {
        let lookup = Lookup::from_entries([Author {
            id: "acme".into(),
            name: String::new(),
            organization: true,
        }]);

        let author = lookup.resolve("acme").unwrap();
        assert_eq!(author.name, "acme");
        assert!(author.organization);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(AUTHORS_FILE),
            r#"[{"id": "westwood", "nickname": "Westwood"}, {"id": "acme", "name": "ACME", "organization": true}]"#,
        )
        .unwrap();
        fs::write(dir.path().join(TAGS_FILE), r#"[{"id": "rust", "name": "Rust"}]"#).unwrap();

        let data = EntityData::load(dir.path()).unwrap();

        assert_eq!(data.authors.resolve("westwood").unwrap().name, "Westwood");
        assert!(data.authors.resolve("acme").unwrap().organization);
        assert_eq!(data.tags.resolve("go"), None);
        // series.json is absent: any reference resolves
        assert_eq!(data.series.resolve("intro").unwrap().name, "intro");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TAGS_FILE), "{not json").unwrap();

        let err = EntityData::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Data(path, _) if path.ends_with(TAGS_FILE)));
    }
}
