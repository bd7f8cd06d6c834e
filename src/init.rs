//! Site initialization module.
//!
//! Creates a new site skeleton with default configuration and one sample post.

use crate::{
    config::SiteConfig,
    content::frontmatter::EXCERPT_SEPARATOR,
    log,
};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default config filename
const CONFIG_FILE: &str = "folio.toml";

const AUTHORS_JSON: &str = r#"[
  { "id": "me", "name": "Me" }
]
"#;

const TAGS_JSON: &str = r#"[
  { "id": "hello", "name": "Hello" }
]
"#;

const SERIES_JSON: &str = "[]\n";

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Without a name the site is created in place, which must be empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `folio init <SITE_NAME>` to create in a subdirectory."
        );
    }

    let defaults = SiteConfig::default();
    let content = root.join(&defaults.build.content);
    init_site_structure(&[
        content.join(&defaults.build.posts),
        content.join(&defaults.build.data),
    ])?;
    init_entity_data(&content.join(&defaults.build.data))?;
    init_sample_post(&content.join(&defaults.build.posts))?;
    init_default_config(root)?;
    init_ignored_files(root, &[defaults.build.output.as_path()])?;

    log!("init"; "new site at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(dirs: &[impl AsRef<Path>]) -> Result<()> {
    for dir in dirs {
        let path = dir.as_ref();
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `folio init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

fn init_entity_data(data: &Path) -> Result<()> {
    for (file, content) in [
        ("authors.json", AUTHORS_JSON),
        ("tags.json", TAGS_JSON),
        ("series.json", SERIES_JSON),
    ] {
        fs::write(data.join(file), content)?;
    }
    Ok(())
}

fn init_sample_post(posts: &Path) -> Result<()> {
    let dir = posts.join("hello-world");
    fs::create_dir_all(&dir)?;

    let today = chrono::Local::now().format("%Y-%m-%d");
    let post = format!(
        "---\n\
         title: Hello, world\n\
         date: {today}\n\
         author: me\n\
         cover: cover.png\n\
         tags: [hello]\n\
         ---\n\
         \n\
         The first post.\n\
         \n\
         {EXCERPT_SEPARATOR}\n\
         \n\
         Everything after the separator stays out of listings.\n"
    );
    fs::write(dir.join("index.md"), post)?;
    Ok(())
}

/// Initialize .gitignore and .ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .filter_map(|p| p.to_str())
        .collect::<Vec<_>>()
        .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
