//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[base]`       | Site metadata (title, author, url)             |
//! | `[build]`      | Paths, build mode, sitemap and rss switches    |
//! | `[pagination]` | Page sizes, featured count, slice bound        |
//! | `[templates]`  | Rendering component bound to each page kind    |
//! | `[extra]`      | User-defined fields passed to listing pages    |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "westwood"
//! description = "westwood's personal website"
//! url = "https://example.com"
//!
//! [build]
//! mode = "production"
//!
//! [build.sitemap]
//! enable = true
//!
//! [pagination]
//! page_size = 10
//!
//! [extra]
//! slogan = "Stay hungry, stay foolish"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod pagination;

pub use build::BuildMode;
pub use pagination::SliceBound;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use pagination::{PaginationConfig, TemplatesConfig};

use crate::cli::{Cli, Commands, ModeArgs};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Directory holding the markdown posts.
    pub fn posts_dir(&self) -> PathBuf {
        self.build.content.join(&self.build.posts)
    }

    /// Directory holding `authors.json`, `tags.json` and `series.json`.
    pub fn data_dir(&self) -> PathBuf {
        self.build.content.join(&self.build.data)
    }

    /// Resolve a path relative to the output directory.
    pub fn output_path(&self, relative: &Path) -> PathBuf {
        self.build.output.join(relative)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .clone()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .clone()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.update_path_with_root(cli, &root);

        match &cli.command {
            Commands::Build {
                mode_args,
                clean,
                page_size,
                sitemap,
                rss,
            } => {
                self.update_mode(mode_args);
                self.build.clean = *clean;
                Self::update_option(&mut self.pagination.page_size, page_size.as_ref());
                Self::update_option(&mut self.build.sitemap.enable, sitemap.as_ref());
                Self::update_option(&mut self.build.rss.enable, rss.as_ref());
            }
            Commands::Check { mode_args } => self.update_mode(mode_args),
            Commands::Init { .. } => {}
        }
    }

    fn update_mode(&mut self, args: &ModeArgs) {
        Self::update_option(&mut self.build.mode, args.mode.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values that the planner relies on.
    pub fn validate(&self) -> Result<()> {
        if self.pagination.page_size == 0 {
            bail!(ConfigError::Validation(
                "[pagination.page_size] must be greater than 0".into()
            ));
        }
        if self.pagination.archive_page_size == 0 {
            bail!(ConfigError::Validation(
                "[pagination.archive_page_size] must be greater than 0".into()
            ));
        }

        let needs_url = self.build.sitemap.enable || self.build.rss.enable;
        match &self.base.url {
            None if needs_url => {
                bail!("[base.url] is required for sitemap or rss generation")
            }
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                bail!(ConfigError::Validation(
                    "[base.url] must start with http:// or https://".into()
                ))
            }
            _ => {}
        }

        if self.build.rss.enable && self.build.rss.limit == 0 {
            bail!(ConfigError::Validation(
                "[build.rss.limit] must be greater than 0".into()
            ));
        }

        Ok(())
    }

    /// `[extra]` table as json, handed to listing pages under `site`.
    pub fn extra_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.extra).unwrap_or_default()
    }
}
