//! Build artifacts written from the planned pages.
//!
//! - `manifest`: route manifest consumed by the page emitter
//! - `sitemap`: sitemap.xml over every planned route
//! - `rss`: feed of the newest posts
//!
//! Every generator renders into an [`Artifact`] in memory. Nothing touches
//! the output directory until all of them have rendered.

mod manifest;
mod rss;
mod sitemap;

pub use manifest::render_manifest;
pub use rss::build_rss;
pub use sitemap::build_sitemap;

use crate::log;
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// A rendered output file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Log module reporting the write.
    pub module: &'static str,
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, &self.content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log!(self.module; "{}", self.path.display());
        Ok(())
    }
}

/// Escape the five XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
