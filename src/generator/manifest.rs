//! Route manifest output.
//!
//! The manifest is how planned pages reach the page emitter: a JSON array of
//! `{path, component, context}` objects in planning order.

use super::Artifact;
use crate::{config::SiteConfig, plan::PageDescriptor};
use anyhow::Result;

/// Render the route manifest, destined for the output directory.
pub fn render_manifest(config: &SiteConfig, pages: &[PageDescriptor]) -> Result<Artifact> {
    Ok(Artifact {
        module: "manifest",
        path: config.output_path(&config.build.manifest),
        content: serde_json::to_string_pretty(pages)?,
    })
}
