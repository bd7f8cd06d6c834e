//! Site build orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── plan_routes()
//!     │       ├── load_posts()           content/posts + content/data
//!     │       ├── aggregate().ranked()   registries by popularity
//!     │       └── plan_site()            ordered page descriptors
//!     │
//!     ├── render_manifest()              routes.json
//!     ├── rayon::join
//!     │       ├── build_sitemap()
//!     │       └── build_rss()            validated before anything is written
//!     │
//!     └── Artifact::write()              only once every artifact rendered
//! ```

use crate::{
    config::SiteConfig,
    content::{Entity, Post, load_posts},
    generator::{build_rss, build_sitemap, render_manifest},
    log,
    plan::{
        Aggregation, PageDescriptor, PageKind, Registry, aggregate, duplicate_paths, plan_site,
    },
};
use anyhow::{Context, Result};
use std::fs;

/// Number of ranked entries printed per registry by `check`.
const CHECK_TOP: usize = 5;

/// Everything one build computes before anything is written.
pub struct SitePlan {
    pub posts: Vec<Post>,
    pub aggregation: Aggregation,
    pub pages: Vec<PageDescriptor>,
}

/// Load content and plan every route. Nothing is written.
pub fn plan_routes(config: &SiteConfig) -> Result<SitePlan> {
    let posts = load_posts(config)?;
    let aggregation = aggregate(&posts).ranked();
    let pages = plan_site(&posts, &aggregation, config);

    Ok(SitePlan {
        posts,
        aggregation,
        pages,
    })
}

/// Plan the site and write the manifest, sitemap and feed.
///
/// All outputs are rendered first; a failure in any of them leaves the output
/// directory untouched. If `config.build.clean` is true, the output directory
/// is cleared right before writing.
pub fn build_site(config: &SiteConfig) -> Result<SitePlan> {
    let plan = plan_routes(config)?;
    log_pages(&plan.pages);

    let manifest = render_manifest(config, &plan.pages)?;
    let (sitemap, rss) = rayon::join(
        || build_sitemap(config, &plan.pages, &plan.posts),
        || build_rss(config, &plan.posts),
    );
    let artifacts: Vec<_> = [Some(manifest), sitemap, rss?]
        .into_iter()
        .flatten()
        .collect();

    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }

    for artifact in &artifacts {
        artifact.write()?;
    }

    Ok(plan)
}

/// Load and validate content, then report the ranked registries.
pub fn check_site(config: &SiteConfig) -> Result<SitePlan> {
    let plan = plan_routes(config)?;
    let aggregation = &plan.aggregation;

    log!("check"; "{} posts ({} mode)", plan.posts.len(), config.build.mode.name());
    log_registry(&aggregation.authors);
    log_registry(&aggregation.tags);
    log_registry(&aggregation.series);
    log_pages(&plan.pages);

    Ok(plan)
}

fn log_registry<T: Entity>(registry: &Registry<T>) {
    let top = registry
        .entities()
        .iter()
        .take(CHECK_TOP)
        .map(|e| format!("{} ({})", e.id(), registry.posts_of(e.id()).len()))
        .collect::<Vec<_>>()
        .join(", ");

    if top.is_empty() {
        log!("check"; "{}: none", T::KIND);
    } else {
        log!("check"; "{}: {} [{}]", T::KIND, registry.len(), top);
    }
}

fn log_pages(pages: &[PageDescriptor]) {
    let counts = PageKind::ALL
        .iter()
        .map(|&kind| {
            let n = pages.iter().filter(|p| p.kind == kind).count();
            format!("{} {n}", kind.name())
        })
        .collect::<Vec<_>>()
        .join(", ");
    log!("plan"; "{} pages: {counts}", pages.len());

    for path in duplicate_paths(pages) {
        log!("warn"; "`{path}` is planned more than once");
    }
}
