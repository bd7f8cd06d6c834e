//! Sitemap generation.
//!
//! Lists every planned route for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/hello</loc>
//!     <lastmod>2019-03-08</lastmod>
//!   </url>
//! </urlset>
//! ```

use super::{Artifact, escape_xml};
use crate::{
    config::SiteConfig,
    content::Post,
    plan::{PageDescriptor, PageKind},
    utils::{date::to_ymd, slug::absolute_url},
};
use rustc_hash::FxHashMap;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render the sitemap if enabled in config.
pub fn build_sitemap(
    config: &SiteConfig,
    pages: &[PageDescriptor],
    posts: &[Post],
) -> Option<Artifact> {
    if !config.build.sitemap.enable {
        return None;
    }
    let base = config.base.url.as_deref().unwrap_or_default();
    Some(Artifact {
        module: "sitemap",
        path: config.output_path(&config.build.sitemap.path),
        content: Sitemap::from_pages(base, pages, posts).into_xml(),
    })
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    /// YYYY-MM-DD, post pages only
    lastmod: Option<String>,
}

impl Sitemap {
    fn from_pages(base: &str, pages: &[PageDescriptor], posts: &[Post]) -> Self {
        let dates: FxHashMap<&str, String> = posts
            .iter()
            .map(|post| (post.slug.as_str(), to_ymd(&post.date)))
            .collect();

        let urls = pages
            .iter()
            .map(|page| UrlEntry {
                loc: absolute_url(base, &page.path),
                lastmod: (page.kind == PageKind::Post)
                    .then(|| dates.get(page.path.as_str()).cloned())
                    .flatten(),
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
