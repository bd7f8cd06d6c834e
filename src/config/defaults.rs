//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.folio".into()
    }

    pub fn language() -> String {
        "zh-Hans".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn posts() -> PathBuf {
        "posts".into()
    }

    pub fn data() -> PathBuf {
        "data".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn manifest() -> PathBuf {
        "routes.json".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "rss.xml".into()
        }

        pub fn limit() -> usize {
            20
        }
    }
}

// ============================================================================
// [pagination] Section Defaults
// ============================================================================

pub mod pagination {
    pub fn page_size() -> usize {
        10
    }

    pub fn archive_page_size() -> usize {
        50
    }

    pub fn featured() -> usize {
        5
    }
}

// ============================================================================
// [templates] Section Defaults
// ============================================================================

pub mod templates {
    pub fn post() -> String {
        "src/templates/post/page.js".into()
    }

    pub fn index() -> String {
        "src/templates/index/page.js".into()
    }

    pub fn tag() -> String {
        "src/templates/tag/page.js".into()
    }

    pub fn series() -> String {
        "src/templates/series/page.js".into()
    }

    pub fn author() -> String {
        "src/templates/author/page.js".into()
    }

    pub fn organization() -> String {
        "src/templates/organization/page.js".into()
    }

    pub fn archive() -> String {
        "src/templates/archive/page.js".into()
    }
}
