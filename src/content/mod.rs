//! Blog content: posts and the authors, tags and series they reference.
//!
//! # Layout
//!
//! ```text
//! content/
//! ├── posts/
//! │   ├── hello/index.md      → /hello
//! │   └── notes/rust.md       → /notes/rust
//! └── data/
//!     ├── authors.json        [{ "id", "name", "organization" }]
//!     ├── tags.json           [{ "id", "name" }]
//!     └── series.json         [{ "id", "name" }]
//! ```

mod data;
mod error;
pub mod frontmatter;
mod loader;
mod types;
mod validate;

pub use error::ContentError;
pub use loader::load_posts;
pub use types::{Author, Entity, Post, Series, Tag};
