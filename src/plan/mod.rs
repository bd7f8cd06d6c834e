//! Route planning: aggregation, ranking and pagination.
//!
//! ```text
//! posts ──► aggregate() ──► Aggregation::ranked() ──► plan_site() ──► Vec<PageDescriptor>
//!                │                                        │
//!                └── registries + reverse indices         └── Pagination per listing
//! ```
//!
//! Everything here is pure and synchronous: the same posts and config always
//! yield the same pages.

mod aggregate;
mod page;
mod paginate;
mod rank;
mod site;

pub use aggregate::{Aggregation, Registry, aggregate};
pub use page::{ListingContext, PageContext, PageDescriptor, PageKind, PostContext};
pub use site::{duplicate_paths, plan_site};

#[cfg(test)]
pub(crate) use aggregate::tests::post as test_post;
