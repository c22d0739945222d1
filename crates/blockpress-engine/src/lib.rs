pub mod blocks;
pub mod client;
pub mod compose;
pub mod interaction;
pub mod layout;
pub mod maps;
pub mod media;
pub mod models;
pub mod search;
pub mod seo;
pub mod site;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{Block, BlockError, BlockKind, RawBlock, dispatch};
pub use client::{CmsClient, CmsError, ContentSource};
pub use compose::{
    Composition, PageView, SiteProfile, compose, load_page, resolve_media, site_slugs,
};
pub use models::*;
pub use search::{PendingQuery, QueryGate, SearchSettings, Submission, debounced_search};
pub use seo::Metadata;
pub use site::SiteContext;
pub use text::{internal_path, plain_text, strip_html};
