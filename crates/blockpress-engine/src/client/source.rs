use super::CmsClient;
use crate::models::{Media, MenuItem, Page, PageSummary, SearchResult, SiteOptions};
use async_trait::async_trait;

/// The content operations the front-end depends on.
///
/// Implemented by [`CmsClient`]; tests substitute an in-memory source.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn all_pages(&self) -> Vec<PageSummary>;
    async fn page_by_slug(&self, slug: &str) -> Option<Page>;
    async fn search(&self, query: &str) -> Vec<SearchResult>;
    async fn main_menu(&self, option_name: &str) -> Vec<MenuItem>;
    async fn site_options(&self) -> Option<SiteOptions>;
    async fn media_by_id(&self, id: u64) -> Option<Media>;
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn all_pages(&self) -> Vec<PageSummary> {
        CmsClient::all_pages(self).await
    }

    async fn page_by_slug(&self, slug: &str) -> Option<Page> {
        CmsClient::page_by_slug(self, slug).await
    }

    async fn search(&self, query: &str) -> Vec<SearchResult> {
        CmsClient::search(self, query).await
    }

    async fn main_menu(&self, option_name: &str) -> Vec<MenuItem> {
        CmsClient::main_menu(self, option_name).await
    }

    async fn site_options(&self) -> Option<SiteOptions> {
        CmsClient::site_options(self).await
    }

    async fn media_by_id(&self, id: u64) -> Option<Media> {
        CmsClient::media_by_id(self, id).await
    }
}
