//! Shared fixtures for unit tests.

use crate::blocks::RawBlock;
use crate::client::ContentSource;
use crate::models::{Media, MenuItem, Page, PageSummary, SearchResult, SiteOptions};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn raw(value: serde_json::Value) -> RawBlock {
    RawBlock::new(value)
}

/// A page titled after its slug ("about" becomes "About").
pub fn page_with_blocks(slug: &str, blocks: Vec<RawBlock>) -> Page {
    let mut title = slug.to_string();
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    Page {
        id: slug.len() as u64,
        slug: slug.to_string(),
        title,
        blocks,
        ..Default::default()
    }
}

#[derive(Debug, Default)]
struct Calls {
    searches: Vec<String>,
    media: Vec<u64>,
    menus: Vec<String>,
    options: usize,
}

/// In-memory content source that records the requests it receives.
#[derive(Debug, Default)]
pub struct FakeSource {
    pages: Vec<Page>,
    media: HashMap<u64, Media>,
    menu: Vec<MenuItem>,
    options: Option<SiteOptions>,
    results: Vec<SearchResult>,
    calls: Mutex<Calls>,
}

impl FakeSource {
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    pub fn with_media(mut self, id: u64, url: &str) -> Self {
        self.media.insert(
            id,
            Media {
                id,
                url: url.to_string(),
                ..Default::default()
            },
        );
        self
    }

    pub fn with_menu(mut self, menu: Vec<MenuItem>) -> Self {
        self.menu = menu;
        self
    }

    pub fn with_options(mut self, options: SiteOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_results(mut self, results: Vec<SearchResult>) -> Self {
        self.results = results;
        self
    }

    pub fn searches(&self) -> Vec<String> {
        self.calls.lock().unwrap().searches.clone()
    }

    /// Requested media IDs, sorted.
    pub fn media_requests(&self) -> Vec<u64> {
        let mut ids = self.calls.lock().unwrap().media.clone();
        ids.sort_unstable();
        ids
    }

    pub fn menu_requests(&self) -> Vec<String> {
        self.calls.lock().unwrap().menus.clone()
    }

    pub fn option_requests(&self) -> usize {
        self.calls.lock().unwrap().options
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn all_pages(&self) -> Vec<PageSummary> {
        self.pages
            .iter()
            .map(|page| PageSummary {
                id: page.id,
                slug: page.slug.clone(),
                title: page.title.clone(),
            })
            .collect()
    }

    async fn page_by_slug(&self, slug: &str) -> Option<Page> {
        self.pages.iter().find(|page| page.slug == slug).cloned()
    }

    async fn search(&self, query: &str) -> Vec<SearchResult> {
        self.calls.lock().unwrap().searches.push(query.to_string());
        self.results.clone()
    }

    async fn main_menu(&self, option_name: &str) -> Vec<MenuItem> {
        self.calls.lock().unwrap().menus.push(option_name.to_string());
        self.menu.clone()
    }

    async fn site_options(&self) -> Option<SiteOptions> {
        self.calls.lock().unwrap().options += 1;
        self.options.clone()
    }

    async fn media_by_id(&self, id: u64) -> Option<Media> {
        self.calls.lock().unwrap().media.push(id);
        self.media.get(&id).cloned()
    }
}
