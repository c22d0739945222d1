//! Helpers for rendering components that read the shared site context.

use crate::ui::{Route, Site};
use async_trait::async_trait;
use blockpress_engine::{
    ContentSource, Media, MenuItem, Page, PageSummary, SearchResult, SearchSettings, SiteContext,
    SiteOptions, SiteProfile,
};
use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;
use std::sync::Arc;

pub const SITE_URL: &str = "https://cms.example.com";

/// A CMS with no content. Components under test only render their initial state.
pub struct StubSource;

#[async_trait]
impl ContentSource for StubSource {
    async fn all_pages(&self) -> Vec<PageSummary> {
        Vec::new()
    }

    async fn page_by_slug(&self, _slug: &str) -> Option<Page> {
        None
    }

    async fn search(&self, _query: &str) -> Vec<SearchResult> {
        Vec::new()
    }

    async fn main_menu(&self, _option_name: &str) -> Vec<MenuItem> {
        Vec::new()
    }

    async fn site_options(&self) -> Option<SiteOptions> {
        None
    }

    async fn media_by_id(&self, _id: u64) -> Option<Media> {
        None
    }
}

pub fn site() -> Site {
    Site {
        source: Arc::new(StubSource),
        profile: SiteProfile {
            site_name: "Acme".to_string(),
            tagline: "Websites that ship".to_string(),
            site_url: SITE_URL.to_string(),
            home_slug: "home".to_string(),
        },
        search: SearchSettings::default(),
    }
}

/// Provides the contexts `App` normally provides.
#[component]
pub fn WithSite(site_context: SiteContext, children: Element) -> Element {
    use_context_provider(site);
    use_context_provider(|| Signal::new(Route::Home));
    use_context_provider(|| Signal::new(site_context.clone()));
    children
}

pub fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
