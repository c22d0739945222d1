//! Read-only client for the WordPress REST API.
//!
//! Every operation issues a single GET. Failures are logged and turned into
//! an empty result so a broken CMS never takes the front-end down.

mod source;

pub use source::ContentSource;

use crate::models::image::WpMedia;
use crate::models::menu::{AcfMenuOptions, PluginMenu};
use crate::models::{Media, MenuItem, MenuSummary, Page, PageSummary, SearchResult, SiteOptions};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

const PAGE_SUMMARY_FIELDS: &str = "id,slug,title,acf";
const PAGE_FIELDS: &str = "id,slug,title,excerpt,content,link,acf,yoast_head_json";

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client bound to one WordPress site.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    site_url: String,
    api_url: String,
    page_size: u32,
    search_limit: u32,
}

#[derive(Deserialize)]
struct AcfOptionsResponse {
    #[serde(default)]
    acf: Option<Value>,
}

impl CmsClient {
    /// Client for the site at `site_url`, using the default `wp/v2` API base.
    pub fn new(site_url: impl Into<String>) -> Self {
        let site_url = site_url.into().trim_end_matches('/').to_string();
        let api_url = format!("{site_url}/wp-json/wp/v2");
        Self {
            http: reqwest::Client::new(),
            site_url,
            api_url,
            page_size: DEFAULT_PAGE_SIZE,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_search_limit(mut self, search_limit: u32) -> Self {
        self.search_limit = search_limit;
        self
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, CmsError> {
        log::debug!("GET {url} {query:?}");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| CmsError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| CmsError::Transport {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| CmsError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Unwrap a result, logging the failure and substituting `fallback`.
    fn or_log<T>(result: Result<T, CmsError>, what: &str, fallback: T) -> T {
        result.unwrap_or_else(|err| {
            log::error!("Error fetching {what}: {err}");
            fallback
        })
    }

    fn wp_json(&self, path: &str) -> String {
        format!("{}/wp-json/{path}", self.site_url)
    }

    /// All pages, as the fixed id/slug/title projection.
    pub async fn all_pages(&self) -> Vec<PageSummary> {
        let url = format!("{}/pages", self.api_url);
        let query = [
            ("per_page", self.page_size.to_string()),
            ("_fields", PAGE_SUMMARY_FIELDS.to_string()),
        ];
        Self::or_log(self.get_json(&url, &query).await, "pages", Vec::new())
    }

    /// The first page with `slug`, if any.
    pub async fn page_by_slug(&self, slug: &str) -> Option<Page> {
        let url = format!("{}/pages", self.api_url);
        let query = [
            ("slug", slug.to_string()),
            ("_fields", PAGE_FIELDS.to_string()),
        ];
        let pages: Vec<Page> = Self::or_log(
            self.get_json(&url, &query).await,
            &format!("page with slug {slug:?}"),
            Vec::new(),
        );
        pages.into_iter().next()
    }

    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let url = format!("{}/search", self.api_url);
        let params = [
            ("search", query.to_string()),
            ("per_page", self.search_limit.to_string()),
        ];
        Self::or_log(self.get_json(&url, &params).await, "search results", Vec::new())
    }

    /// Items of a menus-plugin menu.
    pub async fn menu(&self, slug: &str) -> Vec<MenuItem> {
        let url = self.wp_json(&format!("menus/v1/menus/{slug}"));
        let menu: Option<PluginMenu> =
            Self::or_log(self.get_json(&url, &[]).await.map(Some), &format!("menu {slug:?}"), None);
        menu.map(|menu| menu.items.into_iter().map(Into::into).collect())
            .unwrap_or_default()
    }

    pub async fn all_menus(&self) -> Vec<MenuSummary> {
        let url = self.wp_json("menus/v1/menus");
        Self::or_log(self.get_json(&url, &[]).await, "menus", Vec::new())
    }

    /// The `acf` object of an options page.
    pub async fn acf_options(&self, name: &str) -> Option<Value> {
        let url = self.wp_json(&format!("acf/v3/options/{name}"));
        let response: Option<AcfOptionsResponse> = Self::or_log(
            self.get_json(&url, &[]).await.map(Some),
            &format!("ACF options {name:?}"),
            None,
        );
        response?.acf.filter(|acf| !acf.is_null())
    }

    /// Main navigation from the ACF options page `option_name`.
    pub async fn main_menu(&self, option_name: &str) -> Vec<MenuItem> {
        let Some(acf) = self.acf_options(option_name).await else {
            return Vec::new();
        };
        match serde_json::from_value::<AcfMenuOptions>(acf) {
            Ok(options) => options.main_menu_items.into_iter().map(Into::into).collect(),
            Err(err) => {
                log::error!("Error reading main menu from {option_name:?}: {err}");
                Vec::new()
            }
        }
    }

    pub async fn site_options(&self) -> Option<SiteOptions> {
        let url = self.wp_json("custom/v1/site-options");
        Self::or_log(self.get_json(&url, &[]).await.map(Some), "site options", None)
    }

    pub async fn media_by_id(&self, id: u64) -> Option<Media> {
        if id == 0 {
            return None;
        }
        let url = format!("{}/media/{id}", self.api_url);
        let media: Option<WpMedia> = Self::or_log(
            self.get_json(&url, &[]).await.map(Some),
            &format!("media ID {id}"),
            None,
        );
        media.map(Media::from)
    }
}
