use crate::ui::components::{Footer, Header, MainPanel, PageList};
use crate::ui::route::Route;
use blockpress_config::Config;
use blockpress_engine::{
    CmsClient, ContentSource, SearchSettings, SiteContext, SiteProfile, site_slugs,
};
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::Duration;

const SITE_CSS: &str = include_str!("../assets/site.css");

/// The CMS handle and site-wide settings, shared through context.
#[derive(Clone)]
pub struct Site {
    pub source: Arc<dyn ContentSource>,
    pub profile: SiteProfile,
    pub search: SearchSettings,
}

impl Site {
    pub fn from_config(config: &Config) -> Self {
        let client = CmsClient::new(config.site_url())
            .with_api_url(config.api_base())
            .with_page_size(config.pages_per_request)
            .with_search_limit(config.search.max_results);

        Self {
            source: Arc::new(client),
            profile: SiteProfile {
                site_name: config.site_name.clone(),
                tagline: config.tagline.clone(),
                site_url: config.site_url().to_string(),
                home_slug: config.home_slug.clone(),
            },
            search: SearchSettings {
                min_query_len: config.search.min_query_len,
                debounce: Duration::from_millis(config.search.debounce_ms),
            },
        }
    }
}

#[component]
pub fn App(config: Config) -> Element {
    let site = use_context_provider(|| Site::from_config(&config));
    let mut route = use_context_provider(|| Signal::new(Route::Home));
    let mut site_context = use_context_provider(|| Signal::new(SiteContext::default()));

    // Options and menu are fetched once and shared by the header and footer.
    let menu_option = config.main_menu_option.clone();
    let loader_site = site.clone();
    use_future(move || {
        let site = loader_site.clone();
        let menu_option = menu_option.clone();
        async move {
            let loaded = SiteContext::load(site.source.as_ref(), &menu_option).await;
            site_context.set(loaded);
        }
    });

    let pages_site = site.clone();
    let pages = use_resource(move || {
        let site = pages_site.clone();
        async move { site_slugs(site.source.as_ref(), &site.profile.home_slug).await }
    });

    let current_slug = route
        .read()
        .slug(&site.profile.home_slug)
        .map(str::to_string);
    let site_name = site_context
        .read()
        .site_name(&site.profile.site_name)
        .to_string();

    rsx! {
        style { {SITE_CSS} }
        div {
            class: "app-container",
            Header {}
            div {
                class: "app-body",
                aside {
                    class: "sidebar",
                    h2 { "Pages" }
                    if let Some(slugs) = pages.read().as_ref() {
                        PageList {
                            slugs: slugs.clone(),
                            current: current_slug,
                            on_select: move |slug: String| {
                                route.set(Route::Page { slug });
                            }
                        }
                    } else {
                        p { class: "loading", "Loading pages..." }
                    }
                }
                main {
                    class: "main-content",
                    MainPanel {}
                }
            }
            Footer {
                site_name,
                tagline: site.profile.tagline.clone(),
            }
        }
    }
}
