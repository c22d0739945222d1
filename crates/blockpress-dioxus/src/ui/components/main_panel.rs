use crate::ui::components::{PageContent, SearchPage};
use crate::ui::{Route, Site};
use dioxus::prelude::*;

/// Shows whatever the current route points at.
#[component]
pub fn MainPanel() -> Element {
    let site = use_context::<Site>();
    let route = use_context::<Signal<Route>>();

    match route() {
        Route::Search { query } => rsx! {
            SearchPage { key: "{query}", query }
        },
        other => {
            let slug = other
                .slug(&site.profile.home_slug)
                .unwrap_or_default()
                .to_string();
            rsx! {
                PageContent { key: "{slug}", slug }
            }
        }
    }
}
