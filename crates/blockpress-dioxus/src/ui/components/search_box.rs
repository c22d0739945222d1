use crate::ui::components::SiteLink;
use crate::ui::{Route, Site};
use blockpress_engine::{QueryGate, SearchResult, Submission, debounced_search, plain_text};
use dioxus::prelude::*;

/// Header search with debounced live results.
///
/// Each keystroke goes through a [`QueryGate`]; only the latest input that
/// stays idle for the debounce period reaches the CMS.
#[component]
pub fn SearchBox() -> Element {
    let site = use_context::<Site>();
    let mut route = use_context::<Signal<Route>>();
    let gate = use_hook(|| QueryGate::new(site.search));
    let mut input = use_signal(String::new);
    let mut results = use_signal(Vec::<SearchResult>::new);
    let mut searching = use_signal(|| false);
    let mut open = use_signal(|| false);

    let source = site.source.clone();
    let on_input = move |evt: FormEvent| {
        let value = evt.value();
        input.set(value.clone());
        match gate.submit(&value) {
            Submission::TooShort => {
                searching.set(false);
                open.set(false);
                results.set(Vec::new());
            }
            Submission::Pending(pending) => {
                searching.set(true);
                let source = source.clone();
                spawn(async move {
                    if let Some(found) = debounced_search(source.as_ref(), pending).await {
                        log::debug!("Search returned {} results", found.len());
                        results.set(found);
                        searching.set(false);
                        open.set(true);
                    }
                });
            }
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let query = input.read().trim().to_string();
        if !query.is_empty() {
            open.set(false);
            route.set(Route::Search { query });
        }
    };

    let query = input();
    let found = results();

    rsx! {
        div {
            class: "search-box",
            form {
                role: "search",
                onsubmit: on_submit,
                input {
                    r#type: "search",
                    placeholder: "Search...",
                    aria_label: "Search",
                    value: "{query}",
                    oninput: on_input,
                }
                if searching() {
                    span { class: "search-spinner", "Searching..." }
                }
            }
            if open() {
                div {
                    class: "search-dropdown",
                    onclick: move |_| open.set(false),
                    if found.is_empty() {
                        p { class: "no-results", "No results found" }
                    } else {
                        ul {
                            for result in found {
                                li {
                                    key: "{result.id}",
                                    SiteLink {
                                        href: result.url.clone(),
                                        span { class: "result-title", {plain_text(&result.title)} }
                                        if let Some(kind) = &result.subtype {
                                            span { class: "result-type", "{kind}" }
                                        }
                                    }
                                }
                            }
                        }
                        SiteLink {
                            href: Route::Search { query: query.clone() }.path(),
                            class: "view-all".to_string(),
                            "View all results"
                        }
                    }
                }
            }
        }
    }
}
