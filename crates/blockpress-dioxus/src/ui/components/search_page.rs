use crate::ui::Site;
use crate::ui::components::SiteLink;
use blockpress_engine::{SearchResult, plain_text};
use dioxus::prelude::*;

/// Full search results for `query`, fetched immediately.
#[component]
pub fn SearchPage(query: String) -> Element {
    let site = use_context::<Site>();
    let term = query.trim().to_string();
    let results = use_resource(move || {
        let site = site.clone();
        let query = query.trim().to_string();
        async move {
            if query.is_empty() {
                Vec::new()
            } else {
                site.source.search(&query).await
            }
        }
    });

    if term.is_empty() {
        return rsx! {
            div {
                class: "search-page",
                h1 { "Search" }
                p { "Enter a search term to find pages and posts." }
            }
        };
    }

    let current = results.read().clone();
    match current {
        Some(results) => rsx! {
            SearchResults { query: term, results }
        },
        None => rsx! {
            div {
                class: "search-page",
                h1 { "Search Results for “{term}”" }
                p { class: "loading", "Searching..." }
            }
        },
    }
}

#[component]
pub fn SearchResults(query: String, results: Vec<SearchResult>) -> Element {
    let count = results.len();
    let noun = if count == 1 { "result" } else { "results" };

    rsx! {
        div {
            class: "search-page",
            h1 { "Search Results for “{query}”" }
            if results.is_empty() {
                div {
                    class: "no-results",
                    p { "No results found for “{query}”." }
                    p { "Try different keywords or browse the pages in the sidebar." }
                }
            } else {
                p { class: "result-count", "Found {count} {noun}" }
                ul {
                    class: "search-results",
                    for result in results {
                        li {
                            key: "{result.id}",
                            class: "search-result",
                            if let Some(kind) = &result.subtype {
                                span { class: "result-type", "{kind}" }
                            }
                            h2 {
                                SiteLink { href: result.url.clone(), {plain_text(&result.title)} }
                            }
                            if let Some(excerpt) = &result.excerpt {
                                p { class: "result-excerpt", {plain_text(excerpt)} }
                            }
                            p { class: "result-url", "{result.url}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn result(id: u64, title: &str) -> SearchResult {
        SearchResult {
            id,
            title: title.to_string(),
            url: format!("https://cms.example.com/{id}/"),
            subtype: Some("page".to_string()),
            excerpt: Some("<p>Short &amp; sweet</p>".to_string()),
        }
    }

    fn render_results(query: &str, results: Vec<SearchResult>) -> String {
        let mut dom = VirtualDom::new_with_props(
            SearchResults,
            SearchResultsProps {
                query: query.to_string(),
                results,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_results_list_with_count() {
        let html = render_results("design", vec![result(1, "Web Design"), result(2, "Brand Design")]);

        assert!(html.contains("Found 2 results"));
        assert!(html.contains("Web Design"));
        assert!(html.contains("Short &amp; sweet"));
        assert!(!html.contains("&lt;p&gt;"));
    }

    #[test]
    fn test_single_result_is_singular() {
        let html = render_results("design", vec![result(1, "Web Design")]);

        assert!(html.contains("Found 1 result"));
        assert!(!html.contains("Found 1 results"));
    }

    #[test]
    fn test_no_results_message() {
        let html = render_results("zzz", Vec::new());

        assert!(html.contains("No results found for “zzz”"));
    }
}
