use crate::ui::Site;
use crate::ui::components::{BlockRenderer, HomeMissing, NotFound};
use blockpress_engine::seo::Metadata;
use blockpress_engine::{Composition, PageView, load_page, plain_text};
use dioxus::prelude::*;

/// Loads the page at `slug` and renders it. Keyed by slug so a new route remounts it.
#[component]
pub fn PageContent(slug: String) -> Element {
    let site = use_context::<Site>();
    let site_name = site.profile.site_name.clone();
    let composition = use_resource(move || {
        let site = site.clone();
        let slug = slug.clone();
        async move { load_page(site.source.as_ref(), &slug, &site.profile).await }
    });

    let current = composition.read().clone();
    match current {
        Some(composition) => rsx! {
            PageHead { metadata: composition.metadata.clone() }
            PageBody { composition, site_name }
        },
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}

#[component]
fn PageHead(metadata: Metadata) -> Element {
    let robots = format!(
        "{}, {}",
        if metadata.robots.index { "index" } else { "noindex" },
        if metadata.robots.follow { "follow" } else { "nofollow" }
    );

    rsx! {
        document::Title { "{metadata.title}" }
        document::Meta { name: "description", content: "{metadata.description}" }
        document::Meta { name: "robots", content: "{robots}" }
        if let Some(og) = &metadata.open_graph {
            document::Meta { property: "og:title", content: "{og.title}" }
            document::Meta { property: "og:type", content: "{og.kind}" }
            if let Some(image) = &og.image {
                document::Meta { property: "og:image", content: "{image.url}" }
            }
        }
    }
}

/// The composed view of one page.
#[component]
pub fn PageBody(composition: Composition, site_name: String) -> Element {
    match composition.view {
        PageView::Blocks(blocks) => rsx! {
            div {
                class: "page-blocks",
                for (index, block) in blocks.into_iter().enumerate() {
                    BlockRenderer { key: "{index}", block }
                }
            }
        },
        PageView::RawHtml { title, html } => rsx! {
            article {
                class: "page-html",
                h1 { {plain_text(&title)} }
                div { class: "prose", dangerous_inner_html: html.as_str() }
            }
        },
        PageView::HomeMissing { slug, admin_url } => rsx! {
            HomeMissing { site_name, slug, admin_url }
        },
        PageView::NotFound => rsx! {
            NotFound {}
        },
        PageView::Empty => rsx! {
            div {
                class: "page-empty",
                p { "This page has no content yet." }
            }
        },
    }
}
