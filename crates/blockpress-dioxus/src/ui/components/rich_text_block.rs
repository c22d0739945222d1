use crate::ui::components::{SiteLink, VideoPlayer};
use blockpress_engine::blocks::RichTextSection;
use blockpress_engine::blocks::kinds::{MediaPosition, SectionMedia};
use dioxus::prelude::*;

#[component]
pub fn RichTextBlock(block: RichTextSection) -> Element {
    let text = rsx! {
        div {
            class: "rich-text-body",
            if let Some(heading) = &block.heading {
                h2 { "{heading}" }
            }
            if let Some(content) = &block.content {
                div { class: "prose", dangerous_inner_html: content.as_str() }
            }
            if let Some((text, link)) = block.button() {
                SiteLink { href: link.to_string(), class: "button button-primary".to_string(), "{text}" }
            }
        }
    };

    if !block.is_two_column() {
        return rsx! {
            section {
                class: "rich-text single-column",
                {text}
            }
        };
    }

    let title = block.heading.clone().unwrap_or_default();
    let media = match block.media() {
        SectionMedia::Image { url, alt } => rsx! {
            img { class: "rich-text-image", src: "{url}", alt: "{alt}" }
        },
        SectionMedia::Video(source) => rsx! {
            VideoPlayer { source, title }
        },
        SectionMedia::Missing => rsx! {},
    };

    rsx! {
        section {
            class: "rich-text two-column",
            if block.media_position() == MediaPosition::Left {
                div { class: "rich-text-media", {media} }
                {text}
            } else {
                {text}
                div { class: "rich-text-media", {media} }
            }
        }
    }
}
