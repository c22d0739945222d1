use crate::ui::components::{SiteLink, VideoPlayer};
use blockpress_engine::blocks::HeroSection;
use blockpress_engine::blocks::kinds::HeroBackground;
use dioxus::prelude::*;

#[component]
pub fn HeroBlock(block: HeroSection) -> Element {
    let background = block.background();
    let has_media = background != HeroBackground::Plain;
    let class = if has_media { "hero has-media" } else { "hero" };

    rsx! {
        section {
            class: "{class}",
            {match background {
                HeroBackground::Image { url, alt } => rsx! {
                    img { class: "hero-background", src: "{url}", alt: "{alt}" }
                },
                HeroBackground::Video(source) => rsx! {
                    div {
                        class: "hero-background",
                        VideoPlayer {
                            source,
                            title: block.headline.clone().unwrap_or_default(),
                            background: true,
                        }
                    }
                },
                HeroBackground::Plain => rsx! {},
            }}
            if has_media {
                div { class: "hero-overlay" }
            }
            div {
                class: "hero-content",
                if let Some(headline) = &block.headline {
                    h1 { class: "hero-headline", "{headline}" }
                }
                if let Some(subheadline) = &block.subheadline {
                    p { class: "hero-subheadline", "{subheadline}" }
                }
                if let Some((text, link)) = block.button() {
                    SiteLink { href: link.to_string(), class: "button button-primary".to_string(), "{text}" }
                }
            }
        }
    }
}
