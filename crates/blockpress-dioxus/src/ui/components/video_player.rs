use blockpress_engine::media::{VideoSource, background_embed_url, embed_url};
use dioxus::prelude::*;

/// YouTube embed or native player for a direct file.
///
/// Background players autoplay muted on a loop without controls.
#[component]
pub fn VideoPlayer(source: VideoSource, title: String, #[props(default)] background: bool) -> Element {
    match source {
        VideoSource::YouTube(id) => {
            let (src, class) = if background {
                (background_embed_url(&id), "video-embed background")
            } else {
                (embed_url(&id), "video-embed")
            };
            rsx! {
                iframe {
                    class: "{class}",
                    src: "{src}",
                    title: "{title}",
                    "frameborder": "0",
                    "allow": "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    "allowfullscreen": "true",
                }
            }
        }
        VideoSource::File(url) if background => rsx! {
            video {
                class: "video-file background",
                src: "{url}",
                "autoplay": "true",
                "muted": "true",
                "loop": "true",
                "playsinline": "true",
            }
        },
        VideoSource::File(url) => rsx! {
            video {
                class: "video-file",
                src: "{url}",
                title: "{title}",
                "controls": "true",
            }
        },
    }
}
