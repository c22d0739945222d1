use crate::media::{MediaKind, VideoSource, video_source};
use crate::models::{ImageField, de};
use serde::Deserialize;

/// Full-height hero with an optional image or video background.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HeroSection {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub subheadline: Option<String>,
    #[serde(default, deserialize_with = "de::or_default")]
    pub background_type: MediaKind,
    #[serde(default, deserialize_with = "de::opt")]
    pub background_image: Option<ImageField>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_video: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub button_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeroBackground<'a> {
    Image { url: &'a str, alt: &'a str },
    Video(VideoSource),
    Plain,
}

impl HeroSection {
    pub fn background(&self) -> HeroBackground<'_> {
        match self.background_type {
            MediaKind::Image => match self.background_image.as_ref().and_then(ImageField::url) {
                Some(url) => HeroBackground::Image {
                    url,
                    alt: self.image_alt(),
                },
                None => HeroBackground::Plain,
            },
            MediaKind::Video => video_source(self.background_video.as_deref())
                .map(HeroBackground::Video)
                .unwrap_or(HeroBackground::Plain),
            MediaKind::None => HeroBackground::Plain,
        }
    }

    fn image_alt(&self) -> &str {
        self.background_image
            .as_ref()
            .and_then(ImageField::alt)
            .or(self.headline.as_deref())
            .unwrap_or("Hero background")
    }

    pub fn button(&self) -> Option<(&str, &str)> {
        super::button(&self.button_text, &self.button_link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn hero(value: serde_json::Value) -> HeroSection {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_image_background_alt_falls_back_to_headline() {
        let block = hero(json!({
            "headline": "Build faster",
            "background_type": "image",
            "background_image": { "url": "https://x.test/hero.jpg", "alt": "" },
        }));

        assert_eq!(
            block.background(),
            HeroBackground::Image {
                url: "https://x.test/hero.jpg",
                alt: "Build faster"
            }
        );
    }

    #[test]
    fn test_video_backgrounds() {
        let youtube = hero(json!({
            "background_type": "video",
            "background_video": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        }));
        let file = hero(json!({
            "background_type": "video",
            "background_video": "https://cdn.x.test/loop.mp4",
        }));
        let empty = hero(json!({ "background_type": "video", "background_video": "" }));

        assert_eq!(
            youtube.background(),
            HeroBackground::Video(VideoSource::YouTube("dQw4w9WgXcQ".to_string()))
        );
        assert_eq!(
            file.background(),
            HeroBackground::Video(VideoSource::File("https://cdn.x.test/loop.mp4".to_string()))
        );
        assert_eq!(empty.background(), HeroBackground::Plain);
    }

    #[test]
    fn test_image_type_without_image_is_plain() {
        let block = hero(json!({ "background_type": "image", "background_image": false }));
        assert_eq!(block.background(), HeroBackground::Plain);
    }

    #[test]
    fn test_button_needs_text_and_link() {
        let both = hero(json!({ "button_text": "Start", "button_link": "/start" }));
        let text_only = hero(json!({ "button_text": "Start" }));

        assert_eq!(both.button(), Some(("Start", "/start")));
        assert_eq!(text_only.button(), None);
    }
}
