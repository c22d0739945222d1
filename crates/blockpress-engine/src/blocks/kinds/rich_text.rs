use crate::media::{MediaKind, VideoSource, video_source};
use crate::models::{HtmlFragment, ImageField, de};
use serde::Deserialize;

/// Heading, HTML body and optional media beside it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RichTextSection {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    pub content: Option<HtmlFragment>,
    #[serde(default, deserialize_with = "de::or_default")]
    pub media_type: MediaKind,
    #[serde(default, deserialize_with = "de::opt")]
    pub media_image: Option<ImageField>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub media_video: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub media_position: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub button_link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPosition {
    Left,
    Right,
}

/// What the media column shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionMedia<'a> {
    Image { url: &'a str, alt: &'a str },
    Video(VideoSource),
    Missing,
}

impl RichTextSection {
    /// Text-only sections are centred; anything else uses two columns.
    pub fn is_two_column(&self) -> bool {
        self.media_type != MediaKind::None
    }

    pub fn media_position(&self) -> MediaPosition {
        match self.media_position.as_deref() {
            Some("left") => MediaPosition::Left,
            _ => MediaPosition::Right,
        }
    }

    pub fn media(&self) -> SectionMedia<'_> {
        match self.media_type {
            MediaKind::Image => match self.media_image.as_ref().and_then(ImageField::url) {
                Some(url) => SectionMedia::Image {
                    url,
                    alt: self
                        .media_image
                        .as_ref()
                        .and_then(ImageField::alt)
                        .or(self.heading.as_deref())
                        .unwrap_or("Section image"),
                },
                None => SectionMedia::Missing,
            },
            MediaKind::Video => video_source(self.media_video.as_deref())
                .map(SectionMedia::Video)
                .unwrap_or(SectionMedia::Missing),
            MediaKind::None => SectionMedia::Missing,
        }
    }

    pub fn button(&self) -> Option<(&str, &str)> {
        super::button(&self.button_text, &self.button_link)
    }
}
