use crate::models::de;
use serde::Deserialize;

/// An ACF image field in any of its return formats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    /// "Image array" return format.
    Resolved(Image),
    /// "Image ID" return format, resolved through the media endpoint.
    Id(u64),
    /// "Image URL" return format.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub id: Option<u64>,
    pub url: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub height: Option<u32>,
}

/// Media library entry as returned by the media endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Media {
    pub id: u64,
    pub url: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: String,
}

#[derive(Deserialize)]
pub(crate) struct WpMedia {
    id: u64,
    #[serde(default)]
    source_url: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    alt_text: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    media_details: Option<WpMediaDetails>,
    #[serde(default)]
    title: crate::models::page::Rendered,
}

#[derive(Deserialize)]
struct WpMediaDetails {
    #[serde(default, deserialize_with = "de::opt_u32")]
    width: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    height: Option<u32>,
}

impl From<WpMedia> for Media {
    fn from(wire: WpMedia) -> Self {
        let (width, height) = wire
            .media_details
            .map(|d| (d.width, d.height))
            .unwrap_or_default();
        Self {
            id: wire.id,
            url: wire.source_url,
            alt: wire.alt_text.unwrap_or_default(),
            width,
            height,
            title: wire.title.rendered,
        }
    }
}

impl ImageField {
    /// URL to display, if the field carries one.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageField::Resolved(image) if !image.url.is_empty() => Some(&image.url),
            ImageField::Url(url) if !url.is_empty() => Some(url),
            _ => None,
        }
    }

    pub fn alt(&self) -> Option<&str> {
        match self {
            ImageField::Resolved(image) => image.alt.as_deref(),
            _ => None,
        }
    }

    /// Alt text, or `fallback` when the CMS left it empty.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt().unwrap_or(fallback)
    }

    pub fn dimensions(&self) -> (Option<u32>, Option<u32>) {
        match self {
            ImageField::Resolved(image) => (image.width, image.height),
            _ => (None, None),
        }
    }

    /// Media ID still waiting to be resolved.
    pub fn unresolved_id(&self) -> Option<u64> {
        match self {
            ImageField::Id(id) => Some(*id),
            _ => None,
        }
    }

    pub fn resolve(&mut self, media: &Media) {
        *self = ImageField::Resolved(Image {
            id: Some(media.id),
            url: media.url.clone(),
            alt: (!media.alt.is_empty()).then(|| media.alt.clone()),
            width: media.width,
            height: media.height,
        });
    }
}

/// Image URL of an optional field, if any.
pub fn image_url(field: Option<&ImageField>) -> Option<&str> {
    field.and_then(ImageField::url)
}
