use crate::models::de;
use serde::Deserialize;

/// The `yoast_head_json` payload attached to pages by the Yoast SEO plugin.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct YoastHead {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub canonical: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub og_title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub og_description: Option<String>,
    #[serde(default, deserialize_with = "de::list")]
    pub og_image: Vec<OgImage>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub og_type: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub og_site_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub og_url: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub twitter_card: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub twitter_title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub twitter_description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub twitter_image: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    pub robots: Option<YoastRobots>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OgImage {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct YoastRobots {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub index: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub follow: Option<String>,
}
