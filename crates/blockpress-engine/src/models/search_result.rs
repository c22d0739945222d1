use crate::models::de;
use serde::Deserialize;

/// One hit from the CMS search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub subtype: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub excerpt: Option<String>,
}
