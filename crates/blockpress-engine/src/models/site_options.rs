use crate::models::de;
use crate::models::image::ImageField;
use serde::Deserialize;

/// Site-wide options exposed by the custom site-options endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SiteOptions {
    #[serde(default, deserialize_with = "de::opt")]
    pub logo: Option<ImageField>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub site_name: Option<String>,
}
