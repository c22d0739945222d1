use super::SectionIntro;
use crate::layout::{Background, Columns};
use crate::models::{ImageField, de};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FeatureGrid {
    #[serde(flatten)]
    pub intro: SectionIntro,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub columns: Option<String>,
    #[serde(default, deserialize_with = "de::list")]
    pub features: Vec<Feature>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "de::opt")]
    pub icon: Option<ImageField>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub description: Option<String>,
}

impl FeatureGrid {
    pub fn columns(&self) -> Columns {
        Columns::from_token(self.columns.as_deref())
    }

    pub fn background(&self) -> Background {
        Background::from_token(self.background_color.as_deref(), Background::White)
    }
}

impl Feature {
    pub fn icon_alt(&self) -> &str {
        self.icon
            .as_ref()
            .and_then(ImageField::alt)
            .or(self.title.as_deref())
            .unwrap_or("Feature icon")
    }
}
