use super::SectionIntro;
use crate::layout::{Background, stat_columns};
use crate::models::{ImageField, de};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatsKpis {
    #[serde(flatten)]
    pub intro: SectionIntro,
    #[serde(default, deserialize_with = "de::list")]
    pub stats: Vec<Stat>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Stat {
    #[serde(default, deserialize_with = "de::opt")]
    pub icon: Option<ImageField>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub label: Option<String>,
}

impl StatsKpis {
    pub fn background(&self) -> Background {
        Background::from_token(self.background_color.as_deref(), Background::Blue)
    }

    pub fn columns(&self) -> usize {
        stat_columns(self.stats.len())
    }
}
