use super::SectionIntro;
use crate::layout::Background;
use crate::models::{ImageField, de};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TimelineSteps {
    #[serde(flatten)]
    pub intro: SectionIntro,
    #[serde(default, deserialize_with = "de::list")]
    pub steps: Vec<Step>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub layout_style: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Step {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub step_number: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub step_title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub step_description: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    pub step_icon: Option<ImageField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineLayout {
    Vertical,
    Horizontal,
}

impl TimelineSteps {
    pub fn layout(&self) -> TimelineLayout {
        match self.layout_style.as_deref() {
            Some("horizontal") => TimelineLayout::Horizontal,
            _ => TimelineLayout::Vertical,
        }
    }

    pub fn background(&self) -> Background {
        Background::from_token(self.background_color.as_deref(), Background::White)
    }
}

/// Label of step `index`: the authored number, else the 1-based position padded to two digits.
pub fn step_label(index: usize, step: &Step) -> String {
    match step.step_number.as_deref() {
        Some(number) => number.to_string(),
        None => format!("{:02}", index + 1),
    }
}

/// Connectors join consecutive steps, so the last one has none.
pub fn has_connector(index: usize, len: usize) -> bool {
    index + 1 < len
}
