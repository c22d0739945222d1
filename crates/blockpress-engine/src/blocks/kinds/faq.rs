use super::SectionIntro;
use crate::interaction::Accordion;
use crate::layout::{Background, split_columns};
use crate::models::{HtmlFragment, de};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FaqAccordion {
    #[serde(flatten)]
    pub intro: SectionIntro,
    #[serde(default, deserialize_with = "de::list")]
    pub faq_items: Vec<FaqItem>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub layout_style: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_color: Option<String>,
    #[serde(default = "de::yes", deserialize_with = "de::flag")]
    pub first_open: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FaqItem {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    pub answer: Option<HtmlFragment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqLayout {
    Single,
    Two,
}

impl FaqAccordion {
    /// Single column unless a layout other than `single` is chosen.
    pub fn layout(&self) -> FaqLayout {
        match self.layout_style.as_deref() {
            None | Some("single") => FaqLayout::Single,
            Some(_) => FaqLayout::Two,
        }
    }

    pub fn background(&self) -> Background {
        Background::from_token(self.background_color.as_deref(), Background::White)
    }

    pub fn initial_state(&self) -> Accordion {
        Accordion::new(self.first_open)
    }

    /// Items grouped into display columns, each item paired with its
    /// index in the full list so accordion state stays global.
    pub fn columns(&self) -> Vec<Vec<(usize, &FaqItem)>> {
        match self.layout() {
            FaqLayout::Single => vec![indexed(&self.faq_items, 0)],
            FaqLayout::Two => {
                let (left, right, offset) = split_columns(&self.faq_items);
                vec![indexed(left, 0), indexed(right, offset)]
            }
        }
    }
}

fn indexed(items: &[FaqItem], offset: usize) -> Vec<(usize, &FaqItem)> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (i + offset, item))
        .collect()
}
