use super::SectionIntro;
use crate::layout::Background;
use crate::models::de;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PricingPlans {
    #[serde(flatten)]
    pub intro: SectionIntro,
    #[serde(default, deserialize_with = "de::list")]
    pub plans: Vec<Plan>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Plan {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub plan_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub plan_description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub billing_period: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub button_link: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "de::list")]
    pub features: Vec<PlanFeature>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PlanFeature {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub feature_text: Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub feature_included: bool,
}

impl PricingPlans {
    pub fn background(&self) -> Background {
        Background::from_token(self.background_color.as_deref(), Background::Gray)
    }
}

impl Plan {
    /// Billing suffix shown after the price: "per month" becomes "month".
    pub fn billing_suffix(&self) -> Option<&str> {
        let period = self.billing_period.as_deref()?;
        Some(period.strip_prefix("per ").unwrap_or(period))
    }

    pub fn button_text(&self) -> &str {
        self.button_text.as_deref().unwrap_or("Get Started")
    }

    pub fn button_link(&self) -> &str {
        self.button_link.as_deref().unwrap_or("#")
    }
}

/// Whether card `index` of `len` gets the rounded left and right edges.
pub fn card_edges(index: usize, len: usize) -> (bool, bool) {
    (index == 0, index + 1 == len)
}
