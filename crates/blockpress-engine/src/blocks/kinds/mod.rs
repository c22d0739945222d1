//! Typed field sets of the ten block layouts.

mod faq;
mod feature_grid;
mod hero;
mod location;
mod pricing;
mod rich_text;
mod stats;
mod team;
mod testimonial;
mod timeline;

use crate::models::de;
use serde::Deserialize;

pub use faq::{FaqAccordion, FaqItem, FaqLayout};
pub use feature_grid::{Feature, FeatureGrid};
pub use hero::{HeroBackground, HeroSection};
pub use location::{Location, LocationMap};
pub use pricing::{Plan, PlanFeature, PricingPlans, card_edges};
pub use rich_text::{MediaPosition, RichTextSection, SectionMedia};
pub use stats::{Stat, StatsKpis};
pub use team::{BIO_PREVIEW_CHARS, SocialLink, TeamMember, TeamProfiles};
pub use testimonial::{Testimonial, TestimonialSlider, star_states};
pub use timeline::{Step, TimelineLayout, TimelineSteps, has_connector, step_label};

/// Optional heading and description shown above most sections.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SectionIntro {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub section_heading: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub section_description: Option<String>,
}

impl SectionIntro {
    pub fn is_empty(&self) -> bool {
        self.section_heading.is_none() && self.section_description.is_none()
    }
}

/// Call-to-action button; only shown when both text and link are set.
pub(crate) fn button<'a>(
    text: &'a Option<String>,
    link: &'a Option<String>,
) -> Option<(&'a str, &'a str)> {
    Some((text.as_deref()?, link.as_deref()?))
}
