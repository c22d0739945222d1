//! Flexible-content blocks: the layout tag, typed decoding and dispatch.

pub mod kinds;

use crate::models::ImageField;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use kinds::{
    FaqAccordion, FeatureGrid, HeroSection, LocationMap, PricingPlans, RichTextSection,
    SectionIntro, StatsKpis, TeamProfiles, TestimonialSlider, TimelineSteps,
};

/// Field holding the layout tag of a flexible-content row.
pub const LAYOUT_FIELD: &str = "acf_fc_layout";

/// A block exactly as the CMS delivered it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct RawBlock(Value);

impl RawBlock {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The layout tag, or an empty string when the row has none.
    pub fn layout(&self) -> &str {
        self.0
            .get(LAYOUT_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

/// The closed set of block types this front-end can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Hero,
    RichText,
    FeatureGrid,
    FaqAccordion,
    TestimonialSlider,
    StatsKpis,
    TimelineSteps,
    PricingPlans,
    TeamProfiles,
    LocationMap,
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Hero,
        BlockKind::RichText,
        BlockKind::FeatureGrid,
        BlockKind::FaqAccordion,
        BlockKind::TestimonialSlider,
        BlockKind::StatsKpis,
        BlockKind::TimelineSteps,
        BlockKind::PricingPlans,
        BlockKind::TeamProfiles,
        BlockKind::LocationMap,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Hero => "hero_section",
            BlockKind::RichText => "rich_text_section",
            BlockKind::FeatureGrid => "feature_grid",
            BlockKind::FaqAccordion => "faq_accordion",
            BlockKind::TestimonialSlider => "testimonial_slider",
            BlockKind::StatsKpis => "stats_kpis",
            BlockKind::TimelineSteps => "timeline_steps",
            BlockKind::PricingPlans => "pricing_plans",
            BlockKind::TeamProfiles => "team_profiles",
            BlockKind::LocationMap => "location_map",
        }
    }
}

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Unknown block type: {0:?}")]
    UnknownLayout(String),
    #[error("Malformed {layout} block: {source}")]
    Malformed {
        layout: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A decoded block, one variant per [`BlockKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Hero(HeroSection),
    RichText(RichTextSection),
    FeatureGrid(FeatureGrid),
    FaqAccordion(FaqAccordion),
    TestimonialSlider(TestimonialSlider),
    StatsKpis(StatsKpis),
    TimelineSteps(TimelineSteps),
    PricingPlans(PricingPlans),
    TeamProfiles(TeamProfiles),
    LocationMap(LocationMap),
}

fn fields<T: DeserializeOwned>(kind: BlockKind, raw: &RawBlock) -> Result<T, BlockError> {
    T::deserialize(raw.value()).map_err(|source| BlockError::Malformed {
        layout: kind.tag(),
        source,
    })
}

impl Block {
    pub fn decode(raw: &RawBlock) -> Result<Self, BlockError> {
        let kind = BlockKind::from_tag(raw.layout())
            .ok_or_else(|| BlockError::UnknownLayout(raw.layout().to_string()))?;

        Ok(match kind {
            BlockKind::Hero => Block::Hero(fields(kind, raw)?),
            BlockKind::RichText => Block::RichText(fields(kind, raw)?),
            BlockKind::FeatureGrid => Block::FeatureGrid(fields(kind, raw)?),
            BlockKind::FaqAccordion => Block::FaqAccordion(fields(kind, raw)?),
            BlockKind::TestimonialSlider => Block::TestimonialSlider(fields(kind, raw)?),
            BlockKind::StatsKpis => Block::StatsKpis(fields(kind, raw)?),
            BlockKind::TimelineSteps => Block::TimelineSteps(fields(kind, raw)?),
            BlockKind::PricingPlans => Block::PricingPlans(fields(kind, raw)?),
            BlockKind::TeamProfiles => Block::TeamProfiles(fields(kind, raw)?),
            BlockKind::LocationMap => Block::LocationMap(fields(kind, raw)?),
        })
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Hero(_) => BlockKind::Hero,
            Block::RichText(_) => BlockKind::RichText,
            Block::FeatureGrid(_) => BlockKind::FeatureGrid,
            Block::FaqAccordion(_) => BlockKind::FaqAccordion,
            Block::TestimonialSlider(_) => BlockKind::TestimonialSlider,
            Block::StatsKpis(_) => BlockKind::StatsKpis,
            Block::TimelineSteps(_) => BlockKind::TimelineSteps,
            Block::PricingPlans(_) => BlockKind::PricingPlans,
            Block::TeamProfiles(_) => BlockKind::TeamProfiles,
            Block::LocationMap(_) => BlockKind::LocationMap,
        }
    }

    /// False for list-driven blocks whose list is empty; those render nothing.
    pub fn is_renderable(&self) -> bool {
        match self {
            Block::Hero(_) | Block::RichText(_) => true,
            Block::FeatureGrid(b) => !b.features.is_empty(),
            Block::FaqAccordion(b) => !b.faq_items.is_empty(),
            Block::TestimonialSlider(b) => !b.testimonials.is_empty(),
            Block::StatsKpis(b) => !b.stats.is_empty(),
            Block::TimelineSteps(b) => !b.steps.is_empty(),
            Block::PricingPlans(b) => !b.plans.is_empty(),
            Block::TeamProfiles(b) => !b.team_members.is_empty(),
            Block::LocationMap(b) => !b.locations.is_empty(),
        }
    }

    /// Every image field in the block, for media-ID resolution.
    pub fn images_mut(&mut self) -> Vec<&mut ImageField> {
        let slots: Vec<&mut Option<ImageField>> = match self {
            Block::Hero(b) => vec![&mut b.background_image],
            Block::RichText(b) => vec![&mut b.media_image],
            Block::FeatureGrid(b) => b.features.iter_mut().map(|f| &mut f.icon).collect(),
            Block::TestimonialSlider(b) => b
                .testimonials
                .iter_mut()
                .map(|t| &mut t.client_photo)
                .collect(),
            Block::StatsKpis(b) => b.stats.iter_mut().map(|s| &mut s.icon).collect(),
            Block::TimelineSteps(b) => b.steps.iter_mut().map(|s| &mut s.step_icon).collect(),
            Block::TeamProfiles(b) => b.team_members.iter_mut().map(|m| &mut m.photo).collect(),
            Block::FaqAccordion(_) | Block::PricingPlans(_) | Block::LocationMap(_) => Vec::new(),
        };
        slots.into_iter().flatten().collect()
    }
}

/// Decode blocks in order, skipping (and logging) any that cannot be rendered.
pub fn dispatch(raw: &[RawBlock]) -> Vec<Block> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, block)| match Block::decode(block) {
            Ok(block) => Some(block),
            Err(err) => {
                log::warn!("Skipping block {index}: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::raw;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_every_tag_round_trips() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(BlockKind::from_tag("HERO_SECTION"), None);
        assert_eq!(BlockKind::from_tag(""), None);
    }

    #[test]
    fn test_layout_of_untagged_rows() {
        assert_eq!(raw(json!({ "headline": "x" })).layout(), "");
        assert_eq!(raw(json!("hero_section")).layout(), "");
        assert_eq!(raw(json!({ "acf_fc_layout": 3 })).layout(), "");
    }

    #[test]
    fn test_decode_unknown_layout() {
        let err = Block::decode(&raw(json!({ "acf_fc_layout": "carousel_gallery" }))).unwrap_err();
        assert!(matches!(err, BlockError::UnknownLayout(tag) if tag == "carousel_gallery"));
    }

    #[test]
    fn test_decode_malformed_known_layout() {
        let err = Block::decode(&raw(json!({
            "acf_fc_layout": "feature_grid",
            "features": { "not": "a list" }
        })))
        .unwrap_err();

        assert!(matches!(err, BlockError::Malformed { layout: "feature_grid", .. }));
    }

    #[test]
    fn test_dispatch_preserves_order_and_skips_failures() {
        let blocks = dispatch(&[
            raw(json!({ "acf_fc_layout": "hero_section", "headline": "Welcome" })),
            raw(json!({ "acf_fc_layout": "mystery_block" })),
            raw(json!({ "acf_fc_layout": "stats_kpis", "stats": "oops" })),
            raw(json!({ "acf_fc_layout": "rich_text_section", "heading": "About" })),
            raw(json!({ "acf_fc_layout": "faq_accordion", "faq_items": [] })),
        ]);

        let kinds: Vec<BlockKind> = blocks.iter().map(Block::kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Hero, BlockKind::RichText, BlockKind::FaqAccordion]
        );
    }

    #[test]
    fn test_dispatch_empty() {
        assert!(dispatch(&[]).is_empty());
    }

    #[test]
    fn test_is_renderable_guards_empty_lists() {
        let blocks = dispatch(&[
            raw(json!({ "acf_fc_layout": "hero_section" })),
            raw(json!({ "acf_fc_layout": "feature_grid", "features": false })),
            raw(json!({ "acf_fc_layout": "team_profiles", "team_members": [{ "name": "Ada" }] })),
            raw(json!({ "acf_fc_layout": "location_map" })),
        ]);

        let renderable: Vec<bool> = blocks.iter().map(Block::is_renderable).collect();
        assert_eq!(renderable, vec![true, false, true, false]);
    }

    #[test]
    fn test_images_mut_collects_present_images() {
        let mut blocks = dispatch(&[raw(json!({
            "acf_fc_layout": "feature_grid",
            "features": [
                { "title": "Fast", "icon": 11 },
                { "title": "Safe", "icon": false },
                { "title": "Clear", "icon": "https://x.test/i.svg" }
            ]
        }))]);

        let ids: Vec<Option<u64>> = blocks[0]
            .images_mut()
            .into_iter()
            .map(|image| image.unresolved_id())
            .collect();
        assert_eq!(ids, vec![Some(11), None]);
    }
}
