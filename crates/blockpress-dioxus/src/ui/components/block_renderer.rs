use crate::ui::components::{
    FaqBlock, FeatureGridBlock, HeroBlock, LocationBlock, PricingBlock, RichTextBlock, StatsBlock,
    TeamBlock, TestimonialBlock, TimelineBlock,
};
use blockpress_engine::Block;
use dioxus::prelude::*;

/// Renders one decoded block with the component for its layout.
/// List-driven blocks with nothing in their list render nothing.
#[component]
pub fn BlockRenderer(block: Block) -> Element {
    if !block.is_renderable() {
        log::debug!("Skipping empty {} block", block.kind().tag());
        return rsx! {};
    }

    match block {
        Block::Hero(block) => rsx! { HeroBlock { block } },
        Block::RichText(block) => rsx! { RichTextBlock { block } },
        Block::FeatureGrid(block) => rsx! { FeatureGridBlock { block } },
        Block::FaqAccordion(block) => rsx! { FaqBlock { block } },
        Block::TestimonialSlider(block) => rsx! { TestimonialBlock { block } },
        Block::StatsKpis(block) => rsx! { StatsBlock { block } },
        Block::TimelineSteps(block) => rsx! { TimelineBlock { block } },
        Block::PricingPlans(block) => rsx! { PricingBlock { block } },
        Block::TeamProfiles(block) => rsx! { TeamBlock { block } },
        Block::LocationMap(block) => rsx! { LocationBlock { block } },
    }
}
