use crate::ui::components::SectionHeader;
use blockpress_engine::blocks::TimelineSteps;
use blockpress_engine::blocks::kinds::{TimelineLayout, has_connector, step_label};
use blockpress_engine::models::image_url;
use dioxus::prelude::*;

#[component]
pub fn TimelineBlock(block: TimelineSteps) -> Element {
    let background = block.background().class();
    let layout = match block.layout() {
        TimelineLayout::Vertical => "timeline vertical",
        TimelineLayout::Horizontal => "timeline horizontal",
    };
    let len = block.steps.len();

    rsx! {
        section {
            class: "timeline-section {background}",
            SectionHeader { intro: block.intro.clone() }
            ol {
                class: "{layout}",
                for (index, step) in block.steps.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: "timeline-step",
                        div {
                            class: "step-marker",
                            if let Some(icon) = image_url(step.step_icon.as_ref()) {
                                img { class: "step-icon", src: "{icon}", alt: "" }
                            } else {
                                span { class: "step-label", {step_label(index, step)} }
                            }
                        }
                        if has_connector(index, len) {
                            div { class: "step-connector" }
                        }
                        div {
                            class: "step-body",
                            if let Some(title) = &step.step_title {
                                h3 { "{title}" }
                            }
                            if let Some(description) = &step.step_description {
                                p { "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
