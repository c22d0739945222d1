use blockpress_engine::blocks::SectionIntro;
use dioxus::prelude::*;

/// Optional heading and description above a section's content.
#[component]
pub fn SectionHeader(intro: SectionIntro) -> Element {
    if intro.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "section-header",
            if let Some(heading) = &intro.section_heading {
                h2 { class: "section-heading", "{heading}" }
            }
            if let Some(description) = &intro.section_description {
                p { class: "section-description", "{description}" }
            }
        }
    }
}
