use crate::ui::components::SectionHeader;
use blockpress_engine::blocks::StatsKpis;
use blockpress_engine::models::image_url;
use dioxus::prelude::*;

#[component]
pub fn StatsBlock(block: StatsKpis) -> Element {
    let background = block.background().class();
    let columns = block.columns();

    rsx! {
        section {
            class: "stats {background}",
            SectionHeader { intro: block.intro.clone() }
            div {
                class: "stats-grid",
                style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                for (index, stat) in block.stats.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "stat",
                        if let Some(icon) = image_url(stat.icon.as_ref()) {
                            img { class: "stat-icon", src: "{icon}", alt: "" }
                        }
                        if let Some(number) = &stat.number {
                            div { class: "stat-number", "{number}" }
                        }
                        if let Some(label) = &stat.label {
                            div { class: "stat-label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
