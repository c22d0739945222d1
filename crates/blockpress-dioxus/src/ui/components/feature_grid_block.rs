use crate::ui::components::SectionHeader;
use blockpress_engine::blocks::FeatureGrid;
use blockpress_engine::models::image_url;
use dioxus::prelude::*;

#[component]
pub fn FeatureGridBlock(block: FeatureGrid) -> Element {
    let background = block.background().class();
    let grid = block.columns().class();

    rsx! {
        section {
            class: "feature-grid {background}",
            SectionHeader { intro: block.intro.clone() }
            div {
                class: "{grid}",
                for (index, feature) in block.features.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "feature-card",
                        if let Some(icon) = image_url(feature.icon.as_ref()) {
                            img { class: "feature-icon", src: "{icon}", alt: feature.icon_alt() }
                        }
                        if let Some(title) = &feature.title {
                            h3 { "{title}" }
                        }
                        if let Some(description) = &feature.description {
                            p { "{description}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_engine::blocks::kinds::Feature;
    use blockpress_engine::models::ImageField;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn feature(title: &str) -> Feature {
        Feature {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn render_grid(block: FeatureGrid) -> String {
        let mut dom = VirtualDom::new_with_props(FeatureGridBlock, FeatureGridBlockProps { block });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_defaults_to_three_columns_on_white() {
        let html = render_grid(FeatureGrid {
            features: vec![feature("Fast"), feature("Secure")],
            ..Default::default()
        });

        assert!(html.contains("columns-3"));
        assert!(html.contains("bg-white"));
        assert_eq!(html.matches("feature-card").count(), 2);
    }

    #[test]
    fn test_icon_alt_falls_back_to_title() {
        let html = render_grid(FeatureGrid {
            columns: Some("4".to_string()),
            features: vec![Feature {
                icon: Some(ImageField::Url("https://cdn.example.com/bolt.svg".to_string())),
                ..feature("Fast")
            }],
            ..Default::default()
        });

        assert!(html.contains("columns-4"));
        assert!(html.contains("alt=\"Fast\""));
    }
}
