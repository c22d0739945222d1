use crate::ui::components::{SectionHeader, SiteLink};
use blockpress_engine::blocks::FaqAccordion;
use blockpress_engine::blocks::kinds::FaqLayout;
use dioxus::prelude::*;

#[component]
pub fn FaqBlock(block: FaqAccordion) -> Element {
    let mut accordion = use_signal(|| block.initial_state());
    let state = accordion();
    let background = block.background().class();
    let layout = match block.layout() {
        FaqLayout::Single => "faq-columns single",
        FaqLayout::Two => "faq-columns two",
    };

    rsx! {
        section {
            class: "faq {background}",
            SectionHeader { intro: block.intro.clone() }
            div {
                class: "{layout}",
                for (column_index, column) in block.columns().into_iter().enumerate() {
                    div {
                        key: "{column_index}",
                        class: "faq-column",
                        for (index, item) in column {
                            div {
                                key: "{index}",
                                class: item_class(state.is_open(index)),
                                button {
                                    class: "faq-question",
                                    aria_expanded: state.is_open(index).to_string(),
                                    onclick: move |_| accordion.write().toggle(index),
                                    span { {item.question.clone().unwrap_or_default()} }
                                    span { class: "faq-icon", if state.is_open(index) { "−" } else { "+" } }
                                }
                                if state.is_open(index) {
                                    if let Some(answer) = &item.answer {
                                        div { class: "faq-answer prose", dangerous_inner_html: answer.as_str() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "faq-contact",
                p { "Still have questions?" }
                SiteLink { href: "/contact".to_string(), class: "button button-primary".to_string(), "Contact Us" }
            }
        }
    }
}

fn item_class(open: bool) -> &'static str {
    if open { "faq-item open" } else { "faq-item" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_engine::blocks::kinds::FaqItem;
    use blockpress_engine::models::HtmlFragment;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn items(count: usize) -> Vec<FaqItem> {
        (1..=count)
            .map(|n| FaqItem {
                question: Some(format!("Question {n}")),
                answer: Some(HtmlFragment::new(format!("<p>Answer {n}</p>"))),
            })
            .collect()
    }

    fn render_faq(block: FaqAccordion) -> String {
        let mut dom = VirtualDom::new_with_props(FaqBlock, FaqBlockProps { block });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_first_item_open_by_default() {
        let html = render_faq(FaqAccordion {
            faq_items: items(3),
            first_open: true,
            ..Default::default()
        });

        assert!(html.contains("Answer 1"));
        assert!(!html.contains("Answer 2"));
        assert_eq!(html.matches("faq-item open").count(), 1);
    }

    #[test]
    fn test_all_closed_when_first_open_is_off() {
        let html = render_faq(FaqAccordion {
            faq_items: items(2),
            first_open: false,
            ..Default::default()
        });

        assert!(!html.contains("faq-answer"));
    }

    #[test]
    fn test_two_column_layout_splits_items() {
        let html = render_faq(FaqAccordion {
            faq_items: items(5),
            layout_style: Some("two".to_string()),
            ..Default::default()
        });

        assert!(html.contains("faq-columns two"));
        assert_eq!(html.matches("class=\"faq-column\"").count(), 2);
        assert!(html.contains("Contact Us"));
    }
}
