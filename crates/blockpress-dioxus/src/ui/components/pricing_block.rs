use crate::ui::components::{SectionHeader, SiteLink};
use blockpress_engine::blocks::PricingPlans;
use blockpress_engine::blocks::kinds::{Plan, card_edges};
use dioxus::prelude::*;

fn card_class(plan: &Plan, index: usize, len: usize) -> String {
    let mut class = String::from("pricing-card");
    let (first, last) = card_edges(index, len);
    if first {
        class.push_str(" first");
    }
    if last {
        class.push_str(" last");
    }
    if plan.is_featured {
        class.push_str(" featured");
    }
    class
}

fn pick(condition: bool, yes: &'static str, no: &'static str) -> &'static str {
    if condition { yes } else { no }
}

#[component]
pub fn PricingBlock(block: PricingPlans) -> Element {
    let background = block.background().class();
    let len = block.plans.len();

    rsx! {
        section {
            class: "pricing {background}",
            SectionHeader { intro: block.intro.clone() }
            div {
                class: "pricing-grid",
                for (index, plan) in block.plans.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: card_class(plan, index, len),
                        if plan.is_featured {
                            span { class: "featured-badge", "Most Popular" }
                        }
                        if let Some(name) = &plan.plan_name {
                            h3 { "{name}" }
                        }
                        if let Some(description) = &plan.plan_description {
                            p { class: "plan-description", "{description}" }
                        }
                        div {
                            class: "plan-price",
                            if let Some(price) = &plan.price {
                                span { class: "price", "{price}" }
                            }
                            if let Some(suffix) = plan.billing_suffix() {
                                span { class: "billing-period", "/{suffix}" }
                            }
                        }
                        ul {
                            class: "plan-features",
                            for (feature_index, feature) in plan.features.iter().enumerate() {
                                li {
                                    key: "{feature_index}",
                                    class: pick(feature.feature_included, "included", "excluded"),
                                    span { class: "feature-mark", {pick(feature.feature_included, "✓", "✗")} }
                                    {feature.feature_text.clone().unwrap_or_default()}
                                }
                            }
                        }
                        SiteLink {
                            href: plan.button_link().to_string(),
                            class: pick(plan.is_featured, "button button-primary", "button button-secondary").to_string(),
                            {plan.button_text().to_string()}
                        }
                    }
                }
            }
        }
    }
}
