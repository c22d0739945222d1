use crate::ui::components::SiteLink;
use blockpress_engine::SiteContext;
use blockpress_engine::interaction::Selection;
use dioxus::prelude::*;

fn item_class(has_children: bool, open: bool) -> &'static str {
    match (has_children, open) {
        (true, true) => "nav-item has-dropdown open",
        (true, false) => "nav-item has-dropdown",
        _ => "nav-item",
    }
}

/// Main menu with one level of dropdowns. At most one dropdown is open.
#[component]
pub fn Navigation() -> Element {
    let site_context = use_context::<Signal<SiteContext>>();
    let mut dropdown = use_signal(Selection::default);
    let open = dropdown();
    let items = site_context.read().navigation();

    rsx! {
        nav {
            class: "site-nav",
            ul {
                class: "nav-items",
                for (index, item) in items.into_iter().enumerate() {
                    li {
                        key: "{index}",
                        class: item_class(item.has_children(), open.is_selected(index)),
                        SiteLink { href: item.href().to_string(), "{item.label}" }
                        if item.has_children() {
                            button {
                                class: "nav-toggle",
                                aria_label: "Toggle {item.label} menu",
                                aria_expanded: open.is_selected(index).to_string(),
                                onclick: move |_| dropdown.write().toggle(index),
                                "▾"
                            }
                            if open.is_selected(index) {
                                ul {
                                    class: "dropdown",
                                    for (child_index, child) in item.children.iter().enumerate() {
                                        li {
                                            key: "{child_index}",
                                            onclick: move |_| dropdown.write().clear(),
                                            SiteLink { href: child.href().to_string(), "{child.label}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
