use dioxus::events::KeyboardEvent;
use dioxus::html::Key;
use dioxus::prelude::*;

/// Sidebar label for a slug: dashes become spaces, first letter capitalised.
fn page_label(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Every page on the site except home. Arrow keys move through the list
/// and open the page under the cursor.
#[component]
pub fn PageList(
    slugs: Vec<String>,
    current: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let mut focused_index = use_signal(|| 0usize);
    let mut has_focus = use_signal(|| false);

    // Keep keyboard position in step with the page shown
    {
        let slugs = slugs.clone();
        let current = current.clone();
        use_effect(move || {
            if let Some(index) = current
                .as_ref()
                .and_then(|current| slugs.iter().position(|slug| slug == current))
            {
                focused_index.set(index);
            }
        });
    }

    let handle_keydown = {
        let slugs = slugs.clone();
        move |evt: KeyboardEvent| {
            handle_list_navigation(
                evt,
                *has_focus.read(),
                &slugs,
                &mut focused_index,
                &on_select,
            );
        }
    };

    if slugs.is_empty() {
        return rsx! {
            p { class: "page-list-empty", "No pages yet" }
        };
    }

    rsx! {
        ul {
            class: "page-list",
            tabindex: "0",
            onkeydown: handle_keydown,
            onfocus: move |_| has_focus.set(true),
            onblur: move |_| has_focus.set(false),
            for (index, slug) in slugs.iter().enumerate() {
                PageListItem {
                    key: "{slug}",
                    slug: slug.clone(),
                    is_selected: current.as_deref() == Some(slug.as_str()),
                    is_focused: index == *focused_index.read() && *has_focus.read(),
                    on_select,
                }
            }
        }
    }
}

#[component]
fn PageListItem(
    slug: String,
    is_selected: bool,
    is_focused: bool,
    on_select: EventHandler<String>,
) -> Element {
    let classes = match (is_selected, is_focused) {
        (true, true) => "page-item selected focused",
        (true, false) => "page-item selected",
        (false, true) => "page-item focused",
        (false, false) => "page-item",
    };
    let label = page_label(&slug);

    rsx! {
        li {
            class: "{classes}",
            onclick: move |_| on_select.call(slug.clone()),
            "{label}"
        }
    }
}

fn handle_list_navigation(
    evt: KeyboardEvent,
    has_focus: bool,
    slugs: &[String],
    focused_index: &mut Signal<usize>,
    on_select: &EventHandler<String>,
) {
    if !has_focus || slugs.is_empty() {
        return;
    }

    let current_index = *focused_index.read();
    let new_index = match evt.key() {
        Key::ArrowDown => (current_index + 1).min(slugs.len() - 1),
        Key::ArrowUp => current_index.saturating_sub(1),
        Key::Enter => current_index.min(slugs.len() - 1),
        _ => return,
    };

    evt.prevent_default(); // Prevent scrolling
    focused_index.set(new_index);
    on_select.call(slugs[new_index].clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;

    #[component]
    fn Harness(slugs: Vec<String>, current: Option<String>) -> Element {
        rsx! {
            PageList { slugs, current, on_select: move |_: String| {} }
        }
    }

    fn render_list(slugs: &[&str], current: Option<&str>) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                slugs: slugs.iter().map(|slug| slug.to_string()).collect(),
                current: current.map(str::to_string),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label("about-us"), "About us");
        assert_eq!(page_label("faq"), "Faq");
        assert_eq!(page_label(""), "");
    }

    #[test]
    fn test_marks_current_page() {
        let html = render_list(&["about", "contact"], Some("contact"));

        assert_eq!(html.matches("page-item selected").count(), 1);
        assert!(html.contains("Contact"));
    }

    #[test]
    fn test_empty_list_message() {
        let html = render_list(&[], None);

        assert!(html.contains("No pages yet"));
    }
}
