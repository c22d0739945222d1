use crate::ui::{Route, Site};
use blockpress_engine::internal_path;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum LinkTarget {
    /// Routed inside the app.
    Internal(Route),
    /// Opened outside the app.
    External,
    /// `#` placeholders go nowhere.
    Inert,
}

fn link_target(href: &str, site_url: Option<&str>) -> LinkTarget {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return LinkTarget::Inert;
    }
    let path = match site_url {
        Some(site_url) if !site_url.is_empty() => internal_path(href, site_url),
        _ => href.to_string(),
    };
    if path.starts_with('/') && !path.starts_with("//") {
        LinkTarget::Internal(Route::parse(&path))
    } else {
        LinkTarget::External
    }
}

/// Anchor for CMS-supplied links. Links into the CMS site switch the
/// current route; everything else opens externally.
#[component]
pub fn SiteLink(href: String, #[props(default)] class: String, children: Element) -> Element {
    let router = try_use_context::<Signal<Route>>();
    let site_url = try_use_context::<Site>().map(|site| site.profile.site_url);

    match (link_target(&href, site_url.as_deref()), router) {
        (LinkTarget::Internal(route), Some(mut router)) => rsx! {
            a {
                class: "{class}",
                href: "{href}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    log::debug!("Navigating to {}", route.path());
                    router.set(route.clone());
                },
                {children}
            }
        },
        (LinkTarget::Inert, _) => rsx! {
            a {
                class: "{class}",
                href: "{href}",
                onclick: move |evt: MouseEvent| evt.prevent_default(),
                {children}
            }
        },
        _ => rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                {children}
            }
        },
    }
}
