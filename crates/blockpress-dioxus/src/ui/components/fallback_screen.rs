//! Views shown instead of page content.

use crate::ui::components::SiteLink;
use dioxus::prelude::*;

#[component]
pub fn NotFound() -> Element {
    rsx! {
        div {
            class: "fallback-screen",
            h1 { "404" }
            h2 { "Page Not Found" }
            p { "The page you're looking for doesn't exist or has been moved." }
            SiteLink { href: "/".to_string(), class: "button".to_string(), "Go Home" }
        }
    }
}

/// The home page is missing from the CMS. Tells the operator how to add it.
#[component]
pub fn HomeMissing(site_name: String, slug: String, admin_url: String) -> Element {
    rsx! {
        div {
            class: "fallback-screen",
            h1 { "Welcome to {site_name}" }
            p { "No home page has been published yet." }
            p {
                "Create a page with the slug "
                code { "{slug}" }
                " in the WordPress admin to replace this message."
            }
            SiteLink { href: admin_url.clone(), class: "button".to_string(), "Open WordPress admin" }
        }
    }
}
