use dioxus::prelude::*;

#[component]
pub fn Footer(site_name: String, tagline: String) -> Element {
    rsx! {
        footer {
            class: "site-footer",
            p { class: "footer-name", "© {site_name}" }
            if !tagline.is_empty() {
                p { class: "footer-tagline", "{tagline}" }
            }
        }
    }
}
