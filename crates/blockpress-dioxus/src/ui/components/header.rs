use crate::ui::Site;
use crate::ui::components::{Navigation, SearchBox, SiteLink};
use blockpress_engine::SiteContext;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "site-header",
            Brand {}
            Navigation {}
            SearchBox {}
        }
    }
}

/// Site logo from the CMS options, or the site name when there is none.
#[component]
pub fn Brand() -> Element {
    let site = use_context::<Site>();
    let site_context = use_context::<Signal<SiteContext>>();

    let (name, logo) = {
        let context = site_context.read();
        let name = context.site_name(&site.profile.site_name).to_string();
        let logo = context.logo().and_then(|logo| {
            logo.url()
                .map(|url| (url.to_string(), logo.alt_or(&name).to_string()))
        });
        (name, logo)
    };

    rsx! {
        SiteLink {
            href: "/".to_string(),
            class: "brand".to_string(),
            if let Some((url, alt)) = logo {
                img { class: "logo", src: "{url}", alt: "{alt}" }
            } else {
                span { class: "site-name", "{name}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{WithSite, render};
    use blockpress_engine::{ImageField, SiteOptions};

    #[test]
    fn test_brand_falls_back_to_site_name() {
        let html = render(|| {
            rsx! {
                WithSite {
                    site_context: SiteContext::default(),
                    Brand {}
                }
            }
        });

        assert!(html.contains("site-name"));
        assert!(html.contains("Acme"));
    }

    #[test]
    fn test_brand_prefers_logo() {
        let html = render(|| {
            rsx! {
                WithSite {
                    site_context: SiteContext {
                        options: Some(SiteOptions {
                            logo: Some(ImageField::Url("https://cdn.example.com/logo.svg".to_string())),
                            site_name: Some("Acme Ltd".to_string()),
                        }),
                        menu: Vec::new(),
                    },
                    Brand {}
                }
            }
        });

        assert!(html.contains("src=\"https://cdn.example.com/logo.svg\""));
        assert!(html.contains("alt=\"Acme Ltd\""));
        assert!(!html.contains("site-name"));
    }
}
