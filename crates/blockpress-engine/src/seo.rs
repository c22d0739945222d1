//! Page metadata derived from Yoast SEO data, with plain fallbacks.

use crate::models::{Page, YoastHead};

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
    pub robots: Robots,
    pub canonical: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub image: Option<SocialImage>,
    pub kind: String,
    pub site_name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SocialImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TwitterCard {
    pub card: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
        }
    }
}

fn first<'a>(candidates: impl IntoIterator<Item = Option<&'a String>>) -> Option<&'a str> {
    candidates.into_iter().flatten().map(String::as_str).next()
}

/// Metadata for a page that exists.
pub fn page_metadata(page: &Page, site_name: &str) -> Metadata {
    match &page.seo {
        Some(yoast) => from_yoast(yoast, page, site_name),
        None => Metadata {
            title: format!("{} | {site_name}", page.title),
            description: page
                .excerpt
                .as_ref()
                .map(|excerpt| excerpt.to_plain_text())
                .unwrap_or_default(),
            ..Default::default()
        },
    }
}

/// Metadata for the home page: the bare page title, and the site tagline
/// when there is no excerpt to describe it.
pub fn home_metadata(page: &Page, site_name: &str, tagline: &str) -> Metadata {
    let title = if page.title.trim().is_empty() {
        format!("Home | {site_name}")
    } else {
        page.title.clone()
    };

    match &page.seo {
        Some(yoast) => Metadata {
            title: yoast.title.clone().unwrap_or(title),
            ..from_yoast(yoast, page, site_name)
        },
        None => {
            let excerpt = page
                .excerpt
                .as_ref()
                .map(|excerpt| excerpt.to_plain_text())
                .unwrap_or_default();
            Metadata {
                title,
                description: if excerpt.is_empty() {
                    tagline.to_string()
                } else {
                    excerpt
                },
                ..Default::default()
            }
        }
    }
}

fn from_yoast(yoast: &YoastHead, page: &Page, site_name: &str) -> Metadata {
    let fallback_title = format!("{} | {site_name}", page.title);
    let image = yoast.og_image.first().map(|image| SocialImage {
        url: image.url.clone().unwrap_or_default(),
        width: image.width.unwrap_or(OG_IMAGE_WIDTH),
        height: image.height.unwrap_or(OG_IMAGE_HEIGHT),
        alt: image.alt.clone().unwrap_or_default(),
    });
    let robots = yoast.robots.as_ref();

    Metadata {
        title: yoast.title.clone().unwrap_or(fallback_title),
        description: first([yoast.description.as_ref(), yoast.og_description.as_ref()])
            .unwrap_or_default()
            .to_string(),
        open_graph: Some(OpenGraph {
            title: first([yoast.og_title.as_ref(), yoast.title.as_ref()])
                .unwrap_or(page.title.as_str())
                .to_string(),
            description: first([yoast.og_description.as_ref(), yoast.description.as_ref()])
                .unwrap_or_default()
                .to_string(),
            image,
            kind: yoast.og_type.clone().unwrap_or_else(|| "website".to_string()),
            site_name: yoast
                .og_site_name
                .clone()
                .unwrap_or_else(|| site_name.to_string()),
            url: yoast.og_url.clone().or_else(|| page.link.clone()),
        }),
        twitter: Some(TwitterCard {
            card: yoast
                .twitter_card
                .clone()
                .unwrap_or_else(|| "summary_large_image".to_string()),
            title: first([
                yoast.twitter_title.as_ref(),
                yoast.og_title.as_ref(),
                yoast.title.as_ref(),
            ])
            .map(str::to_string),
            description: first([
                yoast.twitter_description.as_ref(),
                yoast.og_description.as_ref(),
                yoast.description.as_ref(),
            ])
            .map(str::to_string),
            image: yoast.twitter_image.clone(),
        }),
        robots: Robots {
            index: robots.and_then(|r| r.index.as_deref()) != Some("noindex"),
            follow: robots.and_then(|r| r.follow.as_deref()) != Some("nofollow"),
        },
        canonical: yoast.canonical.clone().or_else(|| page.link.clone()),
    }
}

/// Metadata for a slug with no page behind it.
pub fn not_found_metadata() -> Metadata {
    Metadata {
        title: "Page Not Found".to_string(),
        ..Default::default()
    }
}

/// Metadata when the home page itself is missing.
pub fn home_missing_metadata(site_name: &str, tagline: &str) -> Metadata {
    Metadata {
        title: format!("Home | {site_name}"),
        description: tagline.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HtmlFragment;
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page(seo: Option<serde_json::Value>) -> Page {
        Page {
            id: 5,
            slug: "pricing".to_string(),
            title: "Pricing".to_string(),
            excerpt: Some(HtmlFragment::new("<p>Plans &amp; prices</p>\n")),
            link: Some("https://cms.example.com/pricing/".to_string()),
            seo: seo.map(|value| serde_json::from_value(value).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_fallback_without_yoast() {
        let metadata = page_metadata(&page(None), "Acme");

        assert_eq!(metadata.title, "Pricing | Acme");
        assert_eq!(metadata.description, "Plans & prices");
        assert_eq!(metadata.open_graph, None);
        assert_eq!(metadata.robots, Robots::default());
    }

    #[test]
    fn test_yoast_defaults() {
        let metadata = page_metadata(
            &page(Some(json!({
                "description": "Simple pricing",
                "og_image": [{ "url": "https://x.test/og.png" }],
            }))),
            "Acme",
        );

        assert_debug_snapshot!(metadata, @r#"
        Metadata {
            title: "Pricing | Acme",
            description: "Simple pricing",
            open_graph: Some(
                OpenGraph {
                    title: "Pricing",
                    description: "Simple pricing",
                    image: Some(
                        SocialImage {
                            url: "https://x.test/og.png",
                            width: 1200,
                            height: 630,
                            alt: "",
                        },
                    ),
                    kind: "website",
                    site_name: "Acme",
                    url: Some(
                        "https://cms.example.com/pricing/",
                    ),
                },
            ),
            twitter: Some(
                TwitterCard {
                    card: "summary_large_image",
                    title: None,
                    description: Some(
                        "Simple pricing",
                    ),
                    image: None,
                },
            ),
            robots: Robots {
                index: true,
                follow: true,
            },
            canonical: Some(
                "https://cms.example.com/pricing/",
            ),
        }
        "#);
    }

    #[test]
    fn test_yoast_robots_directives() {
        let metadata = page_metadata(
            &page(Some(json!({
                "title": "Pricing - Acme",
                "canonical": "https://acme.test/pricing",
                "robots": { "index": "noindex", "follow": "nofollow" },
            }))),
            "Acme",
        );

        assert_eq!(metadata.title, "Pricing - Acme");
        assert_eq!(metadata.canonical.as_deref(), Some("https://acme.test/pricing"));
        assert_eq!(
            metadata.robots,
            Robots {
                index: false,
                follow: false
            }
        );
    }

    #[test]
    fn test_home_page_uses_bare_title_and_tagline() {
        let home = Page {
            slug: "home".to_string(),
            title: "Welcome".to_string(),
            excerpt: Some(HtmlFragment::new("<p></p>\n")),
            ..Default::default()
        };

        let metadata = home_metadata(&home, "Acme", "Websites that ship");

        assert_eq!(metadata.title, "Welcome");
        assert_eq!(metadata.description, "Websites that ship");

        let described = Page {
            excerpt: Some(HtmlFragment::new("<p>We build sites</p>")),
            ..home
        };
        assert_eq!(
            home_metadata(&described, "Acme", "Websites that ship").description,
            "We build sites"
        );
    }

    #[test]
    fn test_home_page_yoast_title_falls_back_to_page_title() {
        let home = Page {
            title: "Welcome".to_string(),
            ..page(Some(json!({ "description": "Simple pricing" })))
        };

        let metadata = home_metadata(&home, "Acme", "Websites that ship");

        assert_eq!(metadata.title, "Welcome");
        assert_eq!(metadata.description, "Simple pricing");
        assert!(metadata.open_graph.is_some());
    }

    #[test]
    fn test_missing_page_metadata() {
        assert_eq!(not_found_metadata().title, "Page Not Found");

        let home = home_missing_metadata("Acme", "Websites that ship");
        assert_eq!(home.title, "Home | Acme");
        assert_eq!(home.description, "Websites that ship");
    }
}
