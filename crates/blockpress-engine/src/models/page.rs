use crate::blocks::RawBlock;
use crate::models::de;
use crate::models::html::HtmlFragment;
use crate::models::yoast::YoastHead;
use serde::Deserialize;

/// WordPress `{ "rendered": ".." }` wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// A CMS page as used for composition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "WpPage")]
pub struct Page {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<HtmlFragment>,
    /// Raw HTML body, rendered when the page has no blocks.
    pub content: Option<HtmlFragment>,
    pub link: Option<String>,
    /// Flexible-content blocks in authored order.
    pub blocks: Vec<RawBlock>,
    pub seo: Option<YoastHead>,
}

/// The fixed projection returned by the page listing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "WpPage")]
pub struct PageSummary {
    pub id: u64,
    pub slug: String,
    pub title: String,
}

#[derive(Deserialize)]
struct WpPage {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    title: Rendered,
    #[serde(default, deserialize_with = "de::opt")]
    excerpt: Option<Rendered>,
    #[serde(default, deserialize_with = "de::opt")]
    content: Option<Rendered>,
    #[serde(default, deserialize_with = "de::opt_text")]
    link: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    acf: Option<WpPageFields>,
    #[serde(default, deserialize_with = "de::opt")]
    yoast_head_json: Option<YoastHead>,
}

#[derive(Deserialize)]
struct WpPageFields {
    #[serde(default, deserialize_with = "de::list")]
    content_blocks: Vec<RawBlock>,
}

fn fragment(rendered: Option<Rendered>) -> Option<HtmlFragment> {
    rendered
        .map(|r| HtmlFragment::new(r.rendered))
        .filter(|html| !html.is_blank())
}

impl From<WpPage> for Page {
    fn from(wire: WpPage) -> Self {
        Self {
            id: wire.id,
            slug: wire.slug,
            title: wire.title.rendered,
            excerpt: fragment(wire.excerpt),
            content: fragment(wire.content),
            link: wire.link,
            blocks: wire.acf.map(|acf| acf.content_blocks).unwrap_or_default(),
            seo: wire.yoast_head_json,
        }
    }
}

impl From<WpPage> for PageSummary {
    fn from(wire: WpPage) -> Self {
        Self {
            id: wire.id,
            slug: wire.slug,
            title: wire.title.rendered,
        }
    }
}

impl Page {
    pub fn has_blocks(&self) -> bool {
        !self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_page_from_rest_payload() {
        let page: Page = serde_json::from_value(json!({
            "id": 12,
            "slug": "about",
            "title": { "rendered": "About us" },
            "excerpt": { "rendered": "<p>Who we are</p>\n" },
            "content": { "rendered": "", "protected": false },
            "link": "https://cms.example.com/about/",
            "acf": {
                "content_blocks": [
                    { "acf_fc_layout": "hero_section", "headline": "Hello" },
                    { "acf_fc_layout": "rich_text_section", "heading": "Story" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(page.slug, "about");
        assert_eq!(page.title, "About us");
        assert_eq!(page.excerpt, Some(HtmlFragment::new("<p>Who we are</p>\n")));
        assert_eq!(page.content, None);
        assert_eq!(page.blocks.len(), 2);
        assert_eq!(page.blocks[0].layout(), "hero_section");
        assert!(page.seo.is_none());
    }

    #[test]
    fn test_page_without_acf_fields() {
        // WordPress sends an empty array when no ACF group is attached
        let page: Page = serde_json::from_value(json!({
            "id": 3,
            "slug": "legal",
            "title": { "rendered": "Legal" },
            "content": { "rendered": "<p>Terms</p>" },
            "acf": []
        }))
        .unwrap();

        assert!(!page.has_blocks());
        assert_eq!(page.content.unwrap().as_str(), "<p>Terms</p>");
    }

    #[test]
    fn test_false_content_blocks_is_empty() {
        let page: Page = serde_json::from_value(json!({
            "id": 3,
            "slug": "home",
            "title": { "rendered": "Home" },
            "acf": { "content_blocks": false }
        }))
        .unwrap();

        assert!(page.blocks.is_empty());
    }

    #[test]
    fn test_summary_projection() {
        let pages: Vec<PageSummary> = serde_json::from_value(json!([
            { "id": 1, "slug": "home", "title": { "rendered": "Home" }, "acf": [] },
            { "id": 2, "slug": "contact", "title": { "rendered": "Contact" } }
        ]))
        .unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].slug, "contact");
        assert_eq!(pages[1].title, "Contact");
    }
}
