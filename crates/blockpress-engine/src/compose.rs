//! Turning a fetched page into the view the front-end renders.

use crate::blocks::{Block, dispatch};
use crate::client::ContentSource;
use crate::models::{HtmlFragment, Media, Page};
use crate::seo::{self, Metadata};
use futures::future::join_all;
use std::collections::{BTreeSet, HashMap};

/// Site-wide values used when composing pages.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProfile {
    pub site_name: String,
    pub tagline: String,
    /// Public root of the CMS, used for admin links and internal routing.
    pub site_url: String,
    pub home_slug: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            site_name: "Blockpress".to_string(),
            tagline: "Headless WordPress front-end".to_string(),
            site_url: String::new(),
            home_slug: "home".to_string(),
        }
    }
}

impl SiteProfile {
    /// Where an operator fixes missing content.
    pub fn admin_url(&self) -> String {
        format!("{}/wp-admin", self.site_url.trim_end_matches('/'))
    }

    pub fn is_home(&self, slug: &str) -> bool {
        slug == self.home_slug
    }
}

/// What the main panel shows for a requested slug.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Decoded blocks in authored order.
    Blocks(Vec<Block>),
    /// Page without blocks, rendered from its HTML body.
    RawHtml { title: String, html: HtmlFragment },
    /// The home page does not exist; tells the operator how to fix it.
    HomeMissing { slug: String, admin_url: String },
    NotFound,
    /// Page exists but has nothing to show.
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub view: PageView,
    pub metadata: Metadata,
}

/// Compose the view for `slug` from the page the CMS returned, if any.
pub fn compose(page: Option<Page>, slug: &str, profile: &SiteProfile) -> Composition {
    let Some(page) = page else {
        return if profile.is_home(slug) {
            Composition {
                view: PageView::HomeMissing {
                    slug: slug.to_string(),
                    admin_url: profile.admin_url(),
                },
                metadata: seo::home_missing_metadata(&profile.site_name, &profile.tagline),
            }
        } else {
            Composition {
                view: PageView::NotFound,
                metadata: seo::not_found_metadata(),
            }
        };
    };

    let metadata = if profile.is_home(slug) {
        seo::home_metadata(&page, &profile.site_name, &profile.tagline)
    } else {
        seo::page_metadata(&page, &profile.site_name)
    };
    let view = if page.has_blocks() {
        PageView::Blocks(dispatch(&page.blocks))
    } else if let Some(html) = page.content {
        PageView::RawHtml {
            title: page.title,
            html,
        }
    } else {
        PageView::Empty
    };

    Composition { view, metadata }
}

/// Fetch, compose and resolve media for the page at `slug`.
pub async fn load_page(
    source: &dyn ContentSource,
    slug: &str,
    profile: &SiteProfile,
) -> Composition {
    let page = source.page_by_slug(slug).await;
    let mut composition = compose(page, slug, profile);
    if let PageView::Blocks(blocks) = &mut composition.view {
        resolve_media(source, blocks).await;
    }
    composition
}

/// Replace media IDs in image fields with the media they refer to.
///
/// Each distinct ID is fetched once. IDs the CMS cannot resolve stay as they are
/// and render as missing images.
pub async fn resolve_media(source: &dyn ContentSource, blocks: &mut [Block]) {
    let ids: BTreeSet<u64> = blocks
        .iter_mut()
        .flat_map(Block::images_mut)
        .filter_map(|image| image.unresolved_id())
        .collect();
    if ids.is_empty() {
        return;
    }

    log::debug!("Resolving {} media IDs", ids.len());
    let fetched = join_all(ids.into_iter().map(|id| source.media_by_id(id))).await;
    let media: HashMap<u64, Media> = fetched
        .into_iter()
        .flatten()
        .map(|media| (media.id, media))
        .collect();

    for image in blocks.iter_mut().flat_map(Block::images_mut) {
        if let Some(found) = image.unresolved_id().and_then(|id| media.get(&id)) {
            image.resolve(found);
        }
    }
}

/// Slugs of every page except the home page.
pub async fn site_slugs(source: &dyn ContentSource, home_slug: &str) -> Vec<String> {
    source
        .all_pages()
        .await
        .into_iter()
        .map(|page| page.slug)
        .filter(|slug| slug != home_slug)
        .collect()
}
