//! Site-wide data shared by the header and navigation.

use crate::client::ContentSource;
use crate::models::{ImageField, MenuItem, SiteOptions};

/// Loaded once per app start and handed down through the component tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteContext {
    pub options: Option<SiteOptions>,
    pub menu: Vec<MenuItem>,
}

impl SiteContext {
    /// Fetch site options and the main menu concurrently.
    pub async fn load(source: &dyn ContentSource, menu_option: &str) -> Self {
        let (options, menu) = futures::join!(source.site_options(), source.main_menu(menu_option));
        log::info!(
            "Loaded site context: {} menu items, options {}",
            menu.len(),
            if options.is_some() { "present" } else { "missing" }
        );
        Self { options, menu }
    }

    pub fn logo(&self) -> Option<&ImageField> {
        self.options.as_ref()?.logo.as_ref().filter(|logo| logo.url().is_some())
    }

    /// Site name from the CMS, else `fallback`.
    pub fn site_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.options
            .as_ref()
            .and_then(|options| options.site_name.as_deref())
            .unwrap_or(fallback)
    }

    /// The CMS menu, or the built-in fallback when it is empty.
    pub fn navigation(&self) -> Vec<MenuItem> {
        if self.menu.is_empty() {
            fallback_menu()
        } else {
            self.menu.clone()
        }
    }
}

pub fn fallback_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Home", "/"),
        MenuItem::new("About", "/about"),
        MenuItem::new("Contact", "/contact"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::FakeSource;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_load_issues_one_call_each() {
        let source = FakeSource::default()
            .with_menu(vec![MenuItem::new("Work", "/work")])
            .with_options(SiteOptions {
                logo: Some(ImageField::Url("https://x.test/logo.png".to_string())),
                site_name: Some("Acme".to_string()),
            });

        let site = SiteContext::load(&source, "main-menu").await;

        assert_eq!(source.option_requests(), 1);
        assert_eq!(source.menu_requests(), vec!["main-menu"]);
        assert_eq!(site.navigation(), vec![MenuItem::new("Work", "/work")]);
        assert_eq!(site.site_name("Fallback"), "Acme");
        assert_eq!(site.logo().and_then(ImageField::url), Some("https://x.test/logo.png"));
    }

    #[tokio::test]
    async fn test_empty_cms_uses_fallbacks() {
        let site = SiteContext::load(&FakeSource::default(), "main-menu").await;

        let labels: Vec<String> = site.navigation().into_iter().map(|item| item.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Contact"]);
        assert_eq!(site.site_name("Blockpress"), "Blockpress");
        assert_eq!(site.logo(), None);
    }
}
