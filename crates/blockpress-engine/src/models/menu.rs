use crate::models::de;
use serde::Deserialize;

/// A navigation entry. Menus are at most one level deep.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuItem {
    pub label: String,
    pub link: Option<String>,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: Some(link.into()),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Link target, `#` when the CMS left the link empty.
    pub fn href(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }
}

/// Entry in the menus plugin listing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MenuSummary {
    #[serde(default)]
    pub term_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// `main_menu_items` repeater on the ACF menu option page.
#[derive(Debug, Deserialize)]
pub(crate) struct AcfMenuItem {
    #[serde(default, deserialize_with = "de::opt_text")]
    menu_item_text: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    menu_link: Option<String>,
    #[serde(default, deserialize_with = "de::list")]
    sub_menu: Vec<AcfSubMenuItem>,
}

#[derive(Debug, Deserialize)]
struct AcfSubMenuItem {
    #[serde(default, deserialize_with = "de::opt_text")]
    sub_menu_text: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    sub_menu_link: Option<String>,
}

impl From<AcfMenuItem> for MenuItem {
    fn from(item: AcfMenuItem) -> Self {
        Self {
            label: item.menu_item_text.unwrap_or_default(),
            link: item.menu_link,
            children: item
                .sub_menu
                .into_iter()
                .map(|sub| MenuItem {
                    label: sub.sub_menu_text.unwrap_or_default(),
                    link: sub.sub_menu_link,
                    children: Vec::new(),
                })
                .collect(),
        }
    }
}

/// The ACF option page holding the main menu.
#[derive(Debug, Deserialize)]
pub(crate) struct AcfMenuOptions {
    #[serde(default, deserialize_with = "de::list")]
    pub main_menu_items: Vec<AcfMenuItem>,
}

/// Response of the menus plugin for a single menu.
#[derive(Debug, Deserialize)]
pub(crate) struct PluginMenu {
    #[serde(default, deserialize_with = "de::list")]
    pub items: Vec<PluginMenuItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PluginMenuItem {
    #[serde(default, deserialize_with = "de::opt_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    url: Option<String>,
    #[serde(default, deserialize_with = "de::list")]
    child_items: Vec<PluginMenuItem>,
}

impl From<PluginMenuItem> for MenuItem {
    fn from(item: PluginMenuItem) -> Self {
        Self {
            label: item.title.unwrap_or_default(),
            link: item.url,
            // Grandchildren are flattened away: navigation renders one level
            children: item
                .child_items
                .into_iter()
                .map(|child| MenuItem {
                    label: child.title.unwrap_or_default(),
                    link: child.url,
                    children: Vec::new(),
                })
                .collect(),
        }
    }
}
