use super::SectionIntro;
use crate::interaction::Selection;
use crate::layout::Background;
use crate::maps::{self, Coordinates, MapStyle};
use crate::models::{HtmlFragment, de};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LocationMap {
    #[serde(flatten)]
    pub intro: SectionIntro,
    #[serde(default, deserialize_with = "de::list")]
    pub locations: Vec<Location>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub map_zoom: Option<u32>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub map_style: Option<String>,
    #[serde(default = "de::yes", deserialize_with = "de::flag")]
    pub show_location_cards: bool,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub location_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de::opt")]
    pub hours: Option<HtmlFragment>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub additional_info: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub longitude: Option<String>,
}

impl LocationMap {
    pub fn zoom(&self) -> u32 {
        self.map_zoom.unwrap_or(maps::DEFAULT_ZOOM)
    }

    pub fn style(&self) -> MapStyle {
        MapStyle::from_token(self.map_style.as_deref())
    }

    pub fn background(&self) -> Background {
        Background::from_token(self.background_color.as_deref(), Background::White)
    }

    /// Card selection: the first location starts selected.
    pub fn selection(&self) -> Selection {
        Selection::new(Some(0))
    }

    /// Map to embed for the current selection, `None` shows the placeholder.
    pub fn map_url(&self, selected: Option<usize>) -> Option<String> {
        let coordinates: Vec<Option<Coordinates<'_>>> =
            self.locations.iter().map(Location::coordinates).collect();
        maps::map_url(&coordinates, selected, self.zoom(), self.style())
    }
}

impl Location {
    pub fn coordinates(&self) -> Option<Coordinates<'_>> {
        Coordinates::new(self.latitude.as_deref(), self.longitude.as_deref())
    }

    pub fn full_address(&self) -> String {
        maps::full_address([
            self.address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip_code.as_deref(),
            self.country.as_deref(),
        ])
    }

    pub fn directions_url(&self) -> Option<String> {
        self.coordinates().map(maps::directions_url)
    }
}
