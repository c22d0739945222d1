//! Embedded map URLs for location blocks.

use url::Url;

const MAPS_BASE: &str = "https://maps.google.com/maps";

/// Default zoom level when the block does not set one.
pub const DEFAULT_ZOOM: u32 = 12;

/// Map tile style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapStyle {
    #[default]
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl MapStyle {
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some("satellite") => MapStyle::Satellite,
            Some("hybrid") => MapStyle::Hybrid,
            Some("terrain") => MapStyle::Terrain,
            _ => MapStyle::Roadmap,
        }
    }

    /// The `t` parameter understood by the embed endpoint.
    pub fn code(self) -> &'static str {
        match self {
            MapStyle::Satellite => "k",
            MapStyle::Hybrid => "h",
            MapStyle::Roadmap | MapStyle::Terrain => "m",
        }
    }
}

/// Latitude and longitude exactly as authored in the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates<'a> {
    pub lat: &'a str,
    pub lng: &'a str,
}

impl<'a> Coordinates<'a> {
    /// Both parts must be present and non-blank.
    pub fn new(lat: Option<&'a str>, lng: Option<&'a str>) -> Option<Self> {
        let lat = lat.map(str::trim).filter(|s| !s.is_empty())?;
        let lng = lng.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self { lat, lng })
    }

    fn pair(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// Embed URL centred on a single location.
pub fn single_map_url(coordinates: Coordinates<'_>, zoom: u32, style: MapStyle) -> String {
    let zoom = zoom.to_string();
    let params = [
        ("q", coordinates.pair()),
        ("z", zoom),
        ("t", style.code().to_string()),
        ("output", "embed".to_string()),
    ];
    match Url::parse_with_params(MAPS_BASE, &params) {
        Ok(url) => url.into(),
        Err(err) => {
            log::warn!("Could not build map URL: {err}");
            MAPS_BASE.to_string()
        }
    }
}

/// Embed URL with one marker per location. `None` when no location has coordinates.
pub fn combined_map_url<'a>(
    coordinates: impl IntoIterator<Item = Option<Coordinates<'a>>>,
    zoom: u32,
) -> Option<String> {
    let markers: Vec<String> = coordinates
        .into_iter()
        .flatten()
        .map(|c| format!("markers={}", c.pair()))
        .collect();
    if markers.is_empty() {
        return None;
    }
    Some(format!(
        "{MAPS_BASE}?{}&z={zoom}&output=embed",
        markers.join("&")
    ))
}

/// Choose the map to show for a set of locations and the current selection.
///
/// A single location always gets its own map. Otherwise the selected
/// location is shown, or every location when nothing is selected.
pub fn map_url(
    coordinates: &[Option<Coordinates<'_>>],
    selected: Option<usize>,
    zoom: u32,
    style: MapStyle,
) -> Option<String> {
    let single = |index: usize| {
        coordinates
            .get(index)
            .copied()
            .flatten()
            .map(|c| single_map_url(c, zoom, style))
    };
    match (coordinates.len(), selected) {
        (0, _) => None,
        (1, _) => single(0),
        (_, Some(index)) => single(index),
        (_, None) => combined_map_url(coordinates.iter().copied(), zoom),
    }
}

/// Route planner link ending at the location.
pub fn directions_url(coordinates: Coordinates<'_>) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={}",
        coordinates.pair()
    )
}

/// Join the non-empty address parts with `, `.
pub fn full_address<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
