use serde::Serialize;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    r#"&copy <a href="http://osm.org/copyright">OpenStreetMap</a> contributors"#;

/// Fixed viewport of the drought map: upstate New York and neighbors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    /// `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub zoom_control: bool,
    pub attribution_control: bool,
    #[serde(skip)]
    pub width_px: u32,
    #[serde(skip)]
    pub height_px: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        MapSettings {
            center: [43.8, -74.0],
            zoom: 6,
            min_zoom: 5,
            max_zoom: 9,
            zoom_control: true,
            attribution_control: true,
            width_px: 900,
            height_px: 720,
        }
    }
}

/// Leaflet map options: the viewport plus the initial drag state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions<'a> {
    #[serde(flatten)]
    pub settings: &'a MapSettings,
    pub dragging: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TileOptions {
    pub attribution: &'static str,
}

impl Default for TileOptions {
    fn default() -> Self {
        TileOptions {
            attribution: TILE_ATTRIBUTION,
        }
    }
}
