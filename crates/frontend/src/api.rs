//! Loading of the static drought dataset served under `/static/data`.

use drought_shared::models::{Category, DroughtValues};
use geojson::FeatureCollection;
use serde::de::DeserializeOwned;

pub const CATEGORIES_FILE: &str = "categories.json";
pub const VALUES_FILE: &str = "values.json";
pub const GRID_FILE: &str = "grid.geojson";
pub const COUNTIES_FILE: &str = "counties.geojson";

/// Absolute URL of a dataset file under the page's origin.
pub fn data_url(origin: &str, file: &str) -> String {
    format!("{}/static/data/{}", origin.trim_end_matches('/'), file)
}

fn origin() -> Result<String, String> {
    web_sys::window()
        .ok_or_else(|| "no window".to_string())?
        .location()
        .origin()
        .map_err(|_| "page origin unavailable".to_string())
}

async fn fetch_json<T: DeserializeOwned>(file: &str) -> Result<T, String> {
    let url = data_url(&origin()?, file);
    let resp = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("{} returned {}", url, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| format!("{}: {}", file, e))
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    fetch_json(CATEGORIES_FILE).await
}

pub async fn fetch_values() -> Result<DroughtValues, String> {
    fetch_json(VALUES_FILE).await
}

pub async fn fetch_grid_boundaries() -> Result<FeatureCollection, String> {
    fetch_json(GRID_FILE).await
}

pub async fn fetch_county_boundaries() -> Result<FeatureCollection, String> {
    fetch_json(COUNTIES_FILE).await
}

/// Placeholder until a boundary file has loaded.
pub fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        assert_eq!(
            data_url("http://localhost:3000", GRID_FILE),
            "http://localhost:3000/static/data/grid.geojson"
        );
    }

    #[test]
    fn test_data_url_trailing_slash() {
        assert_eq!(
            data_url("https://drought.example.org/", VALUES_FILE),
            "https://drought.example.org/static/data/values.json"
        );
    }

    #[test]
    fn test_categories_deserialize() {
        let json = r##"[{"value": "D0", "color": "#FFFF00"}, {"value": "D1", "color": "#FCD37F"}]"##;
        let cats: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[1].value, "D1");
        assert_eq!(cats[1].color, "#FCD37F");
    }

    #[test]
    fn test_values_deserialize() {
        let json = r#"{"drought_cat": {"36001": "D0"}}"#;
        let values: DroughtValues = serde_json::from_str(json).unwrap();
        assert_eq!(values.category_of("36001"), Some("D0"));
    }

    #[test]
    fn test_boundaries_deserialize() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"id": "36001"},
             "geometry": {"type": "Polygon", "coordinates": [[[-74.0, 42.5], [-73.9, 42.5], [-73.9, 42.6], [-74.0, 42.5]]]}}
        ]}"#;
        let fc: FeatureCollection = serde_json::from_str(json).unwrap();
        assert_eq!(fc.features.len(), 1);
    }

    #[test]
    fn test_empty_collection() {
        assert!(empty_collection().features.is_empty());
    }
}
