//! Per-feature path styles for the two boundary layers.
//!
//! The structs serialize straight into Leaflet `PathOptions`.

use serde::Serialize;

use crate::models::DroughtValues;
use crate::palette::CategoryPalette;

const LINE_WEIGHT: f64 = 1.0;
const LINE_OPACITY: f64 = 0.8;
const GRID_FILL_OPACITY: f64 = 0.8;
const DASH_ARRAY: &str = "1";
const COUNTY_LINE_COLOR: &str = "#000000";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    pub weight: f64,
    pub opacity: f64,
    /// Stroke color. `None` is sent as `null`, which leaves the stroke uncolored.
    pub color: Option<String>,
    pub dash_array: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

/// Fill color of one grid cell. Absent values give the fallback fill.
pub fn grid_fill_color<'a>(
    fips: &str,
    values: Option<&DroughtValues>,
    palette: &'a CategoryPalette,
) -> &'a str {
    palette.fill_for(values.and_then(|v| v.category_of(fips)))
}

pub fn grid_style(
    fips: &str,
    values: Option<&DroughtValues>,
    palette: &CategoryPalette,
) -> FeatureStyle {
    FeatureStyle {
        weight: LINE_WEIGHT,
        opacity: LINE_OPACITY,
        color: None,
        dash_array: DASH_ARRAY,
        fill: None,
        fill_color: Some(grid_fill_color(fips, values, palette).to_string()),
        fill_opacity: Some(GRID_FILL_OPACITY),
    }
}

pub fn county_style() -> FeatureStyle {
    FeatureStyle {
        weight: LINE_WEIGHT,
        opacity: LINE_OPACITY,
        color: Some(COUNTY_LINE_COLOR.to_string()),
        dash_array: DASH_ARRAY,
        fill: Some(false),
        fill_color: None,
        fill_opacity: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::palette::FALLBACK_FILL;

    fn palette() -> CategoryPalette {
        CategoryPalette::new(&[
            Category {
                value: "D0".into(),
                color: "#FFFF00".into(),
            },
            Category {
                value: "D2".into(),
                color: "#FFAA00".into(),
            },
        ])
    }

    fn values() -> DroughtValues {
        let mut v = DroughtValues::default();
        v.drought_cat.insert("36001".into(), "D2".into());
        v.drought_cat.insert("36003".into(), "D7".into());
        v
    }

    #[test]
    fn test_grid_fill_matches_category() {
        let p = palette();
        let v = values();
        assert_eq!(grid_fill_color("36001", Some(&v), &p), "#FFAA00");
    }

    #[test]
    fn test_grid_fill_fallbacks() {
        let p = palette();
        let v = values();
        // unknown category, unknown cell, values not loaded
        assert_eq!(grid_fill_color("36003", Some(&v), &p), FALLBACK_FILL);
        assert_eq!(grid_fill_color("00000", Some(&v), &p), FALLBACK_FILL);
        assert_eq!(grid_fill_color("36001", None, &p), FALLBACK_FILL);
    }

    #[test]
    fn test_grid_style_shape() {
        let s = grid_style("36001", Some(&values()), &palette());
        assert_eq!(s.weight, 1.0);
        assert_eq!(s.opacity, 0.8);
        assert_eq!(s.color, None);
        assert_eq!(s.fill_opacity, Some(0.8));
        assert_eq!(s.fill_color.as_deref(), Some("#FFAA00"));
    }

    #[test]
    fn test_grid_style_serializes_null_stroke() {
        let json = serde_json::to_value(grid_style("36001", Some(&values()), &palette())).unwrap();
        assert!(json["color"].is_null());
        assert_eq!(json["fillColor"], "#FFAA00");
        assert_eq!(json["dashArray"], "1");
        assert!(json.get("fill").is_none());
    }

    #[test]
    fn test_county_style_is_unfilled_black_outline() {
        let json = serde_json::to_value(county_style()).unwrap();
        assert_eq!(json["color"], "#000000");
        assert_eq!(json["fill"], false);
        assert_eq!(json["weight"], 1.0);
        assert_eq!(json["opacity"], 0.8);
        assert!(json.get("fillColor").is_none());
    }
}
