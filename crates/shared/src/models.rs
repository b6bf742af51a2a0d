use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One drought classification and the color it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub value: String,
    pub color: String,
}

/// Current classification per grid cell, keyed by FIPS code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroughtValues {
    pub drought_cat: HashMap<String, String>,
}

impl DroughtValues {
    pub fn category_of(&self, fips: &str) -> Option<&str> {
        self.drought_cat.get(fips).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapType {
    #[default]
    #[serde(rename = "dmcat")]
    DmCat,
    #[serde(rename = "changes")]
    Changes,
}

impl MapType {
    pub fn as_str(self) -> &'static str {
        match self {
            MapType::DmCat => "dmcat",
            MapType::Changes => "changes",
        }
    }

    /// The view a single press of the map-type button switches to.
    pub fn toggled(self) -> MapType {
        match self {
            MapType::DmCat => MapType::Changes,
            MapType::Changes => MapType::DmCat,
        }
    }

    /// Title shown on the map-type button while this view is active.
    pub fn title(self) -> &'static str {
        match self {
            MapType::DmCat => "Drought Monitor Editor",
            MapType::Changes => "User Changes To DM",
        }
    }
}

impl std::fmt::Display for MapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dmcat" => Ok(MapType::DmCat),
            "changes" => Ok(MapType::Changes),
            other => Err(ModelError::UnknownMapType(other.to_string())),
        }
    }
}

/// Extract the FIPS code a boundary feature is joined on.
///
/// Numeric ids are accepted and rendered as their decimal string.
pub fn feature_fips(feature: &geojson::Feature) -> Result<String, ModelError> {
    match feature.property("id") {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(ModelError::InvalidFeatureId(other.to_string())),
        None => Err(ModelError::MissingFeatureId),
    }
}

/// FIPS code from a feature's loose `properties` object, which is how
/// Leaflet hands features back to us.
pub fn properties_fips(properties: &serde_json::Value) -> Option<String> {
    match properties.get("id")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
