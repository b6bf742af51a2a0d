use std::path::Path;

use drought_shared::dataset::{summarize, DatasetSummary};
use drought_shared::error::DatasetError;
use drought_shared::models::{Category, DroughtValues};
use geojson::FeatureCollection;
use serde::de::DeserializeOwned;

/// Dataset files, relative to the assets dir; served under `/static/data`.
pub const CATEGORIES_FILE: &str = "data/categories.json";
pub const VALUES_FILE: &str = "data/values.json";
pub const GRID_FILE: &str = "data/grid.geojson";
pub const COUNTIES_FILE: &str = "data/counties.geojson";

pub struct Dataset {
    pub categories: Vec<Category>,
    pub values: DroughtValues,
    pub grid: FeatureCollection,
    pub counties: FeatureCollection,
}

fn read_json<T: DeserializeOwned>(assets_dir: &Path, file: &str) -> Result<T, DatasetError> {
    let path = assets_dir.join(file);
    let data = std::fs::read_to_string(&path).map_err(|source| DatasetError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|e| DatasetError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

impl Dataset {
    pub fn load(assets_dir: &Path) -> Result<Self, DatasetError> {
        Ok(Dataset {
            categories: read_json(assets_dir, CATEGORIES_FILE)?,
            values: read_json(assets_dir, VALUES_FILE)?,
            grid: read_json(assets_dir, GRID_FILE)?,
            counties: read_json(assets_dir, COUNTIES_FILE)?,
        })
    }

    /// Validate and log what the map will show. Unknown categories and
    /// cells only warn; they render white or not at all.
    pub fn check(&self) -> Result<DatasetSummary, DatasetError> {
        let summary = summarize(&self.categories, &self.values, &self.grid, &self.counties)?;
        tracing::info!(
            categories = summary.categories,
            grid_cells = summary.grid_cells,
            counties = summary.county_features,
            valued_cells = summary.valued_cells,
            "Loaded drought dataset"
        );
        if summary.unknown_categories > 0 {
            tracing::warn!(
                cells = summary.unknown_categories,
                "values reference categories missing from the legend"
            );
        }
        if summary.unknown_cells > 0 {
            tracing::warn!(
                cells = summary.unknown_cells,
                "values reference cells missing from the grid"
            );
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: &str = r##"[
        {"value": "None", "color": "#FFFFFF"},
        {"value": "D0", "color": "#FFFF00"},
        {"value": "D1", "color": "#FCD37F"}
    ]"##;
    const VALUES: &str = r#"{"drought_cat": {"36001": "D0", "36003": "D1", "36005": "D9"}}"#;
    const GRID: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"id": "36001"}, "geometry": null},
        {"type": "Feature", "properties": {"id": 36003}, "geometry": null}
    ]}"#;
    const COUNTIES: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"name": "Albany"}, "geometry": null}
    ]}"#;

    fn write_dataset(categories: &str, grid: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join(CATEGORIES_FILE), categories).unwrap();
        std::fs::write(dir.path().join(VALUES_FILE), VALUES).unwrap();
        std::fs::write(dir.path().join(GRID_FILE), grid).unwrap();
        std::fs::write(dir.path().join(COUNTIES_FILE), COUNTIES).unwrap();
        dir
    }

    #[test]
    fn test_load_and_check_dataset() {
        let dir = write_dataset(CATEGORIES, GRID);
        let dataset = Dataset::load(dir.path()).unwrap();
        assert_eq!(dataset.categories.len(), 3);
        assert_eq!(dataset.values.category_of("36003"), Some("D1"));

        let summary = dataset.check().unwrap();
        assert_eq!(summary.grid_cells, 2);
        assert_eq!(summary.county_features, 1);
        assert_eq!(summary.valued_cells, 3);
        assert_eq!(summary.unknown_categories, 1);
        assert_eq!(summary.unknown_cells, 1);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        match Dataset::load(dir.path()) {
            Err(DatasetError::Read { path, .. }) => assert!(path.ends_with("categories.json")),
            other => panic!("expected read error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = write_dataset("[{\"value\": \"D0\"", GRID);
        assert!(matches!(
            Dataset::load(dir.path()),
            Err(DatasetError::Parse { .. })
        ));
    }

    #[test]
    fn test_duplicate_category_fails_check() {
        let dir = write_dataset(
            r##"[{"value": "D0", "color": "#FFFF00"}, {"value": "D0", "color": "#FCD37F"}]"##,
            GRID,
        );
        let dataset = Dataset::load(dir.path()).unwrap();
        assert!(matches!(
            dataset.check(),
            Err(DatasetError::DuplicateCategory(v)) if v == "D0"
        ));
    }

    #[test]
    fn test_grid_feature_without_id_fails_check() {
        let grid = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"name": "orphan"}, "geometry": null}
        ]}"#;
        let dir = write_dataset(CATEGORIES, grid);
        let dataset = Dataset::load(dir.path()).unwrap();
        assert!(matches!(
            dataset.check(),
            Err(DatasetError::Feature { index: 0, .. })
        ));
    }
}
