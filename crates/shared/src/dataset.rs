//! Consistency checks for the files that feed the drought map.

use std::collections::HashSet;

use geojson::FeatureCollection;

use crate::error::DatasetError;
use crate::models::{feature_fips, Category, DroughtValues};
use crate::palette::{is_hex_color, CategoryPalette};

/// Counts gathered while validating; problems that only degrade rendering
/// (white cells) are reported here instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub categories: usize,
    pub grid_cells: usize,
    pub county_features: usize,
    pub valued_cells: usize,
    pub unknown_categories: usize,
    pub unknown_cells: usize,
}

pub fn validate_categories(categories: &[Category]) -> Result<(), DatasetError> {
    if categories.is_empty() {
        return Err(DatasetError::NoCategories);
    }
    let mut seen = HashSet::new();
    for c in categories {
        if !seen.insert(c.value.as_str()) {
            return Err(DatasetError::DuplicateCategory(c.value.clone()));
        }
        if !is_hex_color(&c.color) {
            return Err(DatasetError::InvalidColor {
                value: c.value.clone(),
                color: c.color.clone(),
            });
        }
    }
    Ok(())
}

/// FIPS ids of every grid feature, failing on the first feature without one.
pub fn grid_fips(grid: &FeatureCollection) -> Result<HashSet<String>, DatasetError> {
    grid.features
        .iter()
        .enumerate()
        .map(|(index, f)| feature_fips(f).map_err(|source| DatasetError::Feature { index, source }))
        .collect()
}

pub fn summarize(
    categories: &[Category],
    values: &DroughtValues,
    grid: &FeatureCollection,
    counties: &FeatureCollection,
) -> Result<DatasetSummary, DatasetError> {
    validate_categories(categories)?;
    let cells = grid_fips(grid)?;
    let palette = CategoryPalette::new(categories);

    Ok(DatasetSummary {
        categories: categories.len(),
        grid_cells: cells.len(),
        county_features: counties.features.len(),
        valued_cells: values.drought_cat.len(),
        unknown_categories: palette.unmatched_cells(values),
        unknown_cells: values
            .drought_cat
            .keys()
            .filter(|fips| !cells.contains(*fips))
            .count(),
    })
}
