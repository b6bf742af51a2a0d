use std::collections::BTreeSet;

use crate::commands::MapCommand;
use crate::models::{Category, DroughtValues, MapType};

/// Editor state owned by the page hosting the drought map.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub categories: Vec<Category>,
    pub category: String,
    pub values: Option<DroughtValues>,
    original: Option<DroughtValues>,
    pub editable: bool,
    pub map_type: MapType,
    pub download_in_progress: bool,
}

impl EditorState {
    /// Starts in view mode on the categorization map, with the first
    /// category selected.
    pub fn new(categories: Vec<Category>) -> Self {
        let category = categories
            .first()
            .map(|c| c.value.clone())
            .unwrap_or_default();
        EditorState {
            categories,
            category,
            values: None,
            original: None,
            editable: false,
            map_type: MapType::DmCat,
            download_in_progress: false,
        }
    }

    /// Apply a command. Returns whether anything changed.
    pub fn apply(&mut self, command: MapCommand) -> bool {
        match command {
            MapCommand::ToggleEdit => {
                self.editable = !self.editable;
                true
            }
            MapCommand::SelectCategory(value) => {
                if value == self.category || !self.categories.iter().any(|c| c.value == value) {
                    return false;
                }
                self.category = value;
                true
            }
            MapCommand::SetMapType(map_type) => replace(&mut self.map_type, map_type),
            MapCommand::ResetValues => {
                if self.values == self.original {
                    return false;
                }
                self.values = self.original.clone();
                true
            }
            MapCommand::SetDownloadInProgress(flag) => {
                replace(&mut self.download_in_progress, flag)
            }
            MapCommand::CategoriesLoaded(categories) => self.load_categories(categories),
            MapCommand::ValuesLoaded(values) => {
                self.original = Some(values.clone());
                self.values = Some(values);
                true
            }
            MapCommand::PaintCell(fips) => self.paint(&fips),
        }
    }

    /// Swap in a new category list, keeping the selection when it is still
    /// listed and every other flag untouched.
    fn load_categories(&mut self, categories: Vec<Category>) -> bool {
        if categories == self.categories {
            return false;
        }
        if !categories.iter().any(|c| c.value == self.category) {
            self.category = categories
                .first()
                .map(|c| c.value.clone())
                .unwrap_or_default();
        }
        self.categories = categories;
        true
    }

    fn paint(&mut self, fips: &str) -> bool {
        if !self.editable || self.map_type != MapType::DmCat || self.category.is_empty() {
            return false;
        }
        let Some(values) = self.values.as_mut() else {
            return false;
        };
        let current = values.drought_cat.get(fips);
        if current == Some(&self.category) {
            return false;
        }
        values
            .drought_cat
            .insert(fips.to_string(), self.category.clone());
        true
    }

    /// Values the map should draw for the active view: everything on the
    /// categorization view, only the edited cells on the changes view.
    pub fn view_values(&self) -> Option<DroughtValues> {
        let values = self.values.as_ref()?;
        match self.map_type {
            MapType::DmCat => Some(values.clone()),
            MapType::Changes => {
                let changed = self.changed_cells();
                Some(DroughtValues {
                    drought_cat: values
                        .drought_cat
                        .iter()
                        .filter(|(fips, _)| changed.contains(*fips))
                        .map(|(fips, cat)| (fips.clone(), cat.clone()))
                        .collect(),
                })
            }
        }
    }

    /// Cells whose category differs from the values as first loaded.
    pub fn changed_cells(&self) -> BTreeSet<String> {
        let (Some(values), Some(original)) = (&self.values, &self.original) else {
            return BTreeSet::new();
        };
        values
            .drought_cat
            .iter()
            .filter(|(fips, cat)| original.drought_cat.get(*fips) != Some(*cat))
            .map(|(fips, _)| fips.clone())
            .collect()
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
