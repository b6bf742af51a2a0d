use std::collections::HashMap;

use crate::models::{Category, DroughtValues};

/// Fill used for cells whose category is unknown or not loaded yet.
pub const FALLBACK_FILL: &str = "#FFFFFF";

/// Category value -> color, built once per category list.
///
/// When a value appears more than once the first entry wins, matching a
/// front-to-back scan of the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPalette {
    colors: HashMap<String, String>,
}

impl CategoryPalette {
    pub fn new(categories: &[Category]) -> Self {
        let mut colors = HashMap::with_capacity(categories.len());
        for c in categories {
            colors
                .entry(c.value.clone())
                .or_insert_with(|| c.color.clone());
        }
        CategoryPalette { colors }
    }

    pub fn color_of(&self, value: &str) -> Option<&str> {
        self.colors.get(value).map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.colors.contains_key(value)
    }

    /// Fill color for a (possibly missing) category value.
    pub fn fill_for(&self, value: Option<&str>) -> &str {
        value
            .and_then(|v| self.color_of(v))
            .unwrap_or(FALLBACK_FILL)
    }

    /// Number of cells in `values` whose category has no color.
    pub fn unmatched_cells(&self, values: &DroughtValues) -> usize {
        values
            .drought_cat
            .values()
            .filter(|v| !self.contains(v))
            .count()
    }
}

/// Whether a color string is a `#RRGGBB` hex triplet.
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
