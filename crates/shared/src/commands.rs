use crate::models::{Category, DroughtValues, MapType};

/// Requests sent from the map UI to the state holder that owns the editor.
///
/// The map only proposes; [`crate::editor::EditorState::apply`] decides.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    ToggleEdit,
    SelectCategory(String),
    SetMapType(MapType),
    ResetValues,
    SetDownloadInProgress(bool),
    CategoriesLoaded(Vec<Category>),
    ValuesLoaded(DroughtValues),
    PaintCell(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureEventKind {
    Click,
    /// Pointer entered the cell with the primary button held.
    PaintOver,
}

/// Interaction with a single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureEvent {
    pub fips: String,
    pub kind: FeatureEventKind,
}

impl FeatureEvent {
    pub fn into_command(self) -> MapCommand {
        MapCommand::PaintCell(self.fips)
    }
}
