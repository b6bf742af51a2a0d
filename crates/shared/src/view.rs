//! Derived view state of the drought map. Everything here is a function of
//! parent-owned flags; nothing is stored between renders except the drag
//! binding's record of what it last applied to the map.

use crate::models::DroughtValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataReadiness {
    Loading,
    Ready,
}

impl DataReadiness {
    pub fn of(values: Option<&DroughtValues>) -> Self {
        match values {
            Some(_) => DataReadiness::Ready,
            None => DataReadiness::Loading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    Editing,
}

impl EditMode {
    pub fn of(editable: bool) -> Self {
        if editable {
            EditMode::Editing
        } else {
            EditMode::Viewing
        }
    }

    /// Panning is suppressed while editing so pointer drags reach the cells.
    pub fn allows_dragging(self) -> bool {
        self == EditMode::Viewing
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            EditMode::Editing => "Editing is ON",
            EditMode::Viewing => "Editing is OFF",
        }
    }
}

/// Which map layers are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    pub grid: bool,
    pub county: bool,
    pub loading_overlay: bool,
}

impl LayerVisibility {
    pub fn of(readiness: DataReadiness) -> Self {
        let ready = readiness == DataReadiness::Ready;
        LayerVisibility {
            grid: ready,
            county: ready,
            loading_overlay: !ready,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    Enable,
    Disable,
}

/// Keeps the map's drag handler in step with the edit flag.
///
/// `sync` returns the call to make on the live map, or `None` when the map
/// already has the wanted state. Call `reset` when the map instance is
/// replaced so the next `sync` applies unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragBinding {
    applied: Option<bool>,
}

impl DragBinding {
    pub fn sync(&mut self, editable: bool) -> Option<DragAction> {
        let dragging = EditMode::of(editable).allows_dragging();
        if self.applied == Some(dragging) {
            return None;
        }
        self.applied = Some(dragging);
        Some(if dragging {
            DragAction::Enable
        } else {
            DragAction::Disable
        })
    }

    pub fn reset(&mut self) {
        self.applied = None;
    }

    pub fn dragging_enabled(&self) -> Option<bool> {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_hides_layers_and_shows_overlay() {
        let vis = LayerVisibility::of(DataReadiness::of(None));
        assert!(!vis.grid);
        assert!(!vis.county);
        assert!(vis.loading_overlay);
    }

    #[test]
    fn test_ready_shows_layers_and_hides_overlay() {
        let values = DroughtValues::default();
        let vis = LayerVisibility::of(DataReadiness::of(Some(&values)));
        assert!(vis.grid);
        assert!(vis.county);
        assert!(!vis.loading_overlay);
    }

    #[test]
    fn test_edit_mode_tooltips() {
        assert_eq!(EditMode::of(true).tooltip(), "Editing is ON");
        assert_eq!(EditMode::of(false).tooltip(), "Editing is OFF");
    }

    #[test]
    fn test_drag_binding_follows_edit_flag() {
        let mut b = DragBinding::default();
        assert_eq!(b.sync(false), Some(DragAction::Enable));
        assert_eq!(b.sync(true), Some(DragAction::Disable));
        assert_eq!(b.dragging_enabled(), Some(false));
        assert_eq!(b.sync(false), Some(DragAction::Enable));
        assert_eq!(b.dragging_enabled(), Some(true));
    }

    #[test]
    fn test_drag_binding_idempotent_on_repeats() {
        let mut b = DragBinding::default();
        assert_eq!(b.sync(true), Some(DragAction::Disable));
        assert_eq!(b.sync(true), None);
        assert_eq!(b.sync(true), None);
        assert_eq!(b.dragging_enabled(), Some(false));
    }

    #[test]
    fn test_drag_binding_reapplies_after_reset() {
        let mut b = DragBinding::default();
        b.sync(true);
        b.reset();
        assert_eq!(b.sync(true), Some(DragAction::Disable));
    }
}
