use dioxus::prelude::*;
use drought_shared::download::todays_download_filename;
use drought_shared::models::MapType;
use drought_shared::view::EditMode;

use crate::components::download_map::DownloadMap;

/// Square icon buttons in the left-hand control stack.
pub(crate) const ICON_BUTTON_STYLE: &str =
    "max-width: 28px; max-height: 28px; min-width: 28px; min-height: 28px;";

/// Material "edit" glyph.
#[component]
fn EditIcon() -> Element {
    rsx! {
        svg { class: "icon", "viewBox": "0 0 24 24", "aria-hidden": "true",
            path { d: "M3 17.25V21h3.75L17.81 9.94l-3.75-3.75L3 17.25zM20.71 7.04a.996.996 0 0 0 0-1.41l-2.34-2.34a.996.996 0 0 0-1.41 0l-1.83 1.83 3.75 3.75 1.83-1.83z" }
        }
    }
}

/// Material "undo" glyph.
#[component]
fn UndoIcon() -> Element {
    rsx! {
        svg { class: "icon", "viewBox": "0 0 24 24", "aria-hidden": "true",
            path { d: "M12.5 8c-2.65 0-5.05.99-6.9 2.6L2 7v9h9l-3.62-3.62c1.39-1.16 3.16-1.88 5.12-1.88 3.54 0 6.55 2.31 7.6 5.5l2.37-.78C21.08 11.03 17.15 8 12.5 8z" }
        }
    }
}

/// A map-type click asks for the other view, never the current one.
pub(crate) fn request_other_view(current: MapType, on_change_map_type: EventHandler<MapType>) {
    on_change_map_type.call(current.toggled());
}

pub(crate) fn request_reset(reset_map_values: EventHandler<()>) {
    reset_map_values.call(());
}

pub(crate) fn edit_toggle_class(editable: bool) -> &'static str {
    if editable {
        "edit-toggle selected"
    } else {
        "edit-toggle"
    }
}

/// Switches between the categorization view and the user-changes view.
#[component]
pub fn MapTypeButton(map_type: MapType, on_change_map_type: EventHandler<MapType>) -> Element {
    rsx! {
        div { class: "leaflet-top leaflet-right",
            div { class: "leaflet-control",
                button {
                    class: "map-type-button",
                    onclick: move |_| request_other_view(map_type, on_change_map_type),
                    "{map_type.title()}"
                    br {}
                    "(change view)"
                }
            }
        }
    }
}

#[component]
pub fn MapEditButton(editable: bool, on_change_editable: EventHandler<()>) -> Element {
    let tooltip = EditMode::of(editable).tooltip();
    rsx! {
        div { class: "leaflet-control leaflet-bar",
            button {
                class: edit_toggle_class(editable),
                style: ICON_BUTTON_STYLE,
                title: tooltip,
                "aria-label": tooltip,
                "aria-pressed": "{editable}",
                onclick: move |_| on_change_editable.call(()),
                EditIcon {}
            }
        }
    }
}

#[component]
pub fn UndoButton(reset_map_values: EventHandler<()>) -> Element {
    rsx! {
        div { class: "leaflet-control leaflet-bar",
            button {
                class: "undo-button",
                style: ICON_BUTTON_STYLE,
                title: "Undo all changes",
                "aria-label": "Undo all changes",
                onclick: move |_| request_reset(reset_map_values),
                UndoIcon {}
            }
        }
    }
}

#[component]
pub fn DownloadMapButton(
    download_in_progress: bool,
    on_change_download: EventHandler<bool>,
) -> Element {
    // Stamped on every render so a long-lived page picks up the new day.
    let file_name = todays_download_filename();
    rsx! {
        div { class: "leaflet-control leaflet-bar",
            DownloadMap {
                file_name: file_name,
                download_in_progress: download_in_progress,
                on_change_download: on_change_download,
            }
        }
    }
}

/// Edit, undo and download stacked under the zoom control.
#[component]
pub fn MapButtonGroup(
    editable: bool,
    on_change_editable: EventHandler<()>,
    reset_map_values: EventHandler<()>,
    download_in_progress: bool,
    on_change_download: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "leaflet-top leaflet-left map-button-group",
            div { class: "button-column",
                MapEditButton {
                    editable: editable,
                    on_change_editable: on_change_editable,
                }
                UndoButton { reset_map_values: reset_map_values }
                DownloadMapButton {
                    download_in_progress: download_in_progress,
                    on_change_download: on_change_download,
                }
            }
        }
    }
}
