use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use drought_shared::commands::{FeatureEvent, MapCommand};
use drought_shared::editor::EditorState;
use drought_shared::models::MapType;

use crate::api;
use crate::components::drought_map::MapDroughtMonitor;

fn dispatch(mut editor: Signal<EditorState>, command: MapCommand) {
    editor.write().apply(command);
}

/// Summary line under the title for the active view.
pub(crate) fn status_line(map_type: MapType, changed: usize) -> String {
    match (map_type, changed) {
        (MapType::DmCat, _) => "Click a cell, or drag across cells while editing, to assign the selected category.".to_string(),
        (MapType::Changes, 0) => "No cells changed yet.".to_string(),
        (MapType::Changes, 1) => "1 cell changed.".to_string(),
        (MapType::Changes, n) => format!("{n} cells changed."),
    }
}

/// Page hosting the drought map. Owns all editor state and decides on
/// every request the map makes.
#[component]
pub fn Editor(initial_map_type: MapType) -> Element {
    let mut editor = use_signal(move || {
        let mut state = EditorState::new(Vec::new());
        state.map_type = initial_map_type;
        state
    });
    let mut grid = use_signal(api::empty_collection);
    let mut counties = use_signal(api::empty_collection);
    let mut load_error = use_signal(|| None::<String>);

    // Categories and boundaries first; values last, which ends the loading state.
    let _loader = use_resource(move || async move {
        let categories = match api::fetch_categories().await {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "failed to load categories");
                load_error.set(Some(e));
                return;
            }
        };
        dispatch(editor, MapCommand::CategoriesLoaded(categories));

        match api::fetch_grid_boundaries().await {
            Ok(fc) => grid.set(fc),
            Err(e) => {
                warn!(error = %e, "failed to load grid boundaries");
                load_error.set(Some(e));
            }
        }
        match api::fetch_county_boundaries().await {
            Ok(fc) => counties.set(fc),
            Err(e) => {
                warn!(error = %e, "failed to load county boundaries");
                load_error.set(Some(e));
            }
        }
        match api::fetch_values().await {
            Ok(values) => {
                info!(cells = values.drought_cat.len(), "drought values loaded");
                dispatch(editor, MapCommand::ValuesLoaded(values));
            }
            Err(e) => {
                warn!(error = %e, "failed to load drought values");
                load_error.set(Some(e));
            }
        }
    });

    let categories = use_memo(move || editor.read().categories.clone());
    // On the changes view the map only draws cells the user has edited.
    let values = use_memo(move || editor.read().view_values());
    let editable = use_memo(move || editor.read().editable);

    let state = editor.read();
    let status = status_line(state.map_type, state.changed_cells().len());
    let category = state.category.clone();
    let map_type = state.map_type;
    let download_in_progress = state.download_in_progress;
    drop(state);

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Drought Monitor Editor" }
                p { class: "status", "{status}" }
                if let Some(err) = &*load_error.read() {
                    p { class: "error", "Failed to load data: {err}" }
                }
            }

            MapDroughtMonitor {
                county_boundaries: counties,
                grid_boundaries: grid,
                category: category,
                categories: categories,
                values: values,
                on_each_feature: move |event: FeatureEvent| {
                    dispatch(editor, event.into_command());
                },
                editable: editable,
                map_type: map_type,
                download_in_progress: download_in_progress,
                on_change_editable: move |_| dispatch(editor, MapCommand::ToggleEdit),
                on_change_category: move |value: String| dispatch(editor, MapCommand::SelectCategory(value)),
                on_change_map_type: move |next: MapType| dispatch(editor, MapCommand::SetMapType(next)),
                on_change_download: move |busy: bool| dispatch(editor, MapCommand::SetDownloadInProgress(busy)),
                reset_map_values: move |_| dispatch(editor, MapCommand::ResetValues),
            }
        }
    }
}
