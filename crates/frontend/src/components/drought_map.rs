use std::rc::Rc;

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use drought_shared::commands::FeatureEvent;
use drought_shared::models::{Category, DroughtValues, MapType};
use drought_shared::palette::CategoryPalette;
use drought_shared::settings::{MapOptions, MapSettings};
use drought_shared::style::{county_style, grid_style, FeatureStyle};
use drought_shared::view::{DataReadiness, DragAction, DragBinding, EditMode, LayerVisibility};
use futures::StreamExt;
use geojson::FeatureCollection;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use crate::components::category_legend::CategoryLegend;
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::map_controls::{MapButtonGroup, MapTypeButton};
use crate::leaflet::{self, GeoJsonOverlay, MapHandle};

const MAP_CANVAS_ID: &str = "drought-map-canvas";

/// How often, and how many times, to check whether the Leaflet script is up.
const LEAFLET_POLL_MS: u32 = 50;
const LEAFLET_POLL_ATTEMPTS: u32 = 200;

/// The live Leaflet map, shared with controls that act on it (PNG export).
#[derive(Clone, Copy)]
pub struct MapContext {
    pub map: Signal<Option<Rc<MapHandle>>>,
}

async fn wait_for_leaflet() -> bool {
    for _ in 0..LEAFLET_POLL_ATTEMPTS {
        if leaflet::leaflet_loaded() {
            return true;
        }
        TimeoutFuture::new(LEAFLET_POLL_MS).await;
    }
    leaflet::leaflet_loaded()
}

fn canvas_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(MAP_CANVAS_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Grid style function over a snapshot of the current values and palette.
fn grid_styler(
    values: Option<DroughtValues>,
    palette: CategoryPalette,
) -> impl Fn(&str) -> FeatureStyle + 'static {
    move |fips: &str| grid_style(fips, values.as_ref(), &palette)
}

/// Choropleth of drought categories per grid cell with county outlines,
/// legend, edit/undo/download controls and a loading overlay.
///
/// Holds no editor state: every flag comes from the parent and every
/// interaction is reported back through the handlers.
#[component]
#[allow(clippy::too_many_arguments)]
pub fn MapDroughtMonitor(
    county_boundaries: ReadSignal<FeatureCollection>,
    grid_boundaries: ReadSignal<FeatureCollection>,
    category: String,
    categories: ReadSignal<Vec<Category>>,
    values: ReadSignal<Option<DroughtValues>>,
    on_each_feature: EventHandler<FeatureEvent>,
    editable: ReadSignal<bool>,
    map_type: MapType,
    download_in_progress: bool,
    on_change_editable: EventHandler<()>,
    on_change_category: EventHandler<String>,
    on_change_map_type: EventHandler<MapType>,
    on_change_download: EventHandler<bool>,
    reset_map_values: EventHandler<()>,
) -> Element {
    let settings = MapSettings::default();

    let mut map = use_signal(|| None::<Rc<MapHandle>>);
    let mut drag = use_signal(DragBinding::default);
    let mut grid_layer = use_signal(|| None::<GeoJsonOverlay>);
    let mut county_layer = use_signal(|| None::<GeoJsonOverlay>);
    use_context_provider(|| MapContext { map });

    let palette = use_memo(move || CategoryPalette::new(&categories.read()));
    let readiness = use_memo(move || DataReadiness::of(values.read().as_ref()));

    // Leaflet calls back outside the Dioxus runtime; route feature events
    // through a coroutine so the parent's handler runs inside it.
    let feature_events = use_coroutine(move |mut rx: UnboundedReceiver<FeatureEvent>| async move {
        while let Some(event) = rx.next().await {
            on_each_feature.call(event);
        }
    });

    // Drag follows the edit flag: panning is off while editing.
    use_effect(move || {
        let editable = *editable.read();
        let Some(handle) = map.read().clone() else {
            return;
        };
        if let Some(action) = drag.write().sync(editable) {
            handle.set_dragging(action == DragAction::Enable);
            debug!(?action, enabled = handle.dragging_enabled(), "map dragging updated");
        }
    });

    // Boundary layers exist only while values are loaded.
    use_effect(move || {
        let visible = LayerVisibility::of(*readiness.read());
        let Some(handle) = map.read().clone() else {
            return;
        };
        let grid_data = grid_boundaries.read();
        let county_data = county_boundaries.read();

        // Drop any previous layers first so the new ones stack in order.
        grid_layer.set(None);
        county_layer.set(None);
        if !visible.grid {
            return;
        }

        let styler = grid_styler(values.peek().clone(), palette.peek().clone());
        match GeoJsonOverlay::add(&handle, &grid_data, styler) {
            Ok(mut layer) => {
                let tx = feature_events.tx();
                layer.on_feature(Rc::new(move |event| {
                    let _ = tx.unbounded_send(event);
                }));
                grid_layer.set(Some(layer));
            }
            Err(e) => warn!(error = %e, "failed to add grid layer"),
        }
        if visible.county {
            match GeoJsonOverlay::add(&handle, &county_data, |_| county_style()) {
                Ok(layer) => county_layer.set(Some(layer)),
                Err(e) => warn!(error = %e, "failed to add county layer"),
            }
        }
        info!(
            grid = grid_data.features.len(),
            counties = county_data.features.len(),
            "boundary layers added"
        );
    });

    // Recolor cells in place when values or the palette change.
    use_effect(move || {
        let values = values.read().clone();
        let palette = palette.read().clone();
        if let Some(v) = values.as_ref() {
            let unmatched = palette.unmatched_cells(v);
            if unmatched > 0 {
                warn!(unmatched, "cells with unknown categories are drawn white");
            }
        }
        if let Some(layer) = grid_layer.write().as_mut() {
            if let Err(e) = layer.restyle(grid_styler(values, palette)) {
                warn!(error = %e, "failed to restyle grid layer");
            }
        }
    });

    let visible = LayerVisibility::of(*readiness.read());
    let cur_editable = *editable.read();

    rsx! {
        div {
            id: "drought-map",
            class: "drought-map",
            style: "height: {settings.height_px}px; width: {settings.width_px}px;",

            div {
                id: MAP_CANVAS_ID,
                class: "map-container",
                onmounted: move |_| async move {
                    if !wait_for_leaflet().await {
                        warn!("Leaflet did not load; map stays blank");
                        return;
                    }
                    let Some(container) = canvas_element() else {
                        warn!("map container not found");
                        return;
                    };
                    let settings = MapSettings::default();
                    let options = MapOptions {
                        settings: &settings,
                        dragging: EditMode::of(*editable.peek()).allows_dragging(),
                    };
                    match MapHandle::create(&container, &options) {
                        Ok(handle) => {
                            drag.write().reset();
                            map.set(Some(Rc::new(handle)));
                            info!("drought map created");
                        }
                        Err(e) => warn!(error = %e, "failed to create map"),
                    }
                },
            }

            MapButtonGroup {
                editable: cur_editable,
                on_change_editable: on_change_editable,
                reset_map_values: reset_map_values,
                download_in_progress: download_in_progress,
                on_change_download: on_change_download,
            }

            MapTypeButton {
                map_type: map_type,
                on_change_map_type: on_change_map_type,
            }

            CategoryLegend {
                category: category,
                categories: categories,
                on_change_category: on_change_category,
                editable: cur_editable,
                map_type: map_type,
            }

            if visible.loading_overlay {
                LoadingOverlay {}
            }
        }
    }
}
