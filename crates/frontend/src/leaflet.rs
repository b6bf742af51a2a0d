//! Thin `wasm-bindgen` bindings to the parts of Leaflet (and the
//! `leaflet-image` plugin) the drought map uses. Leaflet itself is loaded
//! from a `<script>` tag by the app shell.

use std::rc::Rc;

use drought_shared::commands::{FeatureEvent, FeatureEventKind};
use drought_shared::models::properties_fips;
use drought_shared::settings::{MapOptions, TileOptions, TILE_URL};
use drought_shared::style::FeatureStyle;
use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container: &web_sys::HtmlElement, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn dragging(this: &LeafletMap) -> Handler;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Layer);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    pub type Handler;

    #[wasm_bindgen(method)]
    fn enable(this: &Handler);

    #[wasm_bindgen(method)]
    fn disable(this: &Handler);

    #[wasm_bindgen(method)]
    fn enabled(this: &Handler) -> bool;

    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method)]
    fn on(this: &Layer, event: &str, handler: &Function) -> Layer;

    #[wasm_bindgen(method, js_name = setStyle)]
    fn set_style(this: &Layer, style: &Function) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON)]
    fn geo_json(data: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_name = leafletImage)]
    fn leaflet_image(map: &LeafletMap, done: &Function);
}

/// Whether the Leaflet script has finished loading.
pub fn leaflet_loaded() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

/// FIPS id of a feature object handed back by Leaflet.
fn feature_fips(feature: &JsValue) -> Option<String> {
    let props = Reflect::get(feature, &JsValue::from_str("properties")).ok()?;
    let props: serde_json::Value = serde_wasm_bindgen::from_value(props).ok()?;
    properties_fips(&props)
}

/// A live Leaflet map with its base tile layer.
pub struct MapHandle {
    map: LeafletMap,
}

impl MapHandle {
    pub fn create(container: &web_sys::HtmlElement, options: &MapOptions<'_>) -> Result<Self, String> {
        let map = create_map(container, &to_js(options)?).map_err(js_error)?;
        tile_layer(TILE_URL, &to_js(&TileOptions::default())?).add_to(&map);
        Ok(MapHandle { map })
    }

    pub fn set_dragging(&self, enabled: bool) {
        let handler = self.map.dragging();
        if enabled {
            handler.enable();
        } else {
            handler.disable();
        }
    }

    pub fn dragging_enabled(&self) -> bool {
        self.map.dragging().enabled()
    }

    /// Render the map to a PNG data URL.
    pub async fn to_png_data_url(&self) -> Result<String, String> {
        let (tx, rx) = promise_channel();
        let done = Closure::once_into_js(move |err: JsValue, canvas: JsValue| {
            let result = if err.is_null() || err.is_undefined() {
                canvas
                    .dyn_into::<web_sys::HtmlCanvasElement>()
                    .map_err(|_| "leaflet-image returned no canvas".to_string())
                    .and_then(|c| c.to_data_url_with_type("image/png").map_err(js_error))
            } else {
                Err(js_error(err))
            };
            tx(result);
        });
        leaflet_image(&self.map, done.unchecked_ref());
        rx.await
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.map.remove();
    }
}

/// One-shot callback bridged into a future through a JS promise.
fn promise_channel() -> (
    impl FnOnce(Result<String, String>),
    impl std::future::Future<Output = Result<String, String>>,
) {
    let mut resolve_slot: Option<Function> = None;
    let mut reject_slot: Option<Function> = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        resolve_slot = Some(resolve);
        reject_slot = Some(reject);
    });
    let send = move |result: Result<String, String>| {
        let _ = match result {
            Ok(url) => resolve_slot.map(|f| f.call1(&JsValue::NULL, &JsValue::from_str(&url))),
            Err(e) => reject_slot.map(|f| f.call1(&JsValue::NULL, &JsValue::from_str(&e))),
        };
    };
    let recv = async move {
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|v| v.as_string().unwrap_or_default())
            .map_err(js_error)
    };
    (send, recv)
}

type StyleFn = Closure<dyn FnMut(JsValue) -> JsValue>;
type EventFn = Closure<dyn FnMut(JsValue)>;

/// A GeoJSON overlay attached to a map. The closures Leaflet calls back into
/// live as long as this value; dropping it removes the layer.
pub struct GeoJsonOverlay {
    layer: Layer,
    map: LeafletMap,
    _style: StyleFn,
    listeners: Vec<EventFn>,
}

impl GeoJsonOverlay {
    /// Add `data` to the map, styling each feature by its FIPS id.
    pub fn add<S>(handle: &MapHandle, data: &geojson::FeatureCollection, style: S) -> Result<Self, String>
    where
        S: Fn(&str) -> FeatureStyle + 'static,
    {
        let style = style_closure(style);
        let options = js_sys::Object::new();
        Reflect::set(&options, &JsValue::from_str("style"), style.as_ref())
            .map_err(js_error)?;
        let layer = geo_json(&to_js(data)?, &options).add_to(&handle.map);
        Ok(GeoJsonOverlay {
            layer,
            map: handle.map.clone(),
            _style: style,
            listeners: Vec::new(),
        })
    }

    /// Forward clicks and button-held hovers on any feature of this overlay.
    ///
    /// Events bubble from each feature's layer to the group, so one listener
    /// per event type covers every feature.
    pub fn on_feature(&mut self, handler: Rc<dyn Fn(FeatureEvent)>) {
        for (event, kind) in [
            ("click", FeatureEventKind::Click),
            ("mouseover", FeatureEventKind::PaintOver),
        ] {
            let handler = handler.clone();
            let closure: EventFn = Closure::new(move |e: JsValue| {
                if kind == FeatureEventKind::PaintOver && !primary_button_held(&e) {
                    return;
                }
                let Some(fips) = event_feature(&e).as_ref().and_then(feature_fips) else {
                    return;
                };
                handler(FeatureEvent { fips, kind });
            });
            self.layer.on(event, closure.as_ref().unchecked_ref());
            self.listeners.push(closure);
        }
    }

    /// Re-run styling for every feature with a new style function.
    ///
    /// `options.style` is pointed at the new function before the old one is
    /// dropped, since Leaflet reads it again on `resetStyle` and `addData`.
    pub fn restyle<S>(&mut self, style: S) -> Result<(), String>
    where
        S: Fn(&str) -> FeatureStyle + 'static,
    {
        let style = style_closure(style);
        let options = Reflect::get(&self.layer, &JsValue::from_str("options")).map_err(js_error)?;
        Reflect::set(&options, &JsValue::from_str("style"), style.as_ref()).map_err(js_error)?;
        self.layer.set_style(style.as_ref().unchecked_ref());
        self._style = style;
        Ok(())
    }
}

impl Drop for GeoJsonOverlay {
    fn drop(&mut self) {
        self.map.remove_layer(&self.layer);
    }
}

fn style_closure<S>(style: S) -> StyleFn
where
    S: Fn(&str) -> FeatureStyle + 'static,
{
    Closure::new(move |feature: JsValue| {
        let fips = feature_fips(&feature).unwrap_or_default();
        to_js(&style(&fips)).unwrap_or(JsValue::UNDEFINED)
    })
}

/// The feature behind a group event: `propagatedFrom` on Leaflet 1.8+,
/// `layer` before that.
fn event_feature(event: &JsValue) -> Option<JsValue> {
    let source = ["propagatedFrom", "layer"]
        .iter()
        .filter_map(|key| Reflect::get(event, &JsValue::from_str(key)).ok())
        .find(|v| !v.is_undefined() && !v.is_null())?;
    Reflect::get(&source, &JsValue::from_str("feature"))
        .ok()
        .filter(|f| !f.is_undefined())
}

fn primary_button_held(event: &JsValue) -> bool {
    Reflect::get(event, &JsValue::from_str("originalEvent"))
        .ok()
        .and_then(|e| e.dyn_into::<web_sys::MouseEvent>().ok())
        .is_some_and(|e| e.buttons() & 1 == 1)
}
