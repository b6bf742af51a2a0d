use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::drought_map::MapContext;
use crate::components::map_controls::ICON_BUTTON_STYLE;

/// Offer `data_url` to the browser as a file download named `file_name`.
fn save_data_url(file_name: &str, data_url: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "failed to create link")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not a link")?;
    anchor.set_href(data_url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// Exports the live map as a PNG.
#[component]
pub fn DownloadMap(
    file_name: String,
    download_in_progress: bool,
    on_change_download: EventHandler<bool>,
) -> Element {
    let ctx = use_context::<MapContext>();

    rsx! {
        button {
            class: "download-button",
            style: ICON_BUTTON_STYLE,
            title: "Download map image",
            "aria-label": "Download map image",
            disabled: download_in_progress,
            onclick: move |_| {
                let file_name = file_name.clone();
                let handle = ctx.map.read().clone();
                async move {
                    let Some(handle) = handle else {
                        warn!("download requested before the map was created");
                        return;
                    };
                    on_change_download.call(true);
                    let result = handle
                        .to_png_data_url()
                        .await
                        .and_then(|url| save_data_url(&file_name, &url));
                    match result {
                        Ok(()) => info!(file = %file_name, "map image exported"),
                        Err(e) => warn!(error = %e, "map export failed"),
                    }
                    on_change_download.call(false);
                }
            },
            if download_in_progress {
                span { class: "spinner small" }
            } else {
                svg { class: "icon", "viewBox": "0 0 24 24", "aria-hidden": "true",
                    path { d: "M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z" }
                }
            }
        }
    }
}
