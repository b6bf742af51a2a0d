use dioxus::prelude::*;

const SPINNER_SIZE_PX: u32 = 200;

/// Transparent backdrop with a spinner, shown over the map until the
/// category values arrive. It lets pointer events through.
#[component]
pub fn LoadingOverlay() -> Element {
    rsx! {
        div { class: "map-backdrop",
            div {
                class: "spinner",
                role: "progressbar",
                "aria-busy": "true",
                "aria-label": "Loading drought categories",
                style: "width: {SPINNER_SIZE_PX}px; height: {SPINNER_SIZE_PX}px;",
            }
        }
    }
}
