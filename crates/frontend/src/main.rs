mod api;
mod components;
mod leaflet;
mod pages;

use dioxus::prelude::*;
use drought_shared::models::MapType;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/view/:map_type")]
    View { map_type: MapType },
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::editor::Editor { initial_map_type: MapType::DmCat }
    }
}

#[component]
fn View(map_type: MapType) -> Element {
    rsx! {
        pages::editor::Editor { initial_map_type: map_type }
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_IMAGE_JS: &str = "https://unpkg.com/leaflet-image@0.4.0/leaflet-image.js";

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: LEAFLET_CSS }
        document::Stylesheet { href: CSS }
        document::Script { src: LEAFLET_JS }
        document::Script { src: LEAFLET_IMAGE_JS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
