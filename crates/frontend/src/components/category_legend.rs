use dioxus::prelude::*;
use drought_shared::models::{Category, MapType};

/// Categories can only be picked while editing the categorization view;
/// otherwise the list is a read-only legend.
pub(crate) fn legend_selectable(editable: bool, map_type: MapType) -> bool {
    editable && map_type == MapType::DmCat
}

/// Radio-style category picker that doubles as the map legend.
#[component]
pub fn CategorySelect(
    selected: String,
    categories: ReadSignal<Vec<Category>>,
    on_change: EventHandler<String>,
    editable: bool,
    map_type: MapType,
) -> Element {
    let selectable = legend_selectable(editable, map_type);

    rsx! {
        div {
            class: if selectable { "category-select" } else { "category-select readonly" },
            role: "radiogroup",
            "aria-label": "Drought category",
            for c in categories.read().iter().cloned() {
                button {
                    key: "{c.value}",
                    class: if c.value == selected { "category-option selected" } else { "category-option" },
                    role: "radio",
                    "aria-checked": "{c.value == selected}",
                    disabled: !selectable,
                    onclick: {
                        let value = c.value.clone();
                        move |_| on_change.call(value.clone())
                    },
                    span { class: "swatch", style: "background-color: {c.color};" }
                    span { class: "label", "{c.value}" }
                }
            }
        }
    }
}

#[component]
pub fn CategoryLegend(
    category: String,
    categories: ReadSignal<Vec<Category>>,
    on_change_category: EventHandler<String>,
    editable: bool,
    map_type: MapType,
) -> Element {
    rsx! {
        div { id: "cat-legend", class: "leaflet-bottom leaflet-left",
            div { class: "leaflet-control leaflet-bar",
                CategorySelect {
                    selected: category,
                    categories: categories,
                    on_change: on_change_category,
                    editable: editable,
                    map_type: map_type,
                }
            }
        }
    }
}
