//! Neighborhood chooser over the static coordinate table; stands in for a
//! map widget.

use dioxus::prelude::*;

use home_value_oracle::domain::{
    catalog::CITY_CENTER, find_location, within_city, KnownLocation, KNOWN_LOCATIONS,
};

use crate::ui::theme;

#[component]
pub fn LocationPicker(
    selected: String,
    on_select: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let (center_lat, center_lng) = CITY_CENTER;
    let pinned = find_location(&selected);
    let pickable: Vec<KnownLocation> = KNOWN_LOCATIONS
        .into_iter()
        .filter(|loc| within_city(loc.latitude, loc.longitude))
        .collect();

    rsx! {
        div { class: "picker",
            div { class: "picker-head",
                div {
                    strong { "Pick a neighborhood" }
                    if let Some(loc) = pinned {
                        span { class: "coords", "{loc.name}: {loc.latitude:.4}° N, {loc.longitude:.4}° E" }
                    } else {
                        span { class: "coords", "Hyderabad centre {center_lat:.4}° N, {center_lng:.4}° E" }
                    }
                }
                button {
                    class: theme::btn(theme::Tone::Ghost),
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            div { class: "picker-grid",
                for loc in pickable {
                    button {
                        key: "{loc.name}",
                        r#type: "button",
                        class: theme::picker_item(selected == loc.name),
                        onclick: move |_| on_select.call(loc.name.to_string()),
                        "{loc.name}"
                        span { class: "coords", "{loc.latitude:.4}, {loc.longitude:.4}" }
                    }
                }
            }
        }
    }
}
