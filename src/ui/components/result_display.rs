use dioxus::prelude::*;

use home_value_oracle::domain::{
    breakdown, format_inr, group_indian, valuation::DISPLAY_CONFIDENCE_PCT, AppState,
};

use crate::{
    app::{save_current_prediction, StoreSlot},
    ui::{
        components::{kpi_card::KpiCard, toast::ToastMessage},
        theme::{self, Tone},
    },
};

#[component]
pub fn ResultDisplay() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let store = use_context::<StoreSlot>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let Some(summary) = state.with(|st| st.result_summary()) else {
        return rsx! { Fragment {} };
    };
    let details = state.with(|st| st.last_attributes.as_ref().map(breakdown));
    let location = state.with(|st| {
        st.last_attributes
            .as_ref()
            .map(|attrs| format!("{}, Hyderabad", attrs.location))
    });

    let range = format!("{} - {}", format_inr(summary.low), format_inr(summary.high));
    let per_sqft = summary
        .per_sqft
        .map(|rate| format!("₹{}", group_indian(rate.round() as i64)))
        .unwrap_or_else(|| "n/a".to_string());

    rsx! {
        div { class: "card narrow",
            div { class: "card-header accent",
                h2 { class: "card-title", "Estimated Property Value" }
                if let Some(location) = location {
                    p { class: "card-desc", "{location}" }
                }
            }
            div { class: "card-body",
                p { class: "result-price", "{format_inr(summary.price)}" }
                div { class: "stats",
                    KpiCard {
                        title: "Price Range".to_string(),
                        value: range,
                        description: Some("±10% of the estimate".to_string()),
                    }
                    KpiCard {
                        title: "Price per sq ft".to_string(),
                        value: per_sqft,
                        description: None,
                    }
                    KpiCard {
                        title: "Confidence".to_string(),
                        value: format!("{DISPLAY_CONFIDENCE_PCT}%"),
                        description: Some("Model accuracy on recent sales".to_string()),
                    }
                }

                if let Some(parts) = details {
                    table { class: "breakdown",
                        tbody {
                            tr {
                                td { "Base rate" }
                                td { "₹{group_indian(parts.rate_per_sqft as i64)} / sq ft" }
                            }
                            tr {
                                td { "Land value" }
                                td { "{format_inr(parts.land_value)}" }
                            }
                            tr {
                                td { "Property type factor" }
                                td { "×{parts.type_multiplier:.1}" }
                            }
                            tr {
                                td { "Rooms and parking" }
                                td { "+{format_inr(parts.room_increments)}" }
                            }
                            tr {
                                td { "Amenity premium" }
                                td { "×{parts.amenity_multiplier:.4}" }
                            }
                        }
                    }
                }
            }
            div { class: "card-footer actions",
                button {
                    class: theme::btn(Tone::Outline),
                    onclick: move |_| state.with_mut(|st| st.reset_prediction()),
                    "New Prediction"
                }
                button {
                    class: theme::btn(Tone::Primary),
                    onclick: move |_| save_current_prediction(state, store, toasts),
                    "Save Result"
                }
            }
        }
    }
}
