use dioxus::prelude::*;

use home_value_oracle::domain::{AppState, SAMPLE_PROPERTIES};

use crate::ui::components::{
    prediction_form::PredictionForm, property_card::PropertyCard, result_display::ResultDisplay,
};

const STEPS: [(&str, &str); 3] = [
    (
        "Enter Property Details",
        "Provide the location, type, size and amenities of your property.",
    ),
    (
        "Get Instant Valuation",
        "Our model combines local price rates with property features.",
    ),
    (
        "Save and Compare",
        "Sign in to keep your predictions and revisit them later.",
    ),
];

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let has_result = state.with(|st| st.predicted_price.is_some());

    rsx! {
        section { class: "hero",
            div { class: "container",
                h1 { class: "hero-title", "Know Your Property's True Value" }
                p { class: "hero-sub",
                    "Accurate price estimates for homes across Hyderabad, based on location, size and amenities."
                }
                a { class: "btn btn-primary", href: "#predict", "Get Started" }
            }
        }

        section { class: "section",
            div { class: "container",
                div { class: "section-head",
                    h2 { "How It Works" }
                }
                div { class: "steps",
                    for (index, (title, body)) in STEPS.iter().enumerate() {
                        div { key: "{index}", class: "step",
                            span { class: "step-num", "{index + 1}" }
                            h3 { "{title}" }
                            p { class: "muted", "{body}" }
                        }
                    }
                }
            }
        }

        section { id: "predict", class: "section section-alt",
            div { class: "container",
                if has_result {
                    ResultDisplay {}
                } else {
                    PredictionForm {}
                }
            }
        }

        section { class: "section",
            div { class: "container",
                div { class: "section-head",
                    h2 { "Recent Property Valuations" }
                    p { class: "muted", "Explore valuations of popular properties across Hyderabad" }
                }
                div { class: "property-grid",
                    for property in SAMPLE_PROPERTIES {
                        PropertyCard { key: "{property.id}", property }
                    }
                }
            }
        }
    }
}
