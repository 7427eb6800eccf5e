use dioxus::prelude::*;

use home_value_oracle::domain::{format_saved_date, AppState};

use crate::{
    app::{delete_all_predictions, delete_prediction, sign_out, Route, StoreSlot},
    ui::{
        components::toast::ToastMessage,
        theme::{self, Tone},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Predictions,
    Profile,
    Settings,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Predictions, Tab::Profile, Tab::Settings];

    fn label(self) -> &'static str {
        match self {
            Tab::Predictions => "Saved Predictions",
            Tab::Profile => "Profile",
            Tab::Settings => "Settings",
        }
    }
}

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut active = use_signal(|| Tab::Predictions);

    use_effect(move || {
        if !state.with(|st| st.is_authenticated()) {
            nav.replace(Route::Login {});
        }
    });

    let Some(user) = state.with(|st| st.user.clone()) else {
        return rsx! { Fragment {} };
    };

    rsx! {
        div { class: "container",
            div { class: "section-head",
                h1 { "Dashboard" }
                p { class: "muted", "Welcome back, {user.display_name()}" }
            }
            div { class: "tabs",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: theme::tab(active() == tab),
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            {match active() {
                Tab::Predictions => rsx! { SavedPredictions {} },
                Tab::Profile => rsx! { ProfilePanel {} },
                Tab::Settings => rsx! {
                    div { class: "card",
                        div { class: "card-body",
                            h3 { class: "card-title", "Account Settings" }
                            p { class: "muted", "Settings functionality coming soon..." }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn SavedPredictions() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let store = use_context::<StoreSlot>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let saved = state.with(|st| st.saved.clone());

    if saved.is_empty() {
        return rsx! {
            div { class: "card",
                div { class: "card-body empty",
                    p { "You haven't saved any predictions yet." }
                    button {
                        class: theme::btn(Tone::Primary),
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "Make a Prediction"
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "Your Saved Predictions" }
                button {
                    class: theme::btn(Tone::Danger),
                    onclick: move |_| delete_all_predictions(state, store, toasts),
                    "Delete All"
                }
            }
            div { class: "card-body list",
                for record in saved {
                    div { key: "{record.id}", class: "list-row",
                        div {
                            p { class: "property-price", "{record.formatted_price}" }
                            p { class: "muted", "Saved on {format_saved_date(&record.date)}" }
                        }
                        div { class: "row-actions",
                            button {
                                class: theme::btn(Tone::Outline),
                                onclick: move |_| {
                                    state.with_mut(|st| st.show_prediction(None, record.price));
                                    nav.push(Route::Home {});
                                },
                                "View"
                            }
                            button {
                                class: theme::btn(Tone::Ghost),
                                onclick: move |_| delete_prediction(state, store, toasts, record.id),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfilePanel() -> Element {
    let state = use_context::<Signal<AppState>>();
    let store = use_context::<StoreSlot>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let Some(user) = state.with(|st| st.user.clone()) else {
        return rsx! { Fragment {} };
    };
    let name = user.name.clone().unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        div { class: "card",
            div { class: "card-body",
                h3 { class: "card-title", "Profile Information" }
                div { class: "profile-field",
                    span { class: "field-label", "Name" }
                    span { "{name}" }
                }
                div { class: "profile-field",
                    span { class: "field-label", "Email" }
                    span { "{user.email}" }
                }
                div { class: "profile-field",
                    span { class: "field-label", "User ID" }
                    span { class: "muted", "{user.id}" }
                }
            }
            div { class: "card-footer",
                button {
                    class: theme::btn(Tone::Danger),
                    onclick: move |_| {
                        sign_out(state, store, toasts);
                        nav.push(Route::Home {});
                    },
                    "Logout"
                }
            }
        }
    }
}
