use dioxus::prelude::*;

use home_value_oracle::{
    domain::AppState,
    util::version::{version_label, APP_NAME, APP_TAGLINE},
};

use crate::app::{sign_out, Route, StoreSlot};
use crate::ui::components::toast::ToastMessage;
use crate::ui::theme;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let store = use_context::<StoreSlot>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let signed_in = state.with(|st| st.is_authenticated());

    rsx! {
        div { class: "app",
            header { class: "navbar",
                div { class: "container navbar-inner",
                    Link { class: "brand", to: Route::Home {},
                        span { "🏠" }
                        "{APP_NAME}"
                    }
                    nav { class: "nav-links",
                        NavButton {
                            active: matches!(current_route, Route::Home {}),
                            onclick: move |_| { nav.push(Route::Home {}); },
                            label: "Get Prediction",
                        }
                        if signed_in {
                            NavButton {
                                active: matches!(current_route, Route::Dashboard {}),
                                onclick: move |_| { nav.push(Route::Dashboard {}); },
                                label: "Dashboard",
                            }
                            NavButton {
                                active: false,
                                onclick: move |_| {
                                    sign_out(state, store, toasts);
                                    nav.push(Route::Home {});
                                },
                                label: "Logout",
                            }
                        } else {
                            NavButton {
                                active: matches!(current_route, Route::Login {}),
                                onclick: move |_| { nav.push(Route::Login {}); },
                                label: "Login",
                            }
                        }
                    }
                }
            }
            main { class: "page",
                {children}
            }
            footer { class: "footer",
                div { class: "container",
                    span { "{APP_NAME} · {APP_TAGLINE}" }
                    span { "Estimates are indicative only · {version_label()}" }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_link(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
