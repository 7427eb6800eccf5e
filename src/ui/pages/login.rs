use dioxus::prelude::*;

use home_value_oracle::{domain::AppState, infra::LoginRequest};

use crate::{
    app::{sign_in, Route, StoreSlot},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme::{self, Tone},
    },
};

#[component]
pub fn LoginPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let store = use_context::<StoreSlot>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    if let Some(user) = state.with(|st| st.user.clone()) {
        return rsx! {
            div { class: "container",
                div { class: "card narrow",
                    div { class: "card-body",
                        h2 { class: "card-title", "Signed in" }
                        p { class: "muted", "You are signed in as {user.display_name()}." }
                        button {
                            class: theme::btn_block(Tone::Primary),
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            "Go to Dashboard"
                        }
                    }
                }
            }
        };
    }

    let on_submit = move |_| {
        let entered = email();
        if entered.trim().is_empty() || !entered.contains('@') {
            error.set(Some("Please enter a valid email address".to_string()));
            return;
        }

        let request = LoginRequest {
            email: entered,
            name: Some(name()),
            ..LoginRequest::default()
        };
        match sign_in(state, store, request) {
            Ok(user) => {
                error.set(None);
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Welcome, {}!", user.display_name()),
                );
                nav.push(Route::Dashboard {});
            }
            Err(err) => {
                tracing::error!("sign in failed: {err}");
                error.set(Some(format!("Could not sign in: {err}")));
            }
        }
    };

    rsx! {
        div { class: "container",
            div { class: "card narrow",
                div { class: "card-header",
                    h2 { class: "card-title", "Sign In" }
                    p { class: "card-desc", "Sign in to save predictions and view them on your dashboard" }
                }
                div { class: "card-body",
                    div { class: "field",
                        label { class: "field-label", "Email" }
                        input {
                            class: "input",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", "Name (optional)" }
                        input {
                            class: "input",
                            placeholder: "Your name",
                            value: "{name}",
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "error-text", "{message}" }
                    }
                    button {
                        class: theme::btn_block(Tone::Primary),
                        onclick: on_submit,
                        "Sign In"
                    }
                }
            }
        }
    }
}
