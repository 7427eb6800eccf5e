use std::time::Duration;

use dioxus::prelude::*;

use home_value_oracle::util::generate_id;

use crate::ui::theme;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| {
        if entries.len() >= MAX_VISIBLE {
            entries.remove(0);
        }
        entries.push(ToastMessage::new(kind, text));
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toasts",
            ul {
                for message in messages {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let (class, icon) = theme::toast(message.kind);
    let dismiss_id = message.id.clone();
    let mut toasts = toasts;

    rsx! {
        li { class,
            span { "{icon}" }
            p { "{message.text}" }
            button {
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}
