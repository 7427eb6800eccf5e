use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div { class: "stat",
            p { class: "stat-label", "{title}" }
            p { class: "stat-value", "{value}" }
            if let Some(desc) = description {
                p { class: "stat-desc", "{desc}" }
            }
        }
    }
}
