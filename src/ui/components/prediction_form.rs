use dioxus::prelude::*;

use home_value_oracle::domain::{AppState, PropertyAttributes, PropertyType};

use crate::{
    app::{run_estimate, Jitter},
    ui::{
        components::{
            location_picker::LocationPicker,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Tone},
    },
};

/// Raw form input before parsing.
#[derive(Clone, Debug, PartialEq)]
struct FormFields {
    location: String,
    property_type: String,
    area: String,
    bedrooms: String,
    bathrooms: String,
    parking: String,
    has_garden: bool,
    has_security: bool,
    has_power_backup: bool,
}

impl Default for FormFields {
    fn default() -> Self {
        let defaults = PropertyAttributes::default();
        Self {
            location: defaults.location,
            property_type: defaults.property_type,
            area: format!("{}", defaults.area),
            bedrooms: defaults.bedrooms.to_string(),
            bathrooms: defaults.bathrooms.to_string(),
            parking: defaults.parking.to_string(),
            has_garden: defaults.has_garden,
            has_security: defaults.has_security,
            has_power_backup: defaults.has_power_backup,
        }
    }
}

fn parse_form(fields: &FormFields) -> Result<PropertyAttributes, String> {
    let area = fields
        .area
        .trim()
        .parse::<f64>()
        .map_err(|_| "Area must be a number".to_string())?;
    let count = |raw: &str, label: &str| {
        raw.trim()
            .parse::<u32>()
            .map_err(|_| format!("{label} must be a whole number"))
    };

    let attrs = PropertyAttributes {
        location: fields.location.clone(),
        property_type: fields.property_type.clone(),
        area,
        bedrooms: count(&fields.bedrooms, "Bedrooms")?,
        bathrooms: count(&fields.bathrooms, "Bathrooms")?,
        parking: count(&fields.parking, "Parking")?,
        has_garden: fields.has_garden,
        has_security: fields.has_security,
        has_power_backup: fields.has_power_backup,
    };
    attrs.validate().map_err(|err| err.to_string())?;
    Ok(attrs)
}

#[component]
pub fn PredictionForm() -> Element {
    let state = use_context::<Signal<AppState>>();
    let jitter = use_context::<Signal<Jitter>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut fields = use_signal(FormFields::default);
    let mut error = use_signal(|| None::<String>);
    let mut show_picker = use_signal(|| false);

    let on_submit = move |_| match parse_form(&fields()) {
        Ok(attrs) => {
            error.set(None);
            let price = run_estimate(state, jitter, attrs);
            tracing::info!(price, "prediction ready");
        }
        Err(message) => {
            push_toast(toasts, ToastKind::Error, message.clone());
            error.set(Some(message));
        }
    };

    let current = fields();

    rsx! {
        div { class: "card narrow",
            div { class: "card-header",
                h2 { class: "card-title", "Get Your Property Valuation" }
                p { class: "card-desc", "Enter your property details to receive an AI-powered price prediction" }
            }
            div { class: "card-body",
                div { class: "form-grid",
                    div { class: "field",
                        label { class: "field-label", "Location" }
                        div { class: "field-row",
                            input {
                                class: "input",
                                readonly: true,
                                placeholder: "Select location",
                                value: "{current.location}",
                            }
                            button {
                                class: theme::btn(Tone::Outline),
                                r#type: "button",
                                onclick: move |_| show_picker.set(true),
                                "📍 Map"
                            }
                        }
                    }
                    div { class: "field",
                        label { class: "field-label", "Property Type" }
                        select {
                            class: "select",
                            value: "{current.property_type}",
                            onchange: move |evt: FormEvent| fields.with_mut(|f| f.property_type = evt.value()),
                            option { value: "", disabled: true, "Select property type" }
                            for kind in PropertyType::ALL {
                                option { key: "{kind.label()}", value: kind.label(), "{kind.label()}" }
                            }
                        }
                    }
                    NumberField {
                        label: "Area (sq ft)",
                        value: current.area.clone(),
                        on_input: move |value| fields.with_mut(|f| f.area = value),
                    }
                    NumberField {
                        label: "Bedrooms",
                        value: current.bedrooms.clone(),
                        on_input: move |value| fields.with_mut(|f| f.bedrooms = value),
                    }
                    NumberField {
                        label: "Bathrooms",
                        value: current.bathrooms.clone(),
                        on_input: move |value| fields.with_mut(|f| f.bathrooms = value),
                    }
                    NumberField {
                        label: "Parking Spaces",
                        value: current.parking.clone(),
                        on_input: move |value| fields.with_mut(|f| f.parking = value),
                    }
                }

                if show_picker() {
                    LocationPicker {
                        selected: current.location.clone(),
                        on_select: move |name: String| {
                            fields.with_mut(|f| f.location = name);
                            show_picker.set(false);
                        },
                        on_close: move |_| show_picker.set(false),
                    }
                }

                div { class: "checks",
                    AmenityCheck {
                        label: "Garden/Lawn",
                        checked: current.has_garden,
                        on_change: move |value| fields.with_mut(|f| f.has_garden = value),
                    }
                    AmenityCheck {
                        label: "24x7 Security",
                        checked: current.has_security,
                        on_change: move |value| fields.with_mut(|f| f.has_security = value),
                    }
                    AmenityCheck {
                        label: "Power Backup",
                        checked: current.has_power_backup,
                        on_change: move |value| fields.with_mut(|f| f.has_power_backup = value),
                    }
                }

                if let Some(message) = error() {
                    p { class: "error-text", "{message}" }
                }

                button {
                    class: theme::btn_block(Tone::Primary),
                    r#type: "button",
                    onclick: on_submit,
                    "Get Price Prediction"
                }
            }
        }
    }
}

#[component]
fn NumberField(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: "input",
                r#type: "number",
                min: "0",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}

#[component]
fn AmenityCheck(label: &'static str, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "check",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |evt: FormEvent| on_change.call(evt.checked()),
            }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            location: "Kondapur".into(),
            property_type: "Apartment".into(),
            ..FormFields::default()
        }
    }

    #[test]
    fn defaults_parse_once_location_and_type_are_chosen() {
        let attrs = parse_form(&filled()).unwrap();
        assert_eq!(attrs.area, 1000.0);
        assert_eq!((attrs.bedrooms, attrs.bathrooms, attrs.parking), (2, 2, 1));
        assert_eq!(parse_form(&FormFields::default()).unwrap_err(), "Location is required");
    }

    #[test]
    fn bad_numbers_are_reported() {
        let fields = FormFields { area: "big".into(), ..filled() };
        assert_eq!(parse_form(&fields).unwrap_err(), "Area must be a number");

        let fields = FormFields { parking: "-1".into(), ..filled() };
        assert_eq!(parse_form(&fields).unwrap_err(), "Parking must be a whole number");

        let fields = FormFields { area: "50".into(), ..filled() };
        assert_eq!(parse_form(&fields).unwrap_err(), "Area must be at least 100 sq ft");
    }
}
