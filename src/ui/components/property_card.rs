use dioxus::prelude::*;

use home_value_oracle::domain::{format_inr, group_indian, SampleProperty};

#[component]
pub fn PropertyCard(property: SampleProperty) -> Element {
    let area = group_indian(property.area as i64);

    rsx! {
        div { class: "card",
            img { class: "property-image", src: property.image, alt: property.title }
            div { class: "property-body",
                h3 { class: "card-title", "{property.title}" }
                p { class: "muted", "📍 {property.location}" }
                p { class: "property-price", "{format_inr(property.price)}" }
                div { class: "property-meta",
                    span { "{property.bedrooms} Beds" }
                    span { "{property.bathrooms} Baths" }
                    span { "{area} sq ft" }
                }
                div { class: "tags",
                    for tag in property.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
