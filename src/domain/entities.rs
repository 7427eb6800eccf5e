use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest area (sq ft) the prediction form accepts.
pub const MIN_AREA_SQFT: f64 = 100.0;

/// Property details collected by the prediction form.
///
/// `location` and `property_type` stay free-form strings: anything the
/// valuation tables don't know resolves to a default coefficient instead of
/// being rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAttributes {
    pub location: String,
    pub property_type: String,
    /// Built-up area in square feet.
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub parking: u32,
    #[serde(default)]
    pub has_garden: bool,
    #[serde(default)]
    pub has_security: bool,
    #[serde(default)]
    pub has_power_backup: bool,
}

impl Default for PropertyAttributes {
    fn default() -> Self {
        Self {
            location: String::new(),
            property_type: String::new(),
            area: 1000.0,
            bedrooms: 2,
            bathrooms: 2,
            parking: 1,
            has_garden: false,
            has_security: false,
            has_power_backup: false,
        }
    }
}

impl PropertyAttributes {
    /// Form-level checks. The valuation engine never calls this; it accepts
    /// whatever it is given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        if self.property_type.trim().is_empty() {
            return Err(ValidationError::MissingPropertyType);
        }
        if !self.area.is_finite() || self.area < MIN_AREA_SQFT {
            return Err(ValidationError::AreaTooSmall);
        }
        if self.bedrooms < 1 {
            return Err(ValidationError::NoBedrooms);
        }
        if self.bathrooms < 1 {
            return Err(ValidationError::NoBathrooms);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Location is required")]
    MissingLocation,
    #[error("Property type is required")]
    MissingPropertyType,
    #[error("Area must be at least 100 sq ft")]
    AreaTooSmall,
    #[error("At least 1 bedroom required")]
    NoBedrooms,
    #[error("At least 1 bathroom required")]
    NoBathrooms,
}

/// Property categories offered by the form, each with its own price multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    IndependentHouse,
    Villa,
    Penthouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::IndependentHouse,
        PropertyType::Villa,
        PropertyType::Penthouse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::IndependentHouse => "Independent House",
            PropertyType::Villa => "Villa",
            PropertyType::Penthouse => "Penthouse",
        }
    }

    /// Exact, case-sensitive match on the form label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            PropertyType::Apartment => 1.0,
            PropertyType::IndependentHouse => 1.2,
            PropertyType::Villa => 1.4,
            PropertyType::Penthouse => 1.6,
        }
    }
}

/// A valuation result stored for a signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPrediction {
    /// Millisecond timestamp of the save. Two saves in the same
    /// millisecond share an id.
    pub id: i64,
    pub price: f64,
    /// ISO-8601 UTC timestamp, e.g. `2026-10-18T09:30:00.000Z`.
    pub date: String,
    pub formatted_price: String,
}

/// Client-side session identity. Nothing here is verified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Name if one was given, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Neighborhood with a fixed map position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnownLocation {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Showcase listing for the "recent valuations" section.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleProperty {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub price: f64,
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_values_need_location_and_type() {
        let attrs = PropertyAttributes::default();
        assert_eq!(attrs.validate(), Err(ValidationError::MissingLocation));

        let attrs = PropertyAttributes {
            location: "Madhapur".into(),
            ..PropertyAttributes::default()
        };
        assert_eq!(attrs.validate(), Err(ValidationError::MissingPropertyType));
    }

    #[test]
    fn validate_enforces_minimum_area_and_rooms() {
        let valid = PropertyAttributes {
            location: "Madhapur".into(),
            property_type: "Villa".into(),
            ..PropertyAttributes::default()
        };
        assert_eq!(valid.validate(), Ok(()));

        let small = PropertyAttributes { area: 99.0, ..valid.clone() };
        assert_eq!(small.validate(), Err(ValidationError::AreaTooSmall));

        let no_beds = PropertyAttributes { bedrooms: 0, ..valid.clone() };
        assert_eq!(no_beds.validate(), Err(ValidationError::NoBedrooms));

        let no_baths = PropertyAttributes { bathrooms: 0, ..valid };
        assert_eq!(no_baths.validate(), Err(ValidationError::NoBathrooms));
    }

    #[test]
    fn property_type_labels_round_trip() {
        for kind in PropertyType::ALL {
            assert_eq!(PropertyType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(PropertyType::from_label("villa"), None);
    }

    #[test]
    fn saved_prediction_uses_camel_case_keys() {
        let record = SavedPrediction {
            id: 1_700_000_000_000,
            price: 8_500_000.0,
            date: "2026-10-18T09:30:00.000Z".into(),
            formatted_price: "₹85.00 Lakhs".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"formattedPrice\""));
        let back: SavedPrediction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn user_without_name_displays_email() {
        let user = User {
            id: "user_1".into(),
            email: "asha@example.com".into(),
            name: None,
        };
        assert_eq!(user.display_name(), "asha@example.com");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("name"));
    }
}
