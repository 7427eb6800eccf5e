use rand::Rng;

use super::entities::{PropertyAttributes, PropertyType};

/// Rate per sq ft for neighborhoods missing from [`LOCATION_RATES`].
pub const DEFAULT_RATE_PER_SQFT: f64 = 5000.0;

/// Multiplier for property types the form doesn't offer.
pub const DEFAULT_TYPE_MULTIPLIER: f64 = 1.0;

pub const LOCATION_RATES: [(&str, f64); 8] = [
    ("Banjara Hills", 12000.0),
    ("Jubilee Hills", 13000.0),
    ("Gachibowli", 7000.0),
    ("Hitech City", 7500.0),
    ("Kukatpally", 5000.0),
    ("Madhapur", 8000.0),
    ("Kondapur", 6500.0),
    ("Miyapur", 4500.0),
];

pub const BEDROOM_INCREMENT: f64 = 500_000.0;
pub const BATHROOM_INCREMENT: f64 = 300_000.0;
pub const PARKING_INCREMENT: f64 = 200_000.0;

pub const GARDEN_PREMIUM: f64 = 1.05;
pub const SECURITY_PREMIUM: f64 = 1.03;
pub const POWER_BACKUP_PREMIUM: f64 = 1.02;

/// Jitter is drawn from `[JITTER_MIN, JITTER_MAX)`.
pub const JITTER_MIN: f64 = 0.95;
pub const JITTER_MAX: f64 = 1.05;

/// Spread shown around an estimate in the result view.
pub const DISPLAY_RANGE_PCT: f64 = 0.10;

/// Confidence figure shown next to every estimate.
pub const DISPLAY_CONFIDENCE_PCT: u8 = 92;

/// Supplies the multiplicative noise applied to every estimate.
pub trait JitterSource {
    /// Next factor, expected in `[JITTER_MIN, JITTER_MAX)`.
    fn factor(&mut self) -> f64;
}

/// Uniform jitter backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct UniformJitter<R> {
    rng: R,
}

impl<R: Rng> UniformJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn factor(&mut self) -> f64 {
        self.rng.gen_range(JITTER_MIN..JITTER_MAX)
    }
}

/// Always returns the same factor. `FixedJitter::NONE` disables jitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedJitter(pub f64);

impl FixedJitter {
    pub const NONE: FixedJitter = FixedJitter(1.0);
}

impl JitterSource for FixedJitter {
    fn factor(&mut self) -> f64 {
        self.0
    }
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn factor(&mut self) -> f64 {
        (**self).factor()
    }
}

pub fn base_rate(location: &str) -> f64 {
    LOCATION_RATES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_RATE_PER_SQFT)
}

pub fn type_multiplier(property_type: &str) -> f64 {
    PropertyType::from_label(property_type)
        .map(|kind| kind.multiplier())
        .unwrap_or(DEFAULT_TYPE_MULTIPLIER)
}

/// Each pricing step of an estimate, in the order it is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuationBreakdown {
    pub rate_per_sqft: f64,
    pub land_value: f64,
    pub type_multiplier: f64,
    pub room_increments: f64,
    pub amenity_multiplier: f64,
    /// Everything above combined, before jitter and rounding.
    pub subtotal: f64,
}

pub fn breakdown(attrs: &PropertyAttributes) -> ValuationBreakdown {
    let rate_per_sqft = base_rate(&attrs.location);
    let land_value = rate_per_sqft * attrs.area;
    let type_multiplier = type_multiplier(&attrs.property_type);

    let room_increments = attrs.bedrooms as f64 * BEDROOM_INCREMENT
        + attrs.bathrooms as f64 * BATHROOM_INCREMENT
        + attrs.parking as f64 * PARKING_INCREMENT;

    let mut price = land_value * type_multiplier;
    price += room_increments;

    // Premiums compound in a fixed order: garden, security, power backup.
    let mut amenity_multiplier = 1.0;
    if attrs.has_garden {
        price *= GARDEN_PREMIUM;
        amenity_multiplier *= GARDEN_PREMIUM;
    }
    if attrs.has_security {
        price *= SECURITY_PREMIUM;
        amenity_multiplier *= SECURITY_PREMIUM;
    }
    if attrs.has_power_backup {
        price *= POWER_BACKUP_PREMIUM;
        amenity_multiplier *= POWER_BACKUP_PREMIUM;
    }

    ValuationBreakdown {
        rate_per_sqft,
        land_value,
        type_multiplier,
        room_increments,
        amenity_multiplier,
        subtotal: price,
    }
}

/// Deterministic part of [`estimate`], unrounded.
pub fn price_before_jitter(attrs: &PropertyAttributes) -> f64 {
    breakdown(attrs).subtotal
}

/// Estimated market value in whole rupees.
///
/// Never fails: unknown locations and property types fall back to
/// [`DEFAULT_RATE_PER_SQFT`] and [`DEFAULT_TYPE_MULTIPLIER`].
pub fn estimate(attrs: &PropertyAttributes, jitter: &mut impl JitterSource) -> f64 {
    let subtotal = price_before_jitter(attrs);
    let factor = jitter.factor();
    let price = (subtotal * factor).round();
    tracing::debug!(
        location = %attrs.location,
        property_type = %attrs.property_type,
        area = attrs.area,
        factor,
        price,
        "estimated property value"
    );
    price
}

/// Low and high ends of the displayed range.
pub fn price_range(price: f64) -> (f64, f64) {
    (price * (1.0 - DISPLAY_RANGE_PCT), price * (1.0 + DISPLAY_RANGE_PCT))
}

pub fn price_per_sqft(price: f64, area: f64) -> Option<f64> {
    if area.is_finite() && area > 0.0 {
        Some((price / area).round())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn attrs(location: &str, property_type: &str) -> PropertyAttributes {
        PropertyAttributes {
            location: location.to_string(),
            property_type: property_type.to_string(),
            area: 1200.0,
            bedrooms: 2,
            bathrooms: 2,
            parking: 1,
            ..PropertyAttributes::default()
        }
    }

    #[test]
    fn closed_form_without_amenities() {
        let input = attrs("Madhapur", "Independent House");
        let expected = 8000.0 * 1200.0 * 1.2
            + 2.0 * BEDROOM_INCREMENT
            + 2.0 * BATHROOM_INCREMENT
            + PARKING_INCREMENT;
        assert_eq!(estimate(&input, &mut FixedJitter::NONE), expected.round());
    }

    #[test]
    fn gachibowli_villa_with_garden() {
        let input = PropertyAttributes {
            location: "Gachibowli".into(),
            property_type: "Villa".into(),
            area: 2000.0,
            bedrooms: 3,
            bathrooms: 2,
            parking: 1,
            has_garden: true,
            has_security: false,
            has_power_backup: false,
        };
        assert_eq!(estimate(&input, &mut FixedJitter::NONE), 22_995_000.0);
    }

    #[test]
    fn unknown_keys_use_defaults() {
        let unknown = attrs("Secunderabad", "Castle");
        let explicit_default = attrs("Kukatpally", "Apartment");
        assert_eq!(base_rate("Secunderabad"), DEFAULT_RATE_PER_SQFT);
        assert_eq!(type_multiplier("Castle"), DEFAULT_TYPE_MULTIPLIER);
        assert_eq!(
            estimate(&unknown, &mut FixedJitter::NONE),
            estimate(&explicit_default, &mut FixedJitter::NONE)
        );
    }

    #[test]
    fn premiums_compound_in_order() {
        let plain = attrs("Miyapur", "Apartment");
        let all = PropertyAttributes {
            has_garden: true,
            has_security: true,
            has_power_backup: true,
            ..plain.clone()
        };
        let base = price_before_jitter(&plain);
        let expected = base * GARDEN_PREMIUM * SECURITY_PREMIUM * POWER_BACKUP_PREMIUM;
        assert!((price_before_jitter(&all) - expected).abs() < 1e-6);

        let parts = breakdown(&all);
        assert!((parts.amenity_multiplier - 1.05 * 1.03 * 1.02).abs() < 1e-12);
        assert_eq!(parts.rate_per_sqft, 4500.0);
        assert_eq!(parts.land_value, 4500.0 * 1200.0);
    }

    #[test]
    fn fixed_jitter_scales_result() {
        let input = attrs("Hitech City", "Penthouse");
        let base = price_before_jitter(&input);
        assert_eq!(estimate(&input, &mut FixedJitter(0.95)), (base * 0.95).round());
        assert_eq!(estimate(&input, &mut FixedJitter(1.05)), (base * 1.05).round());
    }

    #[test]
    fn uniform_jitter_stays_in_range() {
        let mut jitter = UniformJitter::new(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let factor = jitter.factor();
            assert!((JITTER_MIN..JITTER_MAX).contains(&factor));
        }
    }

    #[test]
    fn display_helpers() {
        let (low, high) = price_range(10_000_000.0);
        assert!((low - 9_000_000.0).abs() < 1e-6);
        assert!((high - 11_000_000.0).abs() < 1e-6);
        assert_eq!(price_per_sqft(9_000_000.0, 1500.0), Some(6000.0));
        assert_eq!(price_per_sqft(9_000_000.0, 0.0), None);
    }
}
