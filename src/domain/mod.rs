//! Domain logic for property valuation lives here.

pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod formatting;
pub mod valuation;

pub use app_state::{AppState, ResultSummary};
pub use catalog::{find_location, within_city, KNOWN_LOCATIONS, SAMPLE_PROPERTIES};
pub use entities::{
    KnownLocation, PropertyAttributes, PropertyType, SampleProperty, SavedPrediction, User,
    ValidationError,
};
pub use formatting::{format_inr, format_saved_date, group_indian, iso_timestamp, unix_millis};
pub use valuation::{
    base_rate, breakdown, estimate, price_before_jitter, price_per_sqft, price_range,
    type_multiplier, FixedJitter, JitterSource, UniformJitter, ValuationBreakdown,
};
