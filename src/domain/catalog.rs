//! Static reference data for the Hyderabad market: neighborhood positions
//! and the showcase listings on the home page.

use super::entities::{KnownLocation, SampleProperty};

/// City centre as (latitude, longitude).
pub const CITY_CENTER: (f64, f64) = (17.3850, 78.4867);

/// South-west and north-east corners of the supported area.
pub const CITY_BOUNDS: ((f64, f64), (f64, f64)) = ((17.1880, 78.2426), (17.5720, 78.6926));

pub const KNOWN_LOCATIONS: [KnownLocation; 10] = [
    KnownLocation { name: "Gachibowli", latitude: 17.4400, longitude: 78.3609 },
    KnownLocation { name: "Hitech City", latitude: 17.4477, longitude: 78.3839 },
    KnownLocation { name: "Kukatpally", latitude: 17.4949, longitude: 78.4311 },
    KnownLocation { name: "Banjara Hills", latitude: 17.4156, longitude: 78.4400 },
    KnownLocation { name: "Madhapur", latitude: 17.4534, longitude: 78.3871 },
    KnownLocation { name: "Kondapur", latitude: 17.4640, longitude: 78.3568 },
    KnownLocation { name: "Miyapur", latitude: 17.4928, longitude: 78.3522 },
    KnownLocation { name: "Jubilee Hills", latitude: 17.4314, longitude: 78.4076 },
    KnownLocation { name: "Begumpet", latitude: 17.4448, longitude: 78.4670 },
    KnownLocation { name: "Ameerpet", latitude: 17.4374, longitude: 78.4483 },
];

pub fn find_location(name: &str) -> Option<&'static KnownLocation> {
    KNOWN_LOCATIONS.iter().find(|loc| loc.name == name)
}

/// True when the point lies inside [`CITY_BOUNDS`] (edges included).
pub fn within_city(latitude: f64, longitude: f64) -> bool {
    let ((south, west), (north, east)) = CITY_BOUNDS;
    (south..=north).contains(&latitude) && (west..=east).contains(&longitude)
}

pub const SAMPLE_PROPERTIES: [SampleProperty; 4] = [
    SampleProperty {
        id: 1,
        title: "Luxury Apartment in Banjara Hills",
        location: "Banjara Hills, Hyderabad",
        price: 15_000_000.0,
        area: 1850.0,
        bedrooms: 3,
        bathrooms: 3,
        image: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?q=80&w=2070&auto=format&fit=crop",
        tags: &["Luxury", "Gated Community", "Swimming Pool"],
    },
    SampleProperty {
        id: 2,
        title: "Modern Villa in Gachibowli",
        location: "Gachibowli, Hyderabad",
        price: 22_500_000.0,
        area: 2800.0,
        bedrooms: 4,
        bathrooms: 4,
        image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop",
        tags: &["Villa", "Garden", "Modern"],
    },
    SampleProperty {
        id: 3,
        title: "Spacious Apartment near Hitech City",
        location: "Hitech City, Hyderabad",
        price: 8_500_000.0,
        area: 1450.0,
        bedrooms: 2,
        bathrooms: 2,
        image: "https://images.unsplash.com/photo-1570129477492-45c003edd2be?q=80&w=2070&auto=format&fit=crop",
        tags: &["Near IT Park", "Security", "Gym"],
    },
    SampleProperty {
        id: 4,
        title: "Penthouse in Jubilee Hills",
        location: "Jubilee Hills, Hyderabad",
        price: 35_000_000.0,
        area: 3200.0,
        bedrooms: 4,
        bathrooms: 4,
        image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=2070&auto=format&fit=crop",
        tags: &["Penthouse", "Terrace Garden", "Premium"],
    },
];
