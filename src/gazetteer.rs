//! Static reference lists of known Indian city and state names.
//!
//! The lists are deliberately small and not exhaustive: an unrecognized city
//! or state simply falls through to the unclassified extras of the output.
//! Lookups are exact matches against the title-cased form of a segment.

/// Known city names, in canonical title-cased form.
static CITIES: &[&str] = &[
    "Bangalore",
    "Chennai",
    "Bengaluru",
    "Hyderabad",
    "Mumbai",
    "Delhi",
    "Gurugram",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Visakhapatnam",
    "Indore",
    "Thane",
    "Bhopal",
    "Patna",
    "Vadodara",
    "Ghaziabad",
    "Ludhiana",
    "Agra",
    "Nashik",
    "Faridabad",
    "Meerut",
    "Rajkot",
    "Kalyan",
    "Vasai",
    "Varanasi",
    "Srinagar",
    "Aurangabad",
    "Dhanbad",
    "Kozhikode",
    "Jamjodhpur",
];

/// Known state names, in canonical title-cased form.
static STATES: &[&str] = &[
    "Karnataka",
    "Tamil Nadu",
    "Maharashtra",
    "Andhra Pradesh",
    "Telangana",
    "Kerala",
    "Delhi",
    "West Bengal",
    "Uttar Pradesh",
    "Rajasthan",
    "Gujarat",
    "Madhya Pradesh",
    "Punjab",
    "Bihar",
    "Odisha",
    "Assam",
    "Chhattisgarh",
    "Jharkhand",
    "Haryana",
    "Jammu and Kashmir",
];

/// All known city names.
pub fn cities() -> &'static [&'static str] {
    CITIES
}

/// All known state names.
pub fn states() -> &'static [&'static str] {
    STATES
}

/// Whether `name` (already title-cased) is a known city.
pub fn is_known_city(name: &str) -> bool {
    CITIES.contains(&name)
}

/// Whether `name` (already title-cased) is a known state.
pub fn is_known_state(name: &str) -> bool {
    STATES.contains(&name)
}
