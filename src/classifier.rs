//! Segment splitting and rule-ordered classification.
//!
//! A cleaned address splits on commas into segments, and each segment is
//! tested against an ordered cascade of rules. The first matching rule wins,
//! so the ordering below is a behavioral contract: categories overlap, and
//! reordering the tests silently changes classification outcomes.
//!
//! Overwrite policy is deliberately asymmetric: cross/street/road keep the
//! last matching segment, while building/city/state keep the first.

use crate::gazetteer;
use crate::normalizer::{normalize_number_identifiers, title_case};
use crate::types::{AddressComponents, LandmarkKind};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Labelled numeric ranges joined with "&" ("No 12, 13 & 14"), whose internal
/// commas must survive the split.
static AMP_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)((?:House|H|Flat|Plot|Door|Unit|Old|New|Shop|Office|Survey)?\s*No\.?\s*\d+(?:,\s*\d+)*\s*&\s*\d+)",
    )
    .expect("valid regex")
});

/// A state name glued to a six-digit pincode in one segment.
static STATE_PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z\s]+)\s+(\d{6})$").expect("valid regex"));

/// Exactly six digits.
static PINCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid regex"));

/// "PN<number>" tokens.
static PN_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PN\s*\d+$").expect("valid regex"));

/// Ward numbers.
static WARD_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^WARD\s*NO\.?\s*\d+").expect("valid regex"));

/// Explicitly labelled identifiers ("DOOR NO ...", "SURVEY NO ...").
static LABELED_IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:DOOR|PLOT|OFFICE|OLD|SHOP|UNIT|HOUSE|SURVEY|FLAT|MILKAT)\s*NO")
        .expect("valid regex")
});

/// Bare numeric identifiers: digits, separators, optional trailing letters.
static NUMERIC_IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d[\d\-/\s&]*[A-Z]*$").expect("valid regex"));

/// Numeric identifiers with an optional "No"/"No." prefix and mixed
/// alphanumeric tails ("No 12A3").
static PREFIXED_IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:No\.?\s*)?\d[\dA-Za-z\-/&]*$").expect("valid regex"));

/// Leading "No"/"No." token, for stripping before renormalization.
static NO_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^No\.?\s*").expect("valid regex"));

/// Keywords marking a building segment.
const BUILDING_KEYWORDS: &[&str] = &[
    "BUILDING", "COMPLEX", "MANSION", "APARTMENT", "TOWER", "CENTER", "CENTRE",
];

/// Keywords marking a locality segment.
const LOCALITY_KEYWORDS: &[&str] = &["NAGAR", "LAYOUT", "COLONY", "AREA", "BLOCK", "EXTENSION"];

/// Keywords marking a road segment.
const ROAD_KEYWORDS: &[&str] = &["ROAD", "HIGHWAY", "MARG"];

/// Splits a cleaned address into trimmed, non-empty segments.
///
/// Commas inside "&"-joined numeric ranges are protected with a sentinel
/// before the split and restored afterwards, each segment gets its number
/// suffixes renormalized, and a segment gluing a state name to a six-digit
/// pincode is split in two.
pub fn split_segments(cleaned: &str) -> Vec<String> {
    let protected = AMP_RANGE_RE.replace_all(cleaned, |c: &Captures<'_>| c[0].replace(',', "||"));

    let mut segments = Vec::new();
    for piece in protected.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let restored = piece.replace("||", ",");
        let part = normalize_number_identifiers(&restored);
        match STATE_PINCODE_RE.captures(&part) {
            Some(caps) => {
                segments.push(caps[1].trim().to_string());
                segments.push(caps[2].to_string());
            }
            None => segments.push(part),
        }
    }
    segments
}

/// Classifies every segment of a cleaned address into [`AddressComponents`].
///
/// Rules are tested top to bottom; the first match wins. Unrecognized
/// segments land in `extras` and are never dropped.
pub fn classify(cleaned: &str) -> AddressComponents {
    let mut components = AddressComponents::default();

    for part in split_segments(cleaned) {
        let upper = part.to_uppercase();

        if PINCODE_RE.is_match(&upper) {
            components.pincode = Some(upper);
        } else if PN_NUMBER_RE.is_match(&upper) {
            components.pn_numbers.push(part);
        } else if WARD_NO_RE.is_match(&upper) {
            components.ward_no = Some(title_case(&part));
        } else if LABELED_IDENTIFIER_RE.is_match(&upper) {
            components.identifiers.push(title_case(&part));
        } else if NUMERIC_IDENTIFIER_RE.is_match(&upper) {
            components.identifiers.push(format!("No {upper}"));
        } else if PREFIXED_IDENTIFIER_RE.is_match(&upper) {
            let stripped = NO_PREFIX_RE.replace(&upper, "");
            let normalized = normalize_number_identifiers(&stripped);
            components.identifiers.push(format!("No {normalized}"));
        } else if upper.contains("FLOOR") {
            components.append_floor(title_case(&part));
        } else if let Some(kind) = LandmarkKind::ALL
            .into_iter()
            .find(|kind| upper.contains(kind.keyword()))
        {
            components.push_landmark(kind, title_case(&part));
        } else if upper.contains("CROSS") {
            components.cross = Some(title_case(&part));
        } else if upper.contains("STREET") {
            components.street = Some(title_case(&part));
        } else if ROAD_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            components.road = Some(title_case(&part));
        } else if components.building.is_none()
            && BUILDING_KEYWORDS.iter().any(|kw| upper.contains(kw))
        {
            components.building = Some(title_case(&part));
        } else if components.city.is_none() && gazetteer::is_known_city(&title_case(&part)) {
            components.city = Some(title_case(&part));
        } else if components.state.is_none() && gazetteer::is_known_state(&title_case(&part)) {
            components.state = Some(title_case(&part));
        } else if LOCALITY_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            components.locality.push(title_case(&part));
        } else {
            components.extras.push(title_case(&part));
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::clean_address_input;

    #[test]
    fn splits_on_commas_and_drops_empty_segments() {
        assert_eq!(
            split_segments("Door No 12, , MG ROAD"),
            vec!["Door No 12", "MG ROAD"]
        );
    }

    #[test]
    fn protects_ampersand_ranges_from_the_split() {
        assert_eq!(
            split_segments("No 12, 13 & 14, MG ROAD"),
            vec!["No 12, 13 & 14", "MG ROAD"]
        );
    }

    #[test]
    fn splits_state_glued_to_pincode() {
        assert_eq!(
            split_segments("KARNATAKA 560001"),
            vec!["KARNATAKA", "560001"]
        );
    }

    #[test]
    fn renormalizes_number_suffixes_per_segment() {
        assert_eq!(split_segments("12/3a, MG ROAD"), vec!["12/3A", "MG ROAD"]);
    }

    #[test]
    fn six_digits_always_route_to_pincode() {
        let components = classify("560001");
        assert_eq!(components.pincode.as_deref(), Some("560001"));
    }

    #[test]
    fn pn_numbers_are_collected() {
        let components = classify("PN 42, MG ROAD");
        assert_eq!(components.pn_numbers, vec!["PN 42"]);
    }

    #[test]
    fn ward_numbers_are_recognized() {
        let components = classify("WARD NO 12");
        assert_eq!(components.ward_no.as_deref(), Some("Ward No 12"));
    }

    #[test]
    fn labelled_identifiers_are_title_cased() {
        let components = classify("Door No 12");
        assert_eq!(components.identifiers, vec!["Door No 12"]);
    }

    #[test]
    fn bare_numeric_segments_get_a_no_prefix() {
        let components = classify("12-3A");
        assert_eq!(components.identifiers, vec!["No 12-3A"]);
    }

    #[test]
    fn no_prefixed_segments_are_stripped_and_renormalized() {
        let components = classify("No 45");
        assert_eq!(components.identifiers, vec!["No 45"]);
    }

    #[test]
    fn landmark_segments_group_by_first_matching_kind() {
        let components = classify("Near KFC, Opposite BUS STAND");
        assert_eq!(
            components.landmarks[&LandmarkKind::Near],
            vec!["Near KFC"]
        );
        assert_eq!(
            components.landmarks[&LandmarkKind::Opposite],
            vec!["Opposite Bus Stand"]
        );
    }

    #[test]
    fn cross_street_road_are_last_wins() {
        let components = classify("MG ROAD, RING ROAD");
        assert_eq!(components.road.as_deref(), Some("Ring Road"));

        let components = classify("1ST CROSS, 4TH CROSS");
        assert_eq!(components.cross.as_deref(), Some("4th Cross"));
    }

    #[test]
    fn building_is_first_wins() {
        let components = classify("ABC TOWER, XYZ MANSION");
        assert_eq!(components.building.as_deref(), Some("Abc Tower"));
        assert_eq!(components.extras, vec!["Xyz Mansion"]);
    }

    #[test]
    fn gazetteer_lookups_fill_city_and_state_once() {
        let components = classify("BANGALORE, KARNATAKA, MYSORE");
        assert_eq!(components.city.as_deref(), Some("Bangalore"));
        assert_eq!(components.state.as_deref(), Some("Karnataka"));
        assert_eq!(components.extras, vec!["Mysore"]);
    }

    #[test]
    fn locality_keywords_accumulate() {
        let components = classify("HSR LAYOUT, KS COLONY");
        assert_eq!(components.locality, vec!["Hsr Layout", "KS Colony"]);
    }

    #[test]
    fn unrecognized_segments_are_preserved_in_extras() {
        let components = classify("SOME UNKNOWN PLACE");
        assert_eq!(components.extras, vec!["Some Unknown Place"]);
    }

    #[test]
    fn classifies_a_full_cleaned_address() {
        let cleaned = clean_address_input("door no 12, mg road, bangalore, karnataka 560001");
        let components = classify(&cleaned);
        assert_eq!(components.identifiers, vec!["Door No 12"]);
        assert_eq!(components.road.as_deref(), Some("MG Road"));
        assert_eq!(components.city.as_deref(), Some("Bangalore"));
        assert_eq!(components.state.as_deref(), Some("Karnataka"));
        assert_eq!(components.pincode.as_deref(), Some("560001"));
    }
}
