//! Identifier prioritization and final address assembly.

use crate::types::{AddressComponents, LandmarkKind};
use regex::Regex;
use std::sync::LazyLock;

/// Identifier labels from most to least significant. Segments whose label is
/// not listed sort after every listed one, keeping their relative order.
const IDENTIFIER_PRIORITY: &[&str] = &[
    "Survey No",
    "Katha No",
    "Plot No",
    "No",
    "Flat No",
    "Unit No",
    "House No",
    "Door No",
];

/// Labelled identifier clause openers whose label is kept verbatim.
static MAIN_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Door|Plot|Flat|Shop|Unit|House|Survey)\s+No").expect("valid regex")
});

/// Leading "No " token on secondary identifiers.
static LEADING_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^No\s+").expect("valid regex"));

fn identifier_priority(identifier: &str) -> usize {
    IDENTIFIER_PRIORITY
        .iter()
        .position(|label| identifier.starts_with(label))
        .unwrap_or(IDENTIFIER_PRIORITY.len())
}

/// Merges classified identifiers into one clause.
///
/// The highest-priority identifier leads; the rest follow comma-joined with
/// any leading "No " token stripped. A leading identifier that carries an
/// explicit label keeps it, otherwise the clause is prefixed with "No ".
pub fn merge_identifiers(identifiers: &[String]) -> String {
    if identifiers.is_empty() {
        return String::new();
    }

    let mut sorted = identifiers.to_vec();
    sorted.sort_by_key(|identifier| identifier_priority(identifier));

    let main = &sorted[0];
    let mut clause = if MAIN_LABEL_RE.is_match(main) {
        main.clone()
    } else {
        format!("No {}", LEADING_NO_RE.replace(main, ""))
    };

    for rest in &sorted[1..] {
        let stripped = LEADING_NO_RE.replace(rest, "");
        if !stripped.is_empty() {
            clause.push_str(", ");
            clause.push_str(&stripped);
        }
    }
    clause
}

/// Assembles classified components into the canonical address string.
///
/// Sections appear in fixed order — identifier clause, PN numbers, floor,
/// building, landmarks (by kind), cross, street, road, extras, locality,
/// ward, city, state, pincode — with empty sections skipped and the rest
/// joined by ", ".
pub fn assemble(components: &AddressComponents) -> String {
    let mut sections = vec![merge_identifiers(&components.identifiers)];
    sections.extend(components.pn_numbers.iter().cloned());
    sections.extend(components.floor.clone());
    sections.extend(components.building.clone());
    for kind in LandmarkKind::ALL {
        if let Some(landmarks) = components.landmarks.get(&kind) {
            sections.extend(landmarks.iter().cloned());
        }
    }
    sections.extend(components.cross.clone());
    sections.extend(components.street.clone());
    sections.extend(components.road.clone());
    sections.extend(components.extras.iter().cloned());
    sections.extend(components.locality.iter().cloned());
    sections.extend(components.ward_no.clone());
    sections.extend(components.city.clone());
    sections.extend(components.state.clone());
    sections.extend(components.pincode.clone());

    sections.retain(|section| !section.is_empty());
    sections.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn no_identifiers_yield_an_empty_clause() {
        assert_eq!(merge_identifiers(&[]), "");
    }

    #[test]
    fn identifiers_sort_by_the_priority_table() {
        let clause = merge_identifiers(&owned(&["Plot No 5", "Door No 12", "Survey No 3"]));
        assert_eq!(clause, "Survey No 3, Plot No 5, Door No 12");
    }

    #[test]
    fn generic_main_identifier_gets_a_no_prefix() {
        let clause = merge_identifiers(&owned(&["No 45", "Plot No 2"]));
        assert_eq!(clause, "Plot No 2, 45");
    }

    #[test]
    fn sort_is_stable_among_equal_priorities() {
        let clause = merge_identifiers(&owned(&["No 7", "No 9"]));
        assert_eq!(clause, "No 7, 9");
    }

    #[test]
    fn labelled_main_identifier_keeps_its_label() {
        let clause = merge_identifiers(&owned(&["Flat No 3B"]));
        assert_eq!(clause, "Flat No 3B");
    }

    #[test]
    fn sections_join_in_fixed_order() {
        let mut components = AddressComponents::default();
        components.identifiers.push("Door No 12".to_string());
        components.append_floor("1st Floor".to_string());
        components.building = Some("Abc Apartment".to_string());
        components.push_landmark(LandmarkKind::Near, "Near KFC".to_string());
        components.push_landmark(LandmarkKind::Above, "Above SBI ATM".to_string());
        components.road = Some("MG Road".to_string());
        components.extras.push("Some Place".to_string());
        components.locality.push("KS Colony".to_string());
        components.city = Some("Bangalore".to_string());
        components.state = Some("Karnataka".to_string());
        components.pincode = Some("560001".to_string());

        assert_eq!(
            assemble(&components),
            "Door No 12, 1st Floor, Abc Apartment, Above SBI ATM, Near KFC, \
             MG Road, Some Place, KS Colony, Bangalore, Karnataka, 560001"
        );
    }

    #[test]
    fn empty_components_assemble_to_an_empty_string() {
        assert_eq!(assemble(&AddressComponents::default()), "");
    }
}
