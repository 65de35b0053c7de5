//! # indicpostal
//!
//! Heuristic normalization and canonical formatting for Indian postal
//! addresses.
//!
//! Free-form address strings, as typed by non-professional data entry
//! operators, are cleaned, split into comma-separated segments, classified
//! into semantic components (door/plot/survey numbers, floor, building,
//! street, road, landmarks, locality, city, state, pincode), normalized,
//! reordered, and rejoined into one consistently punctuated and capitalized
//! string.
//!
//! ## Features
//!
//! - **Lexical Normalization**: abbreviation expansion, case folding, and
//!   punctuation cleanup
//! - **Segment Classification**: ordered heuristic rules with a built-in
//!   city/state gazetteer
//! - **Identifier Prioritization**: multiple numeric identifiers merge into
//!   one clause by significance
//! - **Total Functions**: any string input yields a string output, never an
//!   error — safe in tight loops over large record batches
//! - **Thread Safe**: all rule tables are read-only constants; calls need no
//!   coordination
//!
//! ## Quick Start
//!
//! ```
//! use indicpostal::format_address;
//!
//! let formatted = format_address("door no 12, mg road, bangalore, karnataka 560001");
//! assert_eq!(formatted, "Door No 12, MG Road, Bangalore, Karnataka, 560001");
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod assembler;
pub mod batch;
pub mod classifier;
pub mod error;
pub mod gazetteer;
pub mod normalizer;
pub mod types;

// Re-export main API
pub use batch::{BatchFormatter, BatchReport, RecordSource};
pub use error::{Error, Result};
pub use normalizer::{clean_address_input, normalize_number_identifiers, title_case};
pub use types::{AddressComponents, LandmarkKind};

/// Formats one raw address string into its canonical form.
///
/// This is the main entry point: cleaning, classification, identifier
/// prioritization, and reassembly in one call. Empty input returns an empty
/// string; no input ever raises.
///
/// # Examples
///
/// ```
/// use indicpostal::format_address;
///
/// let formatted = format_address("FLAT NO 3B\nABC APARTMENT\nNEAR CITY HOSPITAL\nCHENNAI");
/// assert_eq!(formatted, "Flat No 3B, Abc Apartment, Near City Hospital, Chennai");
/// ```
pub fn format_address(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let cleaned = normalizer::clean_address_input(raw);
    let components = classifier::classify(&cleaned);
    assembler::assemble(&components)
}

/// Classifies one raw address string without reassembling it.
///
/// Useful when the structured components matter more than the joined
/// canonical string.
///
/// # Examples
///
/// ```
/// use indicpostal::parse_address;
///
/// let components = parse_address("door no 12, bangalore");
/// assert_eq!(components.city.as_deref(), Some("Bangalore"));
/// ```
pub fn parse_address(raw: &str) -> AddressComponents {
    classifier::classify(&normalizer::clean_address_input(raw))
}

/// Stateless handle for formatting addresses one at a time or in batches.
///
/// # Examples
///
/// ```
/// use indicpostal::AddressFormatter;
///
/// let formatter = AddressFormatter::new();
/// assert_eq!(formatter.format("#45, 1st floor"), "No 45, 1st Floor");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressFormatter;

impl AddressFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Format one raw address. See [`format_address`].
    pub fn format(&self, raw: &str) -> String {
        format_address(raw)
    }

    /// Format multiple raw addresses, preserving input order.
    pub fn format_batch(&self, raws: &[&str]) -> Vec<String> {
        raws.iter().map(|raw| format_address(raw)).collect()
    }

    /// Format multiple raw addresses in parallel, preserving input order.
    ///
    /// Formatting is pure, so no coordination is needed beyond the thread
    /// pool rayon provides.
    #[cfg(feature = "parallel")]
    pub fn format_batch_parallel(&self, raws: &[&str]) -> Vec<String> {
        use rayon::prelude::*;

        raws.par_iter().map(|raw| format_address(raw)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(format_address(""), "");
        assert_eq!(format_address("   "), "");
    }

    #[test]
    fn formats_a_typical_bangalore_address() {
        assert_eq!(
            format_address("door no 12, mg road, bangalore, karnataka 560001"),
            "Door No 12, MG Road, Bangalore, Karnataka, 560001"
        );
    }

    #[test]
    fn formats_a_multiline_address() {
        assert_eq!(
            format_address("FLAT NO 3B\nABC APARTMENT\nNEAR CITY HOSPITAL\nCHENNAI"),
            "Flat No 3B, Abc Apartment, Near City Hospital, Chennai"
        );
    }

    #[test]
    fn hash_numbers_become_identifier_clauses() {
        assert_eq!(format_address("#45, 1st Floor"), "No 45, 1st Floor");
    }

    #[test]
    fn multiple_identifiers_merge_by_priority() {
        assert_eq!(
            format_address("Plot No 5, Door No 12, Survey No 3"),
            "Survey No 3, Plot No 5, Door No 12"
        );
    }

    #[test]
    fn pincode_is_always_last() {
        let formatted = format_address("560001, mg road, bangalore");
        assert!(formatted.ends_with("560001"));
        assert_eq!(formatted, "MG Road, Bangalore, 560001");
    }

    #[test]
    fn output_has_no_empty_components() {
        for raw in [
            "a,, ,b",
            ",,,",
            "door no 12,,, bangalore,",
            "nr atm,,",
        ] {
            let formatted = format_address(raw);
            assert!(!formatted.contains(",,"), "double comma in {formatted:?}");
            assert!(!formatted.contains(", ,"), "empty component in {formatted:?}");
            assert!(!formatted.starts_with(','), "leading comma in {formatted:?}");
            assert!(!formatted.ends_with(','), "trailing comma in {formatted:?}");
        }
    }

    #[test]
    fn canonical_sections_are_stable_under_a_second_pass() {
        let once = format_address("door no 12, mg road, bangalore, karnataka 560001");
        assert_eq!(format_address(&once), once);
    }

    #[test]
    fn unclassified_segments_are_never_dropped() {
        let formatted = format_address("some odd corner, bangalore");
        assert_eq!(formatted, "Some Odd Corner, Bangalore");
    }

    #[test]
    fn batch_formatting_preserves_order() {
        let formatter = AddressFormatter::new();
        let results = formatter.format_batch(&["#45", "", "560001"]);
        assert_eq!(results, vec!["No 45", "", "560001"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_batch_matches_sequential() {
        let formatter = AddressFormatter::new();
        let raws = ["door no 12, bangalore", "#45, 1st floor", ""];
        assert_eq!(
            formatter.format_batch_parallel(&raws),
            formatter.format_batch(&raws)
        );
    }
}
