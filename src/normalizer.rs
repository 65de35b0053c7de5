//! Lexical normalization of raw address strings.
//!
//! Raw addresses arrive in whatever shape a data-entry operator left them:
//! multi-line, mixed case, riddled with ad-hoc abbreviations ("apt", "flr",
//! "sy no", "#45") and inconsistent punctuation. This module rewrites them
//! into the upper-cased, comma-separated form the classifier expects.
//!
//! The rewrite is an ordered cascade of regex rules. Ordering is load-bearing:
//! specific multi-word labels ("Door No", "Survey No") must be recognized
//! before the generic "No" rule consumes the `NO` token.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Runs of newline characters, collapsed to segment separators.
static NEWLINE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));

/// Whole-token building/structure abbreviations (input is upper-cased first).
static BUILDING_ABBREVIATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(CPLX|CMPLX|APT|RESI|PLZ|TWR|CTR|CTRE|NVS|NVAS|BLDG)\b").expect("valid regex")
});

/// Trailing "St" word suffix, with optional period/comma.
static STREET_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\w+)\s+St[.,]?\b").expect("valid regex"));

/// Trailing "Rd" word suffix, with optional period/comma.
static ROAD_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\w+)\s+Rd[.,]?\b").expect("valid regex"));

/// "#123" style house numbers.
static HASH_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*#\s*(\d+)").expect("valid regex"));

/// Administrative noise words, removed wherever they occur.
static ADMIN_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)village|district|mandal|taluk").expect("valid regex"));

/// Bare "flr" abbreviation.
static FLR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bflr\b").expect("valid regex"));

/// Ordinal-prefixed "flr" ("2nd flr").
static ORDINAL_FLR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)?\s*flr\b").expect("valid regex"));

/// Spelled-out ordinal floor phrases ("first floor").
static SPELLED_FLOOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(first|second|third|fourth)\s*floor\b").expect("valid regex")
});

/// Labelled number prefixes ("door no:", "plot no.", ...).
static LABELED_NO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(door|plot|unit|shop|flat|milkat)\s*no\.?:?\s*").expect("valid regex")
});

/// Survey-number shorthand ("s no", "sy no").
static SURVEY_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsy?\s*no\.?:?\s*").expect("valid regex"));

/// Generic "no" catch-all. Must run after every labelled variant.
static BARE_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bno\.?:?\s*").expect("valid regex"));

/// "opp." landmark abbreviation.
static OPPOSITE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bopp\.?\b").expect("valid regex"));

/// "nr" landmark abbreviation.
static NEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bnr\b").expect("valid regex"));

/// "cross" keyword, re-cased for later classification.
static CROSS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcross\b").expect("valid regex"));

/// "d no" shorthand, after the generic rule has re-cased the `no` token.
static D_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bd no\b").expect("valid regex"));

/// "h no" shorthand.
static H_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bh no\b").expect("valid regex"));

/// "abv" landmark abbreviation.
static ABOVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\babv\b").expect("valid regex"));

/// "blw" landmark abbreviation.
static BELOW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bblw\b").expect("valid regex"));

/// Spaced hyphens ("12 - 3").
static SPACED_HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?- ?").expect("valid regex"));

/// A period, capturing a following digit so decimal-like numerals survive.
static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(\d)?").expect("valid regex"));

/// A colon, capturing a following digit so time-like numerals survive.
static COLON_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":(\d)?").expect("valid regex"));

/// Commas with surrounding whitespace.
static COMMA_SPACING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));

/// Runs of commas.
static COMMA_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",+").expect("valid regex"));

/// Runs of whitespace.
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Whitespace immediately before a comma.
static SPACE_BEFORE_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+,").expect("valid regex"));

/// Comma runs plus trailing whitespace, normalized to a single ", ".
static COMMA_TRAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",+\s*").expect("valid regex"));

/// Bare numeric suffix at a word boundary ("123a").
static NUMBER_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)([a-z])\b").expect("valid regex"));

/// Suffix after a run of digits and slash/hyphen separators ("12/3a").
static SEPARATED_NUMBER_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([\d/\-]+)([a-z])\b").expect("valid regex"));

/// Catch-all single digit followed by a letter.
static DIGIT_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d)([a-z])").expect("valid regex"));

/// Institutional acronyms kept fully upper-cased during title-casing.
const KNOWN_ABBREVIATIONS: &[&str] = &[
    "KFC", "SBI", "PNB", "HDFC", "ICICI", "LIC", "IDBI", "DTDC", "ATM", "PSU", "IOB", "HSBC",
    "BOB", "RBI", "ONGC", "BHEL", "KS", "AD", "KG",
];

/// Cleans a raw address string into the upper-cased, comma-separated form
/// used by classification.
///
/// Newline runs collapse to segment separators, the whole string is
/// upper-cased, known abbreviations are expanded, number labels are
/// normalized to a canonical `<Label> No ` prefix, and punctuation is
/// collapsed to a single comma-space convention. Empty input yields an
/// empty string.
///
/// # Examples
///
/// ```
/// use indicpostal::clean_address_input;
///
/// assert_eq!(clean_address_input("plot no. 5"), "Plot No 5");
/// assert_eq!(clean_address_input("#45"), "No 45");
/// ```
pub fn clean_address_input(raw: &str) -> String {
    let s = NEWLINE_RUN_RE.replace_all(raw, ", ").to_uppercase();

    let s = BUILDING_ABBREVIATION_RE.replace_all(&s, |c: &Captures<'_>| match &c[1] {
        "CPLX" | "CMPLX" => "COMPLEX",
        "APT" => "APARTMENT",
        "RESI" => "RESIDENCY",
        "PLZ" => "PLAZA",
        "TWR" => "TOWER",
        "CTR" => "CENTER",
        "CTRE" => "CENTRE",
        "NVS" | "NVAS" => "NIVAS",
        _ => "BUILDING",
    });

    let s = STREET_SUFFIX_RE.replace_all(&s, "${1} Street");
    let s = ROAD_SUFFIX_RE.replace_all(&s, "${1} Road");

    let s = HASH_NUMBER_RE.replace_all(&s, " No ${1}");
    let s = ADMIN_NOISE_RE.replace_all(&s, "");
    let s = FLR_RE.replace_all(&s, "Floor");
    let s = ORDINAL_FLR_RE.replace_all(&s, "${1}${2} Floor");
    let s = SPELLED_FLOOR_RE.replace_all(&s, |c: &Captures<'_>| {
        match c[1].to_uppercase().as_str() {
            "FIRST" => "1st Floor",
            "SECOND" => "2nd Floor",
            "THIRD" => "3rd Floor",
            _ => "4th Floor",
        }
    });

    // Specific labels before the bare NO rule, or the label tokens are lost.
    let s = LABELED_NO_RE.replace_all(&s, |c: &Captures<'_>| {
        let label = match c[1].to_uppercase().as_str() {
            "DOOR" => "Door",
            "PLOT" => "Plot",
            "UNIT" => "Unit",
            "SHOP" => "Shop",
            "FLAT" => "Flat",
            _ => "Milkat",
        };
        format!("{label} No ")
    });
    let s = SURVEY_NO_RE.replace_all(&s, "Survey No ");
    let s = BARE_NO_RE.replace_all(&s, "No ");

    let s = OPPOSITE_RE.replace_all(&s, "Opposite");
    let s = NEAR_RE.replace_all(&s, "Near");
    let s = CROSS_RE.replace_all(&s, "Cross");
    let s = D_NO_RE.replace_all(&s, "Door No");
    let s = H_NO_RE.replace_all(&s, "House No");
    let s = ABOVE_RE.replace_all(&s, "Above");
    let s = BELOW_RE.replace_all(&s, "Below");

    let s = SPACED_HYPHEN_RE.replace_all(&s, "-");
    let s = PERIOD_RE.replace_all(&s, |c: &Captures<'_>| match c.get(1) {
        Some(digit) => format!(".{}", digit.as_str()),
        None => String::new(),
    });
    let s = COLON_RE.replace_all(&s, |c: &Captures<'_>| match c.get(1) {
        Some(digit) => format!(":{}", digit.as_str()),
        None => String::new(),
    });

    let s = COMMA_SPACING_RE.replace_all(&s, ", ");
    let s = COMMA_RUN_RE.replace_all(&s, ",");
    let s = WHITESPACE_RUN_RE.replace_all(&s, " ");
    let s = SPACE_BEFORE_COMMA_RE.replace_all(&s, ",");
    let s = COMMA_TRAIL_RE.replace_all(&s, ", ");

    s.trim().to_string()
}

/// Upper-cases letter suffixes attached to numbers ("12a" → "12A").
///
/// Three cumulative passes cover the boundary variants: a bare number at a
/// word boundary, a slash/hyphen-separated number run, and a catch-all
/// digit-then-letter pair.
///
/// # Examples
///
/// ```
/// use indicpostal::normalize_number_identifiers;
///
/// assert_eq!(normalize_number_identifiers("12a"), "12A");
/// assert_eq!(normalize_number_identifiers("12/3a"), "12/3A");
/// ```
pub fn normalize_number_identifiers(segment: &str) -> String {
    fn upper_suffix(c: &Captures<'_>) -> String {
        format!("{}{}", &c[1], c[2].to_uppercase())
    }

    let s = NUMBER_SUFFIX_RE.replace_all(segment, upper_suffix);
    let s = SEPARATED_NUMBER_SUFFIX_RE.replace_all(&s, upper_suffix);
    let s = DIGIT_LETTER_RE.replace_all(&s, upper_suffix);
    s.into_owned()
}

/// Title-cases a segment word by word.
///
/// Known institutional acronyms and any other two-letter word stay fully
/// upper-cased, the literal word `No` keeps its canonical casing, `to` is
/// lowered, and every other word gets a leading capital.
///
/// # Examples
///
/// ```
/// use indicpostal::title_case;
///
/// assert_eq!(title_case("ks colony"), "KS Colony");
/// assert_eq!(title_case("NEAR CITY HOSPITAL"), "Near City Hospital");
/// ```
pub fn title_case(segment: &str) -> String {
    segment
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let upper = word.to_uppercase();
    if upper == "NO" {
        return "No".to_string();
    }
    if upper == "TO" {
        return "to".to_string();
    }
    // Short words are likely abbreviations.
    if KNOWN_ABBREVIATIONS.contains(&upper.as_str())
        || (upper.chars().count() == 2 && upper.chars().any(char::is_alphabetic))
    {
        return upper;
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
