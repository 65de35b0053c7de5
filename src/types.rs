//! Value types shared by classification and assembly.

use std::collections::BTreeMap;

/// Directional/relational landmark descriptors, in the fixed order they
/// appear in assembled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LandmarkKind {
    /// Above a reference point ("above medical store").
    Above,
    /// Below a reference point.
    Below,
    /// Beside a reference point.
    Beside,
    /// Next to a reference point.
    Next,
    /// Opposite a reference point.
    Opposite,
    /// In front of a reference point.
    Infront,
    /// Behind a reference point.
    Behind,
    /// Near a reference point.
    Near,
}

impl LandmarkKind {
    /// Every kind, in output order.
    pub const ALL: [LandmarkKind; 8] = [
        LandmarkKind::Above,
        LandmarkKind::Below,
        LandmarkKind::Beside,
        LandmarkKind::Next,
        LandmarkKind::Opposite,
        LandmarkKind::Infront,
        LandmarkKind::Behind,
        LandmarkKind::Near,
    ];

    /// The upper-cased keyword that marks a segment as this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            LandmarkKind::Above => "ABOVE",
            LandmarkKind::Below => "BELOW",
            LandmarkKind::Beside => "BESIDE",
            LandmarkKind::Next => "NEXT",
            LandmarkKind::Opposite => "OPPOSITE",
            LandmarkKind::Infront => "INFRONT",
            LandmarkKind::Behind => "BEHIND",
            LandmarkKind::Near => "NEAR",
        }
    }
}

/// The classified components of one address, prior to assembly.
///
/// Every non-empty input segment lands in exactly one field; segments no
/// rule recognizes are preserved in [`extras`](Self::extras) rather than
/// dropped.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressComponents {
    /// Numeric property identifiers (door/plot/survey numbers and the like),
    /// in classification order.
    pub identifiers: Vec<String>,
    /// "PN<number>" tokens.
    pub pn_numbers: Vec<String>,
    /// Floor description; multiple floor segments accumulate comma-joined.
    pub floor: Option<String>,
    /// Building name. First matching segment wins.
    pub building: Option<String>,
    /// Ward number.
    pub ward_no: Option<String>,
    /// Street. Last matching segment wins.
    pub street: Option<String>,
    /// Road, highway, or marg. Last matching segment wins.
    pub road: Option<String>,
    /// Cross. Last matching segment wins.
    pub cross: Option<String>,
    /// City name from the gazetteer. First match wins.
    pub city: Option<String>,
    /// State name from the gazetteer. First match wins.
    pub state: Option<String>,
    /// Six-digit pincode.
    pub pincode: Option<String>,
    /// Landmark segments grouped by kind, insertion-ordered within a kind.
    pub landmarks: BTreeMap<LandmarkKind, Vec<String>>,
    /// Segments no rule recognized, in classification order.
    pub extras: Vec<String>,
    /// Segments matching a locality keyword, in classification order.
    pub locality: Vec<String>,
}

impl AddressComponents {
    /// Appends a floor segment, comma-joining it onto any existing value.
    pub fn append_floor(&mut self, value: String) {
        self.floor = Some(match self.floor.take() {
            Some(existing) => format!("{existing}, {value}"),
            None => value,
        });
    }

    /// Records a landmark segment under its kind.
    pub fn push_landmark(&mut self, kind: LandmarkKind, value: String) {
        self.landmarks.entry(kind).or_default().push(value);
    }

    /// Whether no segment was classified at all.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
            && self.pn_numbers.is_empty()
            && self.floor.is_none()
            && self.building.is_none()
            && self.ward_no.is_none()
            && self.street.is_none()
            && self.road.is_none()
            && self.cross.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.pincode.is_none()
            && self.landmarks.is_empty()
            && self.extras.is_empty()
            && self.locality.is_empty()
    }
}
