//! The node record.

use codex_topology::NodeId;
use serde::{Deserialize, Serialize};

use crate::{Chakra, Element};

/// Node-to-node relation sets sourced from the store.
///
/// Absent sets default to empty - a defined fallback, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmonics {
    /// Octave-grade partners.
    #[serde(default)]
    pub perfect_consonance: Vec<NodeId>,
    /// Fifth/fourth-grade partners.
    #[serde(default)]
    pub consonance: Vec<NodeId>,
    /// Clashing partners.
    #[serde(default)]
    pub dissonance: Vec<NodeId>,
    /// Tritone partners.
    #[serde(default)]
    pub tritone: Vec<NodeId>,
}

impl Harmonics {
    /// Whether every relation set is empty.
    pub fn is_empty(&self) -> bool {
        self.perfect_consonance.is_empty()
            && self.consonance.is_empty()
            && self.dissonance.is_empty()
            && self.tritone.is_empty()
    }
}

/// A descriptive field a present record may lack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingField {
    Name,
    Element,
    Chakra,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Element => "element",
            Self::Chakra => "chakra",
        };
        write!(f, "{name}")
    }
}

/// An archetypal record, one of 144.
///
/// Identity is the node id. Descriptive fields are optional so the store
/// can hold incomplete records; the audit layer classifies them, and the
/// mapping layer substitutes defaults without erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: Option<String>,
    pub element: Option<Element>,
    pub chakra: Option<Chakra>,
    pub planet: Option<String>,
    pub zodiac: Option<String>,
    /// Solfeggio frequency in Hz.
    pub solfeggio: Option<u16>,
    /// Hex color, e.g. `#C8A44D`.
    pub color: Option<String>,
    #[serde(default)]
    pub harmonics: Harmonics,
    /// Raw Shem angel reference, e.g. `"Angel 42"`.
    pub shem: Option<String>,
    /// Raw Goetia demon reference.
    pub goetia: Option<String>,
    /// Raw I Ching hexagram reference.
    pub i_ching: Option<String>,
    /// Soyga cipher letter.
    pub soyga: Option<String>,
}

impl Node {
    /// A bare record carrying only an id.
    pub fn bare(id: NodeId) -> Self {
        Self {
            id,
            name: None,
            element: None,
            chakra: None,
            planet: None,
            zodiac: None,
            solfeggio: None,
            color: None,
            harmonics: Harmonics::default(),
            shem: None,
            goetia: None,
            i_ching: None,
            soyga: None,
        }
    }

    /// Descriptive fields this record lacks (name, element, chakra).
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.name.as_deref().map_or(true, str::is_empty) {
            missing.push(MissingField::Name);
        }
        if self.element.is_none() {
            missing.push(MissingField::Element);
        }
        if self.chakra.is_none() {
            missing.push(MissingField::Chakra);
        }
        missing
    }

    /// Whether the record carries all required descriptive fields.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
