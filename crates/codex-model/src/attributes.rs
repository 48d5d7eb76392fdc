//! Elemental and chakric attribute enums.
//!
//! The value sets are fixed: six elements, seven chakras, seven Solfeggio
//! frequencies. Repair defaults cycle through them by layer, so each enum
//! exposes a `cycle` accessor alongside its full value table.

use serde::{Deserialize, Serialize};

/// The six elements a node may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Aether,
    All,
}

impl Element {
    /// All elements in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Fire,
        Self::Water,
        Self::Earth,
        Self::Air,
        Self::Aether,
        Self::All,
    ];

    /// Element at a cyclic index (wraps modulo 6).
    pub const fn cycle(index: u16) -> Self {
        Self::ALL[(index % 6) as usize]
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Aether => "Aether",
            Self::All => "All",
        };
        write!(f, "{name}")
    }
}

/// The seven chakras a node may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Chakra {
    Root,
    Sacral,
    SolarPlexus,
    Heart,
    Throat,
    ThirdEye,
    Crown,
}

impl Chakra {
    /// All chakras in ascending order.
    pub const ALL: [Self; 7] = [
        Self::Root,
        Self::Sacral,
        Self::SolarPlexus,
        Self::Heart,
        Self::Throat,
        Self::ThirdEye,
        Self::Crown,
    ];

    /// Chakra at a cyclic index (wraps modulo 7).
    pub const fn cycle(index: u16) -> Self {
        Self::ALL[(index % 7) as usize]
    }
}

impl std::fmt::Display for Chakra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Root => "Root",
            Self::Sacral => "Sacral",
            Self::SolarPlexus => "Solar Plexus",
            Self::Heart => "Heart",
            Self::Throat => "Throat",
            Self::ThirdEye => "Third Eye",
            Self::Crown => "Crown",
        };
        write!(f, "{name}")
    }
}

/// The seven Solfeggio frequencies, in Hz.
pub const SOLFEGGIO_FREQUENCIES: [u16; 7] = [396, 417, 528, 639, 741, 852, 963];

/// Default frequency for synthesized records.
pub const DEFAULT_SOLFEGGIO: u16 = 528;
