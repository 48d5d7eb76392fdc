//! Deterministic seed dataset.
//!
//! Derives all 144 records from cyclic rules over the id alone, so every
//! build of the store is identical. Element, chakra, solfeggio, and color
//! cycle by layer; planet and zodiac cycle by id; harmonic partner sets
//! come from musical intervals on the 12-node layer wheel:
//!
//! ```text
//! octave   ±12 -> perfect consonance
//! fifth    ±7, fourth ±5 -> consonance
//! semitone ±1 -> dissonance
//! tritone  ±6 -> tritone
//! ```

use codex_topology::{NodeId, NODE_COUNT};

use crate::{Chakra, Element, Harmonics, MemoryStore, Node, SOLFEGGIO_FREQUENCIES};

/// Archetype name cycle, one per layer position.
const ARCHETYPES: [&str; 12] = [
    "Seeker", "Weaver", "Guardian", "Herald", "Alchemist", "Oracle",
    "Wanderer", "Keeper", "Dreamer", "Forger", "Chalice", "Crown",
];

/// Roman numerals for the 12 layers.
const LAYER_NUMERALS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Planet cycle (classical order).
const PLANETS: [&str; 10] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus",
    "Neptune", "Pluto",
];

/// Zodiac cycle.
const ZODIAC: [&str; 12] = [
    "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo", "Libra", "Scorpio",
    "Sagittarius", "Capricorn", "Aquarius", "Pisces",
];

/// Color cycle, one per solfeggio frequency.
const COLORS: [&str; 7] = [
    "#C41E3A", "#E97451", "#C8A44D", "#2E8B57", "#2B6CB0", "#4B0082", "#7F00FF",
];

/// Partner ids at a fixed interval from a node, clamped to 1-144.
fn interval_partners(id: u16, interval: u16) -> Vec<NodeId> {
    let mut partners = Vec::with_capacity(2);
    if id > interval {
        partners.push(NodeId::new(id - interval));
    }
    if id + interval <= NODE_COUNT {
        partners.push(NodeId::new(id + interval));
    }
    partners
}

/// Harmonic relation sets for a node, from the interval rules.
pub fn seeded_harmonics(id: NodeId) -> Harmonics {
    let id = id.value();
    let mut consonance = interval_partners(id, 7);
    consonance.extend(interval_partners(id, 5));
    consonance.sort();
    consonance.dedup();

    Harmonics {
        perfect_consonance: interval_partners(id, 12),
        consonance,
        dissonance: interval_partners(id, 1),
        tritone: interval_partners(id, 6),
    }
}

/// The full seeded record for one node.
pub fn seeded_node(id: NodeId) -> Node {
    let layer = id.layer();
    let position = id.position_in_layer();
    let archetype = ARCHETYPES[(position - 1) as usize];
    let numeral = LAYER_NUMERALS[(layer - 1) as usize];

    Node {
        id,
        name: Some(format!("{archetype} {numeral}")),
        element: Some(Element::cycle(layer - 1)),
        chakra: Some(Chakra::cycle(layer - 1)),
        planet: Some(PLANETS[((id.value() - 1) % 10) as usize].to_string()),
        zodiac: Some(ZODIAC[((id.value() - 1) % 12) as usize].to_string()),
        solfeggio: Some(SOLFEGGIO_FREQUENCIES[((layer - 1) % 7) as usize]),
        color: Some(COLORS[((layer - 1) % 7) as usize].to_string()),
        harmonics: seeded_harmonics(id),
        shem: Some(format!("Angel {}", ((id.value() - 1) % 72) + 1)),
        goetia: Some(format!("Demon {}", ((id.value() - 1) % 72) + 1)),
        i_ching: Some(format!("{}", ((id.value() - 1) % 64) + 1)),
        soyga: Some(char::from(b'A' + ((id.value() - 1) % 26) as u8).to_string()),
    }
}

/// The complete deterministic 144-node store.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::from_nodes(NodeId::all().map(seeded_node))
}
