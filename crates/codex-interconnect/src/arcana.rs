//! The major arcana correspondence table.
//!
//! Node-to-card correspondence is the fixed cycle
//! `card(n) = ((n - 1) mod 22) + 1`, so every node has exactly one card
//! and each card gathers 6 or 7 nodes. The table is reproducible from ids
//! alone - no curated content.

use codex_topology::{NodeId, NODE_COUNT};
use serde::{Deserialize, Serialize};

/// Number of major arcana.
pub const ARCANA_COUNT: u8 = 22;

/// The 22 major arcana in traditional order.
pub const MAJOR_ARCANA: [&str; ARCANA_COUNT as usize] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// A major arcana identifier (1-22).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArcanumId(pub u8);

impl ArcanumId {
    /// Get the raw id value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Whether the id lies in 1-22.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 >= 1 && self.0 <= ARCANA_COUNT
    }
}

impl std::fmt::Display for ArcanumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "arcanum {}", self.0)
    }
}

/// Card of a node: `((n - 1) mod 22) + 1`.
pub const fn card_for_node(node: NodeId) -> ArcanumId {
    ArcanumId((((node.value() - 1) % ARCANA_COUNT as u16) + 1) as u8)
}

/// Traditional name of a card, if the id is valid.
pub fn card_name(card: ArcanumId) -> Option<&'static str> {
    if card.is_valid() {
        Some(MAJOR_ARCANA[(card.0 - 1) as usize])
    } else {
        None
    }
}

/// All nodes corresponding to a card, ascending. Invalid ids yield empty.
pub fn nodes_for_card(card: ArcanumId) -> Vec<NodeId> {
    if !card.is_valid() {
        return Vec::new();
    }
    (u16::from(card.0)..=NODE_COUNT)
        .step_by(ARCANA_COUNT as usize)
        .map(NodeId::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_cycle_every_22_nodes() {
        assert_eq!(card_for_node(NodeId(1)), ArcanumId(1));
        assert_eq!(card_for_node(NodeId(22)), ArcanumId(22));
        assert_eq!(card_for_node(NodeId(23)), ArcanumId(1));
        assert_eq!(card_for_node(NodeId(144)), ArcanumId(12));
    }

    #[test]
    fn card_and_node_tables_agree() {
        for node in NodeId::all() {
            let card = card_for_node(node);
            assert!(nodes_for_card(card).contains(&node));
        }
    }

    #[test]
    fn every_card_covers_6_or_7_nodes() {
        let mut total = 0;
        for id in 1..=ARCANA_COUNT {
            let nodes = nodes_for_card(ArcanumId(id));
            assert!(nodes.len() == 6 || nodes.len() == 7, "card {id}");
            total += nodes.len();
        }
        assert_eq!(total, 144);
    }

    #[test]
    fn card_names_cover_the_deck() {
        assert_eq!(card_name(ArcanumId(1)), Some("The Fool"));
        assert_eq!(card_name(ArcanumId(22)), Some("The World"));
        assert_eq!(card_name(ArcanumId(0)), None);
        assert_eq!(card_name(ArcanumId(23)), None);
    }
}
