//! Joined views per node, card, and chapter.

use std::collections::BTreeSet;

use codex_mapper::CodexMapper;
use codex_topology::{GateId, GateTier, NodeId, PRIMARY_GATES};
use serde::{Deserialize, Serialize};

use crate::{card_for_node, card_name, nodes_for_card, ArcanumId};

/// Everything reachable from one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInterconnection {
    pub node_id: NodeId,
    pub name: String,
    /// Connected gates, ascending.
    pub gates: Vec<GateId>,
    /// Chapters reachable through the node's primary gates.
    pub chapters: Vec<u16>,
    pub card: ArcanumId,
    pub card_name: String,
    /// Perfect-consonance partners.
    pub harmonic_partners: Vec<NodeId>,
}

/// Everything reachable from one major arcana card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInterconnection {
    pub card: ArcanumId,
    pub name: String,
    /// Corresponding nodes present in the mapper, ascending.
    pub nodes: Vec<NodeId>,
    /// Union of those nodes' gates, ascending, deduplicated.
    pub gates: Vec<GateId>,
    /// Chapters reachable through those gates.
    pub chapters: Vec<u16>,
}

/// Everything reachable from one chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterInterconnection {
    pub chapter: u16,
    /// The chapter's primary gate (same id).
    pub gate: GateId,
    /// Nodes connected to that gate, ascending.
    pub nodes: Vec<NodeId>,
    /// Cards of those nodes, ascending, deduplicated.
    pub cards: Vec<ArcanumId>,
}

/// Read-only resolver over a built mapper.
#[derive(Debug, Clone, Copy)]
pub struct Interconnections<'a> {
    mapper: &'a CodexMapper,
}

impl<'a> Interconnections<'a> {
    /// Borrow the mapper. No state of its own.
    pub fn new(mapper: &'a CodexMapper) -> Self {
        Self { mapper }
    }

    /// Joined view of a node, or `None` if it has no map.
    pub fn node_view(&self, node: NodeId) -> Option<NodeInterconnection> {
        let map = self.mapper.node_map(node)?;
        let card = card_for_node(node);

        Some(NodeInterconnection {
            node_id: node,
            name: map.name.clone(),
            chapters: chapters_of(&map.gates),
            gates: map.gates.clone(),
            card,
            card_name: card_name(card).unwrap_or_default().to_string(),
            harmonic_partners: map.connections.harmonic.clone(),
        })
    }

    /// Joined view of a card, or `None` for an invalid card id.
    pub fn card_view(&self, card: ArcanumId) -> Option<CardInterconnection> {
        let name = card_name(card)?;

        let nodes: Vec<NodeId> = nodes_for_card(card)
            .into_iter()
            .filter(|id| self.mapper.node_map(*id).is_some())
            .collect();

        let gates: BTreeSet<GateId> = nodes
            .iter()
            .filter_map(|id| self.mapper.node_map(*id))
            .flat_map(|map| map.gates.iter().copied())
            .collect();
        let gates: Vec<GateId> = gates.into_iter().collect();

        Some(CardInterconnection {
            card,
            name: name.to_string(),
            nodes,
            chapters: chapters_of(&gates),
            gates,
        })
    }

    /// Joined view of a chapter (1-33), or `None` out of range.
    pub fn chapter_view(&self, chapter: u16) -> Option<ChapterInterconnection> {
        if chapter < 1 || chapter > PRIMARY_GATES {
            return None;
        }
        let gate = GateId::new(chapter);
        let gate_map = self.mapper.gate_map(gate)?;

        let cards: BTreeSet<ArcanumId> =
            gate_map.nodes.iter().map(|id| card_for_node(*id)).collect();

        Some(ChapterInterconnection {
            chapter,
            gate,
            nodes: gate_map.nodes.clone(),
            cards: cards.into_iter().collect(),
        })
    }
}

/// Chapters of the primary gates in a gate list.
fn chapters_of(gates: &[GateId]) -> Vec<u16> {
    gates.iter().filter_map(|g| GateTier::chapter(*g)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_model::seed::seeded_store;

    fn mapper() -> CodexMapper {
        CodexMapper::new(&seeded_store()).unwrap()
    }

    #[test]
    fn node_view_joins_gates_chapters_and_card() {
        let mapper = mapper();
        let links = Interconnections::new(&mapper);

        let view = links.node_view(NodeId(1)).unwrap();
        assert_eq!(view.name, "Seeker I");
        assert_eq!(view.card, ArcanumId(1));
        assert_eq!(view.card_name, "The Fool");
        // Primary gate 1 -> chapter 1
        assert!(view.gates.contains(&GateId(1)));
        assert!(view.chapters.contains(&1));
    }

    #[test]
    fn node_view_not_found_is_none() {
        let mapper = mapper();
        let links = Interconnections::new(&mapper);
        assert_eq!(links.node_view(NodeId(0)), None);
        assert_eq!(links.node_view(NodeId(145)), None);
    }

    #[test]
    fn card_view_gathers_its_node_cycle() {
        let mapper = mapper();
        let links = Interconnections::new(&mapper);

        let view = links.card_view(ArcanumId(1)).unwrap();
        assert_eq!(view.name, "The Fool");
        assert_eq!(
            view.nodes,
            vec![
                NodeId(1),
                NodeId(23),
                NodeId(45),
                NodeId(67),
                NodeId(89),
                NodeId(111),
                NodeId(133)
            ]
        );
        // Gate union is sorted and deduplicated
        for window in view.gates.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn card_view_invalid_id_is_none() {
        let mapper = mapper();
        let links = Interconnections::new(&mapper);
        assert_eq!(links.card_view(ArcanumId(0)), None);
        assert_eq!(links.card_view(ArcanumId(23)), None);
    }

    #[test]
    fn chapter_view_walks_gate_then_nodes_then_cards() {
        let mapper = mapper();
        let links = Interconnections::new(&mapper);

        let view = links.chapter_view(1).unwrap();
        assert_eq!(view.gate, GateId(1));
        // Nodes 1, 34, 67, 100, 133 share primary gate 1
        assert!(view.nodes.contains(&NodeId(1)));
        assert!(view.nodes.contains(&NodeId(34)));
        assert!(!view.cards.is_empty());
    }

    #[test]
    fn chapter_view_out_of_range_is_none() {
        let mapper = mapper();
        let links = Interconnections::new(&mapper);
        assert_eq!(links.chapter_view(0), None);
        assert_eq!(links.chapter_view(34), None);
    }

    #[test]
    fn views_serialize_to_json() {
        let mapper = mapper();
        let links = Interconnections::new(&mapper);

        let view = links.node_view(NodeId(34)).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["card_name"], "Justice");
    }
}
