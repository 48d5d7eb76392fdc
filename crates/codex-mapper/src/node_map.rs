//! Per-node derived structure.

use codex_model::{Chakra, Element, Node};
use codex_topology::{adjacent_nodes, gates_for_node, GateId, NodeId, NodePosition};
use serde::{Deserialize, Serialize};

/// Node-to-node relation sets of a mapped node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connections {
    /// Perfect-consonance partners.
    pub harmonic: Vec<NodeId>,
    /// Dissonant partners.
    pub dissonant: Vec<NodeId>,
    /// Tritone partners.
    pub tritone: Vec<NodeId>,
    /// Spiral neighbors (`id ± 1`, clamped to range).
    pub adjacent: Vec<NodeId>,
}

/// Parsed numeric forms of the raw correspondence strings.
///
/// Out-of-range or unparseable raw values become `None` - a defined
/// fallback, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCorrespondences {
    /// Shem angel index (1-72).
    pub shem_angel: Option<u8>,
    /// Goetia demon index (1-72).
    pub goetia_demon: Option<u8>,
    /// I Ching hexagram (1-64).
    pub i_ching: Option<u8>,
}

/// Soyga letters pass through unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correspondences {
    #[serde(flatten)]
    pub parsed: ParsedCorrespondences,
    /// Soyga cipher letter, verbatim from the store.
    pub soyga: Option<String>,
}

/// Derived map of a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMap {
    pub node_id: NodeId,
    pub name: String,
    pub position: NodePosition,
    pub element: Option<Element>,
    pub chakra: Option<Chakra>,
    pub planet: Option<String>,
    pub zodiac: Option<String>,
    /// Connected gates, sorted ascending, deduplicated.
    pub gates: Vec<GateId>,
    pub connections: Connections,
    pub correspondences: Correspondences,
}

impl NodeMap {
    /// Derive the map of one stored node. Pure: same record, same map.
    pub fn build(node: &Node) -> Self {
        let id = node.id;
        let harmonics = &node.harmonics;

        Self {
            node_id: id,
            name: node
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| format!("Node {}", id.value())),
            position: NodePosition::of(id),
            element: node.element,
            chakra: node.chakra,
            planet: node.planet.clone(),
            zodiac: node.zodiac.clone(),
            gates: gates_for_node(id, &harmonics.perfect_consonance, &harmonics.consonance),
            connections: Connections {
                harmonic: harmonics.perfect_consonance.clone(),
                dissonant: harmonics.dissonance.clone(),
                tritone: harmonics.tritone.clone(),
                adjacent: adjacent_nodes(id),
            },
            correspondences: Correspondences {
                parsed: ParsedCorrespondences {
                    shem_angel: node.shem.as_deref().and_then(|raw| parse_index(raw, 72)),
                    goetia_demon: node.goetia.as_deref().and_then(|raw| parse_index(raw, 72)),
                    i_ching: node.i_ching.as_deref().and_then(|raw| parse_index(raw, 64)),
                },
                soyga: node.soyga.clone(),
            },
        }
    }

    /// Whether this node's gate list contains a gate. The list is sorted,
    /// so lookups binary-search.
    pub fn connects_to(&self, gate: GateId) -> bool {
        self.gates.binary_search(&gate).is_ok()
    }
}

/// First digit run in a raw correspondence string, kept only when it lies
/// in `1..=max`.
fn parse_index(raw: &str, max: u8) -> Option<u8> {
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    let value: u32 = digits.parse().ok()?;
    if value >= 1 && value <= u32::from(max) {
        Some(value as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_model::Harmonics;
    use codex_topology::NodeId;

    fn node(id: u16) -> Node {
        Node::bare(NodeId(id))
    }

    #[test]
    fn bare_node_gets_fallback_name_and_defaults() {
        let map = NodeMap::build(&node(7));
        assert_eq!(map.name, "Node 7");
        assert_eq!(map.element, None);
        assert!(map.connections.harmonic.is_empty());
        // Primary and spiral gates are always present
        assert_eq!(map.gates, vec![GateId(7), GateId(67)]);
    }

    #[test]
    fn adjacency_comes_from_topology() {
        let map = NodeMap::build(&node(1));
        assert_eq!(map.connections.adjacent, vec![NodeId(2)]);

        let map = NodeMap::build(&node(80));
        assert_eq!(map.connections.adjacent, vec![NodeId(79), NodeId(81)]);
    }

    #[test]
    fn harmonics_copy_into_connections() {
        let mut n = node(10);
        n.harmonics = Harmonics {
            perfect_consonance: vec![NodeId(22)],
            consonance: vec![NodeId(3)],
            dissonance: vec![NodeId(9), NodeId(11)],
            tritone: vec![NodeId(4)],
        };
        let map = NodeMap::build(&n);
        assert_eq!(map.connections.harmonic, vec![NodeId(22)]);
        assert_eq!(map.connections.dissonant, vec![NodeId(9), NodeId(11)]);
        assert_eq!(map.connections.tritone, vec![NodeId(4)]);
        // 22 -> harmonic gate 55, 3 -> harmonic gate 36
        assert_eq!(
            map.gates,
            vec![GateId(10), GateId(36), GateId(55), GateId(67)]
        );
    }

    #[test]
    fn correspondences_parse_first_digit_run() {
        let mut n = node(5);
        n.shem = Some("Angel 42".into());
        n.goetia = Some("Demon 7 of the brass vessel".into());
        n.i_ching = Some("64".into());
        n.soyga = Some("K".into());

        let map = NodeMap::build(&n);
        assert_eq!(map.correspondences.parsed.shem_angel, Some(42));
        assert_eq!(map.correspondences.parsed.goetia_demon, Some(7));
        assert_eq!(map.correspondences.parsed.i_ching, Some(64));
        assert_eq!(map.correspondences.soyga.as_deref(), Some("K"));
    }

    #[test]
    fn out_of_range_correspondences_drop_to_none() {
        let mut n = node(5);
        n.shem = Some("Angel 73".into());
        n.i_ching = Some("hexagram 0".into());
        n.goetia = Some("no digits here".into());

        let map = NodeMap::build(&n);
        assert_eq!(map.correspondences.parsed.shem_angel, None);
        assert_eq!(map.correspondences.parsed.i_ching, None);
        assert_eq!(map.correspondences.parsed.goetia_demon, None);
    }

    #[test]
    fn connects_to_uses_sorted_gate_list() {
        let map = NodeMap::build(&node(7));
        assert!(map.connects_to(GateId(7)));
        assert!(map.connects_to(GateId(67)));
        assert!(!map.connects_to(GateId(8)));
    }

    #[test]
    fn build_is_deterministic() {
        let mut n = node(34);
        n.harmonics.perfect_consonance = vec![NodeId(1), NodeId(68)];
        assert_eq!(NodeMap::build(&n), NodeMap::build(&n));
    }
}
