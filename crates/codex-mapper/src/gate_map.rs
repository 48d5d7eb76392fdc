//! Per-gate derived structure.

use std::collections::BTreeMap;

use codex_topology::{gate_name, GateId, GatePosition, GateTier, NodeId};
use serde::{Deserialize, Serialize};

use crate::NodeMap;

/// Derived map of a single gate.
///
/// Gates have no independent store - everything here derives from the
/// node maps. An empty `nodes` set is a valid degenerate result; the audit
/// layer reports it as a warning, not this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateMap {
    pub gate_id: GateId,
    pub name: String,
    /// Nodes whose gate sets contain this gate, ascending.
    pub nodes: Vec<NodeId>,
    /// Chapter (primary gates only).
    pub chapter: Option<u16>,
    pub tier: GateTier,
    pub position: GatePosition,
}

impl GateMap {
    /// Derive the map of one gate by reverse scan over the node maps.
    ///
    /// O(144) per gate. The full set of node maps must already be built.
    pub fn build(gate: GateId, node_maps: &BTreeMap<NodeId, NodeMap>) -> Self {
        let nodes = node_maps
            .values()
            .filter(|map| map.connects_to(gate))
            .map(|map| map.node_id)
            .collect();

        Self {
            gate_id: gate,
            name: gate_name(gate),
            nodes,
            chapter: GateTier::chapter(gate),
            tier: GateTier::of(gate),
            position: GatePosition::of(gate),
        }
    }
}
