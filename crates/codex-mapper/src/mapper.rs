//! The mapper itself - cached maps plus the query surface.

use std::collections::BTreeMap;

use codex_model::NodeStore;
use codex_topology::{GateId, GateTier, NodeId};

use crate::{CodexSummary, Error, GateMap, NodeMap, Result, SummaryCounts};

/// Complete derived lattice over an injected node store.
///
/// Caches are built once at construction and never mutated afterwards; a
/// rebuild from an unchanged store yields deeply equal output, orderings
/// included. Share by reference freely.
#[derive(Debug, Clone, PartialEq)]
pub struct CodexMapper {
    node_maps: BTreeMap<NodeId, NodeMap>,
    gate_maps: BTreeMap<GateId, GateMap>,
}

impl CodexMapper {
    /// Build all node and gate maps from a store.
    ///
    /// Ids with no backing record are skipped silently - the audit layer
    /// surfaces them. A completely empty store is the one fatal condition.
    pub fn new(store: &impl NodeStore) -> Result<Self> {
        if store.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut node_maps = BTreeMap::new();
        for id in NodeId::all() {
            if let Some(node) = store.get(id) {
                node_maps.insert(id, NodeMap::build(node));
            }
        }
        tracing::debug!("built {} node maps", node_maps.len());

        let mut gate_maps = BTreeMap::new();
        for gate in GateId::all() {
            gate_maps.insert(gate, GateMap::build(gate, &node_maps));
        }
        tracing::debug!("built {} gate maps", gate_maps.len());

        Ok(Self {
            node_maps,
            gate_maps,
        })
    }

    /// Build the map of a single node, without a mapper instance.
    ///
    /// Unlike bulk construction this surfaces the absence of a record.
    pub fn build_node_map(store: &impl NodeStore, id: NodeId) -> Result<NodeMap> {
        store
            .get(id)
            .map(NodeMap::build)
            .ok_or(Error::MissingNode(id))
    }

    /// Map of one node, if its record existed at build time.
    pub fn node_map(&self, id: NodeId) -> Option<&NodeMap> {
        self.node_maps.get(&id)
    }

    /// Map of one gate.
    pub fn gate_map(&self, id: GateId) -> Option<&GateMap> {
        self.gate_maps.get(&id)
    }

    /// All node maps in ascending id order.
    pub fn all_node_maps(&self) -> impl Iterator<Item = &NodeMap> {
        self.node_maps.values()
    }

    /// All gate maps in ascending id order.
    pub fn all_gate_maps(&self) -> impl Iterator<Item = &GateMap> {
        self.gate_maps.values()
    }

    /// Node maps on one spiral layer.
    pub fn nodes_by_layer(&self, layer: u16) -> Vec<&NodeMap> {
        self.node_maps
            .values()
            .filter(|map| map.position.layer == layer)
            .collect()
    }

    /// Gate maps of one tier.
    pub fn gates_by_tier(&self, tier: GateTier) -> Vec<&GateMap> {
        self.gate_maps
            .values()
            .filter(|map| map.tier == tier)
            .collect()
    }

    /// Node maps connected to a gate. Unknown gate ids yield empty.
    pub fn nodes_for_gate(&self, gate: GateId) -> Vec<&NodeMap> {
        self.gate_map(gate)
            .map(|gate_map| {
                gate_map
                    .nodes
                    .iter()
                    .filter_map(|id| self.node_map(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Gate maps connected to a node. Unknown node ids yield empty.
    pub fn gates_for_node(&self, node: NodeId) -> Vec<&GateMap> {
        self.node_map(node)
            .map(|node_map| {
                node_map
                    .gates
                    .iter()
                    .filter_map(|id| self.gate_map(*id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// JSON-serializable summary of the whole derived lattice.
    pub fn summary(&self) -> CodexSummary {
        let nodes: Vec<NodeMap> = self.node_maps.values().cloned().collect();
        let gates: Vec<GateMap> = self.gate_maps.values().cloned().collect();

        let mut nodes_by_layer = BTreeMap::new();
        for map in &nodes {
            *nodes_by_layer.entry(map.position.layer).or_insert(0) += 1;
        }
        let mut gates_by_tier = BTreeMap::new();
        for map in &gates {
            *gates_by_tier.entry(map.tier).or_insert(0) += 1;
        }

        CodexSummary {
            summary: SummaryCounts {
                total_nodes: nodes.len(),
                total_gates: gates.len(),
                nodes_by_layer,
                gates_by_tier,
            },
            nodes,
            gates,
        }
    }

    /// Replace a node's gate list without touching the gate maps.
    ///
    /// Test support for consistency checking - deliberately breaks the
    /// symmetric-reference invariant the production surface maintains.
    #[doc(hidden)]
    pub fn corrupt_node_gates(&mut self, node: NodeId, gates: Vec<GateId>) {
        if let Some(map) = self.node_maps.get_mut(&node) {
            map.gates = gates;
        }
    }

    /// Remove a node map entirely, leaving any gate references dangling.
    ///
    /// Test support for consistency checking.
    #[doc(hidden)]
    pub fn corrupt_remove_node(&mut self, node: NodeId) {
        self.node_maps.remove(&node);
    }
}
