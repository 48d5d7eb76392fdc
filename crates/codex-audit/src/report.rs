//! Dataset audit - the read-only classification pass.

use codex_mapper::CodexMapper;
use codex_model::{MissingField, NodeStore};
use codex_topology::{GateId, NodeId};
use serde::{Deserialize, Serialize};

/// A present record lacking required descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteNode {
    pub id: NodeId,
    pub missing: Vec<MissingField>,
}

/// Result of one full audit pass. Regenerated fresh on each run;
/// plain counts and id lists, renderable as a text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetAudit {
    /// Node ids present with all required fields.
    pub complete: Vec<NodeId>,
    /// Node ids present but lacking fields.
    pub incomplete: Vec<IncompleteNode>,
    /// Node ids with no record at all.
    pub missing: Vec<NodeId>,
    /// Gate ids with at least one connected node.
    pub mapped_gates: Vec<GateId>,
    /// Gate ids no node connects to.
    pub unmapped_gates: Vec<GateId>,
    /// Total node-to-gate edges.
    pub node_gate_edges: usize,
    /// Total node-to-node edges (harmonic, dissonant, tritone, adjacent).
    pub node_node_edges: usize,
}

impl DatasetAudit {
    /// Whether every node id has a complete record.
    ///
    /// Says nothing about gates: the outer spiral band (79-99) is
    /// structurally unreachable - node layers top out at 12, so spiral
    /// gates stop at 78 - and stays unmapped even over a full store.
    pub fn nodes_fully_populated(&self) -> bool {
        self.incomplete.is_empty() && self.missing.is_empty()
    }

    /// Render as a plain text report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Codex dataset audit\n");
        out.push_str(&format!(
            "  nodes: {} complete, {} incomplete, {} missing\n",
            self.complete.len(),
            self.incomplete.len(),
            self.missing.len()
        ));
        out.push_str(&format!(
            "  gates: {} mapped, {} unmapped\n",
            self.mapped_gates.len(),
            self.unmapped_gates.len()
        ));
        out.push_str(&format!(
            "  edges: {} node-gate, {} node-node\n",
            self.node_gate_edges, self.node_node_edges
        ));
        for entry in &self.incomplete {
            let fields: Vec<String> = entry.missing.iter().map(ToString::to_string).collect();
            out.push_str(&format!(
                "  incomplete: {} (missing {})\n",
                entry.id,
                fields.join(", ")
            ));
        }
        for id in &self.missing {
            out.push_str(&format!("  missing: {id}\n"));
        }
        for gate in &self.unmapped_gates {
            out.push_str(&format!("  unmapped: {gate}\n"));
        }
        out
    }
}

/// Classify every node and gate id and tally edges. Read-only.
pub fn audit(store: &impl NodeStore, mapper: &CodexMapper) -> DatasetAudit {
    let mut complete = Vec::new();
    let mut incomplete = Vec::new();
    let mut missing = Vec::new();

    for id in NodeId::all() {
        match store.get(id) {
            None => missing.push(id),
            Some(node) => {
                let fields = node.missing_fields();
                if fields.is_empty() {
                    complete.push(id);
                } else {
                    incomplete.push(IncompleteNode {
                        id,
                        missing: fields,
                    });
                }
            }
        }
    }

    let mut mapped_gates = Vec::new();
    let mut unmapped_gates = Vec::new();
    for gate in GateId::all() {
        let is_mapped = mapper
            .gate_map(gate)
            .map_or(false, |map| !map.nodes.is_empty());
        if is_mapped {
            mapped_gates.push(gate);
        } else {
            unmapped_gates.push(gate);
        }
    }

    let node_gate_edges = mapper.all_node_maps().map(|map| map.gates.len()).sum();
    let node_node_edges = mapper
        .all_node_maps()
        .map(|map| {
            map.connections.harmonic.len()
                + map.connections.dissonant.len()
                + map.connections.tritone.len()
                + map.connections.adjacent.len()
        })
        .sum();

    tracing::debug!(
        "audit: {} complete, {} incomplete, {} missing, {} unmapped gates",
        complete.len(),
        incomplete.len(),
        missing.len(),
        unmapped_gates.len()
    );

    DatasetAudit {
        complete,
        incomplete,
        missing,
        mapped_gates,
        unmapped_gates,
        node_gate_edges,
        node_node_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_model::{seed::seeded_store, MemoryStore, Node};

    #[test]
    fn seeded_store_audits_clean_on_nodes() {
        let store = seeded_store();
        let mapper = CodexMapper::new(&store).unwrap();
        let report = audit(&store, &mapper);

        assert_eq!(report.complete.len(), 144);
        assert!(report.incomplete.is_empty());
        assert!(report.missing.is_empty());
        assert!(report.nodes_fully_populated());
    }

    #[test]
    fn outer_spiral_band_is_structurally_unmapped() {
        let store = seeded_store();
        let mapper = CodexMapper::new(&store).unwrap();
        let report = audit(&store, &mapper);

        // Layers top out at 12, so spiral gates 79-99 never gain a node
        let expected: Vec<GateId> = (79..=99).map(GateId).collect();
        assert_eq!(report.unmapped_gates, expected);
        assert_eq!(report.mapped_gates.len(), 78);
    }

    #[test]
    fn sparse_store_classifies_all_three_ways() {
        let mut incomplete_node = Node::bare(NodeId(2));
        incomplete_node.name = Some("Half-made".into());

        let store = MemoryStore::from_nodes([
            codex_model::seed::seeded_node(NodeId(1)),
            incomplete_node,
        ]);
        let mapper = CodexMapper::new(&store).unwrap();
        let report = audit(&store, &mapper);

        assert_eq!(report.complete, vec![NodeId(1)]);
        assert_eq!(report.incomplete.len(), 1);
        assert_eq!(report.incomplete[0].id, NodeId(2));
        assert_eq!(
            report.incomplete[0].missing,
            vec![MissingField::Element, MissingField::Chakra]
        );
        assert_eq!(report.missing.len(), 142);
        assert!(!report.nodes_fully_populated());
    }

    #[test]
    fn edge_tallies_match_map_contents() {
        let store = seeded_store();
        let mapper = CodexMapper::new(&store).unwrap();
        let report = audit(&store, &mapper);

        let expected_gate_edges: usize = mapper.all_node_maps().map(|m| m.gates.len()).sum();
        assert_eq!(report.node_gate_edges, expected_gate_edges);
        assert!(report.node_node_edges > 0);
    }

    #[test]
    fn render_lists_findings() {
        let store = MemoryStore::from_nodes([Node::bare(NodeId(5))]);
        let mapper = CodexMapper::new(&store).unwrap();
        let text = audit(&store, &mapper).render();

        assert!(text.contains("1 incomplete"));
        assert!(text.contains("143 missing"));
        assert!(text.contains("node 5 (missing name, element, chakra)"));
    }
}
