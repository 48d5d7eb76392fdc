//! Cross-consistency validation - the symmetric-reference invariant.

use codex_mapper::CodexMapper;
use codex_topology::{GateId, NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A referential integrity violation - an id pointing outside the valid
/// range or at an entity with no map. Always reported, never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Inconsistency {
    /// A node's gate list holds an id outside 1-99.
    #[error("{node} references {gate} outside the gate range")]
    GateOutOfRange { node: NodeId, gate: GateId },

    /// A gate's node list holds an id outside 1-144.
    #[error("{gate} references {node} outside the node range")]
    NodeOutOfRange { gate: GateId, node: NodeId },

    /// A node's gate list holds an in-range gate with no map.
    #[error("{node} references {gate} which has no map")]
    UnknownGate { node: NodeId, gate: GateId },

    /// A gate's node list holds an in-range node with no map.
    #[error("{gate} references {node} which has no map")]
    UnknownNode { gate: GateId, node: NodeId },
}

/// An asymmetric-but-resolvable reference. Non-fatal, reported for
/// operator review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Asymmetry {
    /// Node lists gate, but the gate's node list lacks the node.
    #[error("{node} lists {gate} but the gate does not list it back")]
    GateMissingNode { node: NodeId, gate: GateId },

    /// Gate lists node, but the node's gate list lacks the gate.
    #[error("{gate} lists {node} but the node does not list it back")]
    NodeMissingGate { gate: GateId, node: NodeId },
}

/// Result of one consistency pass. The pass itself never fails; findings
/// are data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub errors: Vec<Inconsistency>,
    pub warnings: Vec<Asymmetry>,
}

impl ConsistencyReport {
    /// Whether the lattice is fully symmetric and referentially sound.
    pub fn is_consistent(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Render errors then warnings as lines of text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Connection validation: {} errors, {} warnings\n",
            self.errors.len(),
            self.warnings.len()
        ));
        for error in &self.errors {
            out.push_str(&format!("  error: {error}\n"));
        }
        for warning in &self.warnings {
            out.push_str(&format!("  warning: {warning}\n"));
        }
        out
    }
}

/// Check every node-to-gate reference and every gate-to-node reference
/// for range validity, existence, and symmetry.
pub fn validate_connections(mapper: &CodexMapper) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    for node_map in mapper.all_node_maps() {
        let node = node_map.node_id;
        for &gate in &node_map.gates {
            if !gate.is_valid() {
                report.errors.push(Inconsistency::GateOutOfRange { node, gate });
                continue;
            }
            match mapper.gate_map(gate) {
                None => report.errors.push(Inconsistency::UnknownGate { node, gate }),
                Some(gate_map) => {
                    if !gate_map.nodes.contains(&node) {
                        report
                            .warnings
                            .push(Asymmetry::GateMissingNode { node, gate });
                    }
                }
            }
        }
    }

    for gate_map in mapper.all_gate_maps() {
        let gate = gate_map.gate_id;
        for &node in &gate_map.nodes {
            if !node.is_valid() {
                report.errors.push(Inconsistency::NodeOutOfRange { gate, node });
                continue;
            }
            match mapper.node_map(node) {
                None => report.errors.push(Inconsistency::UnknownNode { gate, node }),
                Some(node_map) => {
                    if !node_map.gates.contains(&gate) {
                        report
                            .warnings
                            .push(Asymmetry::NodeMissingGate { gate, node });
                    }
                }
            }
        }
    }

    if !report.is_consistent() {
        tracing::warn!(
            "connection validation found {} errors, {} warnings",
            report.errors.len(),
            report.warnings.len()
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_model::seed::seeded_store;

    fn mapper() -> CodexMapper {
        CodexMapper::new(&seeded_store()).unwrap()
    }

    #[test]
    fn untouched_lattice_is_consistent() {
        let report = validate_connections(&mapper());
        assert!(report.is_consistent(), "{}", report.render());
    }

    #[test]
    fn out_of_range_gate_is_one_error() {
        let mut mapper = mapper();
        let mut gates = mapper.node_map(NodeId(5)).unwrap().gates.clone();
        gates.push(GateId(200));
        mapper.corrupt_node_gates(NodeId(5), gates);

        let report = validate_connections(&mapper);
        assert_eq!(
            report.errors,
            vec![Inconsistency::GateOutOfRange {
                node: NodeId(5),
                gate: GateId(200)
            }]
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn removed_node_leaves_dangling_gate_references() {
        let mut mapper = mapper();
        mapper.corrupt_remove_node(NodeId(5));

        let report = validate_connections(&mapper);
        assert!(!report.errors.is_empty());
        assert!(report
            .errors
            .iter()
            .all(|e| matches!(e, Inconsistency::UnknownNode { node, .. } if *node == NodeId(5))));
    }

    #[test]
    fn dropped_gate_reference_is_a_warning_both_ways() {
        let mut mapper = mapper();
        // Remove node 7's first gate from its list; the gate still lists
        // the node back, so this is asymmetric, not broken.
        let gates = mapper.node_map(NodeId(7)).unwrap().gates.clone();
        let dropped = gates[0];
        mapper.corrupt_node_gates(NodeId(7), gates[1..].to_vec());

        let report = validate_connections(&mapper);
        assert!(report.errors.is_empty());
        assert!(report.warnings.contains(&Asymmetry::NodeMissingGate {
            gate: dropped,
            node: NodeId(7)
        }));
    }

    #[test]
    fn report_serializes_for_operators() {
        let mut mapper = mapper();
        let mut gates = mapper.node_map(NodeId(5)).unwrap().gates.clone();
        gates.push(GateId(200));
        mapper.corrupt_node_gates(NodeId(5), gates);

        let report = validate_connections(&mapper);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn errors_render_with_both_ids() {
        let error = Inconsistency::GateOutOfRange {
            node: NodeId(5),
            gate: GateId(200),
        };
        assert_eq!(
            error.to_string(),
            "node 5 references gate 200 outside the gate range"
        );
    }
}
