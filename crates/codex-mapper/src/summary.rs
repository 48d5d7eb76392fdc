//! Serializable summary of the derived lattice.

use std::collections::BTreeMap;

use codex_topology::GateTier;
use serde::{Deserialize, Serialize};

use crate::{GateMap, NodeMap};

/// Aggregate counts over the derived maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub total_nodes: usize,
    pub total_gates: usize,
    /// Node count per spiral layer.
    pub nodes_by_layer: BTreeMap<u16, usize>,
    /// Gate count per tier.
    pub gates_by_tier: BTreeMap<GateTier, usize>,
}

/// The complete mapping as one JSON-serializable object, suitable for
/// persistence or transmission to a front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodexSummary {
    pub nodes: Vec<NodeMap>,
    pub gates: Vec<GateMap>,
    pub summary: SummaryCounts,
}
