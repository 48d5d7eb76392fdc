//! Codex 144:99 Lattice Topology
//!
//! Deterministic geometry for a fixed lattice of 144 nodes and 99 gates.
//!
//! # Mathematical Foundation
//!
//! Nodes wind outward in a spiral of 12 layers with 12 nodes per layer.
//! A node's layer is `ceil(id / 12)`; its angle within the layer advances
//! 30 degrees per position and its radius grows 10 units per layer.
//!
//! Gates occupy a second, coarser spiral of 9 layers with 11 gates per
//! layer, and partition into three fixed tiers by id:
//!
//! - **Primary** (1-33): each maps 1:1 to a chapter
//! - **Harmonic** (34-66): derived from node consonance relations
//! - **Spiral** (67-99): derived from node layers
//!
//! # The Assignment Rule
//!
//! Every node connects to gates through a deterministic rule:
//!
//! ```text
//! primary(n)  = ((n - 1) mod 33) + 1
//! harmonic(h) = 33 + ((h - 1) mod 33) + 1    for each consonant partner h
//! spiral(L)   = 66 + ((L - 1) mod 33) + 1    for the node's layer L
//! ```
//!
//! The resulting set is deduplicated and sorted ascending. Given the same
//! inputs the rule is bit-for-bit reproducible; every derived structure in
//! the workspace rebuilds identically from an unchanged node store.

mod adjacency;
mod gates;
mod ids;
mod position;
mod tier;

pub use adjacency::adjacent_nodes;
pub use gates::{gates_for_node, harmonic_gate, primary_gate, spiral_gate};
pub use ids::{GateId, IdOutOfRange, NodeId};
pub use position::{GatePosition, NodePosition};
pub use tier::{gate_name, GateTier};

/// Total number of nodes in the lattice (invariant: always 144).
pub const NODE_COUNT: u16 = 144;

/// Total number of gates in the lattice (invariant: always 99).
pub const GATE_COUNT: u16 = 99;

/// Nodes per spiral layer.
pub const NODES_PER_LAYER: u16 = 12;

/// Number of node layers.
pub const NODE_LAYERS: u16 = 12;

/// Gates per gate layer.
pub const GATES_PER_LAYER: u16 = 11;

/// Number of gate layers.
pub const GATE_LAYERS: u16 = 9;

/// Gates in the primary tier (ids 1-33).
pub const PRIMARY_GATES: u16 = 33;

/// Gates in the harmonic tier (ids 34-66).
pub const HARMONIC_GATES: u16 = 33;

/// Gates in the spiral tier (ids 67-99).
pub const SPIRAL_GATES: u16 = 33;

// Compile-time assertions of the lattice invariants
const _: () = assert!(NODE_LAYERS * NODES_PER_LAYER == NODE_COUNT);
const _: () = assert!(GATE_LAYERS * GATES_PER_LAYER == GATE_COUNT);
const _: () = assert!(PRIMARY_GATES + HARMONIC_GATES + SPIRAL_GATES == GATE_COUNT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_invariants() {
        assert_eq!(NODE_LAYERS * NODES_PER_LAYER, NODE_COUNT);
        assert_eq!(GATE_LAYERS * GATES_PER_LAYER, GATE_COUNT);
        assert_eq!(PRIMARY_GATES + HARMONIC_GATES + SPIRAL_GATES, GATE_COUNT);
    }
}
