//! The node-gate assignment rule.
//!
//! Every node derives its connected gates from three sources:
//!
//! 1. One **primary** gate from its own id, wrapping the 33 primary gates.
//! 2. One **harmonic** gate per consonant partner (both perfect consonance
//!    and plain consonance feed the same band).
//! 3. One **spiral** gate from its layer.
//!
//! The result is deduplicated and sorted ascending. The ordering is part of
//! the public contract; callers may assert exact sequences.

use std::collections::BTreeSet;

use crate::{GateId, NodeId, PRIMARY_GATES};

/// Primary gate of a node: `((n - 1) mod 33) + 1`.
#[inline]
pub const fn primary_gate(node: NodeId) -> GateId {
    GateId::new(((node.value() - 1) % PRIMARY_GATES) + 1)
}

/// Harmonic gate for a consonant partner: `33 + ((h - 1) mod 33) + 1`.
///
/// Always lands in the harmonic band 34-66.
#[inline]
pub const fn harmonic_gate(partner: NodeId) -> GateId {
    GateId::new(PRIMARY_GATES + ((partner.value() - 1) % PRIMARY_GATES) + 1)
}

/// Spiral gate for a node layer: `66 + ((L - 1) mod 33) + 1`.
///
/// Always lands in the spiral band 67-99.
#[inline]
pub const fn spiral_gate(layer: u16) -> GateId {
    GateId::new(2 * PRIMARY_GATES + ((layer - 1) % PRIMARY_GATES) + 1)
}

/// Compute the full gate set for a node.
///
/// `perfect_consonance` and `consonance` are the node's harmonic partner
/// lists from the node store; empty slices are a defined fallback, not an
/// error. Returns sorted ascending with duplicates removed.
pub fn gates_for_node(
    node: NodeId,
    perfect_consonance: &[NodeId],
    consonance: &[NodeId],
) -> Vec<GateId> {
    let mut gates = BTreeSet::new();

    gates.insert(primary_gate(node));

    for &partner in perfect_consonance.iter().chain(consonance) {
        let gate = harmonic_gate(partner);
        debug_assert!(gate.value() <= 66);
        gates.insert(gate);
    }

    let gate = spiral_gate(node.layer());
    debug_assert!(gate.value() <= 99);
    gates.insert(gate);

    gates.into_iter().collect()
}
