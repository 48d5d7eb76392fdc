//! Repair operations.
//!
//! Both operations are pure with respect to their input store: they
//! return a new [`MemoryStore`] and the caller decides whether to adopt
//! it. Synthesized defaults derive only from the id's layer, so repair is
//! deterministic and reproducible.

use codex_model::{Chakra, Element, MemoryStore, Node, NodeStore, DEFAULT_SOLFEGGIO};
use codex_topology::NodeId;

/// Result of a repair operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    /// The input store plus the applied changes.
    pub store: MemoryStore,
    /// Ids whose records were created or filled.
    pub repaired: Vec<NodeId>,
    /// Ids left untouched (already present / already complete / absent).
    pub skipped: Vec<NodeId>,
}

/// Synthesize a placeholder record from layer-derived defaults.
///
/// Element and chakra cycle by `(layer - 1)`; frequency defaults to
/// 528 Hz; harmonics stay empty.
pub fn placeholder_node(id: NodeId) -> Node {
    let layer = id.layer();
    let mut node = Node::bare(id);
    node.name = Some(format!("Node {}", id.value()));
    node.element = Some(Element::cycle(layer - 1));
    node.chakra = Some(Chakra::cycle(layer - 1));
    node.solfeggio = Some(DEFAULT_SOLFEGGIO);
    node
}

/// Create placeholder records for ids absent from the store.
///
/// Present ids are never overwritten - they land in `skipped`. An empty
/// id list is a no-op returning a clone of the input.
pub fn generate_missing_nodes(store: &MemoryStore, ids: &[NodeId]) -> RepairOutcome {
    let mut repaired_store = store.clone();
    let mut repaired = Vec::new();
    let mut skipped = Vec::new();

    for &id in ids {
        if repaired_store.contains(id) {
            skipped.push(id);
        } else {
            repaired_store.insert(placeholder_node(id));
            repaired.push(id);
        }
    }

    if !repaired.is_empty() {
        tracing::info!("generated {} placeholder nodes", repaired.len());
    }

    RepairOutcome {
        store: repaired_store,
        repaired,
        skipped,
    }
}

/// Fill the missing descriptive fields of present, incomplete records.
///
/// Only the fields the audit classifies (name, element, chakra) are
/// touched, and only when absent; every populated field is preserved.
/// Absent and already-complete ids land in `skipped`.
pub fn complete_incomplete_nodes(store: &MemoryStore, ids: &[NodeId]) -> RepairOutcome {
    let mut repaired_store = store.clone();
    let mut repaired = Vec::new();
    let mut skipped = Vec::new();

    for &id in ids {
        let Some(node) = store.get(id) else {
            skipped.push(id);
            continue;
        };
        if node.is_complete() {
            skipped.push(id);
            continue;
        }

        let defaults = placeholder_node(id);
        let mut filled = node.clone();
        if filled.name.as_deref().map_or(true, str::is_empty) {
            filled.name = defaults.name;
        }
        if filled.element.is_none() {
            filled.element = defaults.element;
        }
        if filled.chakra.is_none() {
            filled.chakra = defaults.chakra;
        }
        repaired_store.insert(filled);
        repaired.push(id);
    }

    if !repaired.is_empty() {
        tracing::info!("completed {} incomplete nodes", repaired.len());
    }

    RepairOutcome {
        store: repaired_store,
        repaired,
        skipped,
    }
}
