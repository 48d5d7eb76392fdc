//! Node and gate identifiers.
//!
//! Both id spaces are small dense integer ranges: nodes occupy 1-144 and
//! gates 1-99. The newtypes carry the layer and position arithmetic shared
//! by every crate in the workspace so the derivations live in one place.

use crate::{GATES_PER_LAYER, GATE_COUNT, NODES_PER_LAYER, NODE_COUNT};

/// An id fell outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdOutOfRange {
    /// Node ids are 1-144.
    #[error("node id {0} outside 1..=144")]
    Node(u16),
    /// Gate ids are 1-99.
    #[error("gate id {0} outside 1..=99")]
    Gate(u16),
}

/// A node identifier - one of the 144 lattice nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u16);

impl NodeId {
    /// First node.
    pub const FIRST: Self = Self(1);

    /// Last node.
    pub const LAST: Self = Self(NODE_COUNT);

    /// Create from a raw id. Range is not checked; use [`NodeId::try_from`]
    /// for validated construction.
    #[inline]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Whether the id lies in 1-144.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 >= 1 && self.0 <= NODE_COUNT
    }

    /// Spiral layer: `ceil(id / 12)`. Layer 1 holds nodes 1-12.
    #[inline]
    pub const fn layer(&self) -> u16 {
        self.0.div_ceil(NODES_PER_LAYER)
    }

    /// 1-based position within the layer (1-12).
    #[inline]
    pub const fn position_in_layer(&self) -> u16 {
        ((self.0 - 1) % NODES_PER_LAYER) + 1
    }

    /// Iterate every valid node id in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=NODE_COUNT).map(Self)
    }
}

impl TryFrom<u16> for NodeId {
    type Error = IdOutOfRange;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        let node = Self(id);
        if node.is_valid() {
            Ok(node)
        } else {
            Err(IdOutOfRange::Node(id))
        }
    }
}

impl From<NodeId> for u16 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// A gate identifier - one of the 99 lattice gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateId(pub u16);

impl GateId {
    /// First gate.
    pub const FIRST: Self = Self(1);

    /// Last gate.
    pub const LAST: Self = Self(GATE_COUNT);

    /// Create from a raw id. Range is not checked; use [`GateId::try_from`]
    /// for validated construction.
    #[inline]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Whether the id lies in 1-99.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 >= 1 && self.0 <= GATE_COUNT
    }

    /// Gate layer: `ceil(id / 11)`. Layer 1 holds gates 1-11.
    #[inline]
    pub const fn layer(&self) -> u16 {
        self.0.div_ceil(GATES_PER_LAYER)
    }

    /// 1-based position within the gate layer (1-11).
    #[inline]
    pub const fn position_in_layer(&self) -> u16 {
        ((self.0 - 1) % GATES_PER_LAYER) + 1
    }

    /// Iterate every valid gate id in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=GATE_COUNT).map(Self)
    }
}

impl TryFrom<u16> for GateId {
    type Error = IdOutOfRange;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        let gate = Self(id);
        if gate.is_valid() {
            Ok(gate)
        } else {
            Err(IdOutOfRange::Gate(id))
        }
    }
}

impl From<GateId> for u16 {
    fn from(id: GateId) -> Self {
        id.0
    }
}

impl std::fmt::Display for GateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gate {}", self.0)
    }
}
