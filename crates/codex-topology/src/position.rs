//! Spiral positioning for nodes and gates.
//!
//! Positions are polar: a layer index, an angle in degrees within the
//! layer, and a radius from the lattice center. Node layers hold 12 nodes
//! at 30 degree steps; gate layers hold 11 gates at 360/11 degree steps.
//! Radii grow linearly per layer (10 units for nodes, 8 for gates).

use crate::{GateId, NodeId, GATES_PER_LAYER};

/// Angular step between nodes in a layer.
const NODE_ANGLE_STEP: f64 = 30.0;

/// Radial growth per node layer.
const NODE_RADIUS_STEP: f64 = 10.0;

/// Radial growth per gate layer.
const GATE_RADIUS_STEP: f64 = 8.0;

/// A node's place in the spiral.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodePosition {
    /// Position in the overall spiral (1-144, equals the node id).
    pub spiral: u16,
    /// Spiral layer (1-12).
    pub layer: u16,
    /// Angle in degrees within the layer.
    pub angle: f64,
    /// Distance from the lattice center.
    pub radius: f64,
}

impl NodePosition {
    /// Compute the spiral position of a node.
    pub fn of(node: NodeId) -> Self {
        let layer = node.layer();
        let position_in_layer = node.position_in_layer();
        Self {
            spiral: node.value(),
            layer,
            angle: f64::from(position_in_layer - 1) * NODE_ANGLE_STEP,
            radius: f64::from(layer) * NODE_RADIUS_STEP,
        }
    }
}

/// A gate's place in the gate spiral.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GatePosition {
    /// Gate layer (1-9).
    pub layer: u16,
    /// Angle in degrees within the layer.
    pub angle: f64,
    /// Distance from the lattice center.
    pub radius: f64,
}

impl GatePosition {
    /// Compute the spiral position of a gate.
    pub fn of(gate: GateId) -> Self {
        let layer = gate.layer();
        let position_in_layer = gate.position_in_layer();
        Self {
            layer,
            angle: f64::from(position_in_layer - 1) * (360.0 / f64::from(GATES_PER_LAYER)),
            radius: f64::from(layer) * GATE_RADIUS_STEP,
        }
    }
}
