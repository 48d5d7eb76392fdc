//! The three-way gate tier partition.
//!
//! Gates partition by id into primary (1-33), harmonic (34-66), and
//! spiral (67-99). The partition is fixed and non-configurable; primary
//! gates additionally map 1:1 to chapters.

use crate::{GateId, HARMONIC_GATES, PRIMARY_GATES};

/// Tier of a gate, determined entirely by its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GateTier {
    /// Gates 1-33, each mapped 1:1 to a chapter.
    Primary,
    /// Gates 34-66, derived from node consonance relations.
    Harmonic,
    /// Gates 67-99, derived from node layers.
    Spiral,
}

impl GateTier {
    /// All tiers in id order.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Harmonic, Self::Spiral];

    /// Classify a gate by its id.
    pub const fn of(gate: GateId) -> Self {
        if gate.value() <= PRIMARY_GATES {
            Self::Primary
        } else if gate.value() <= PRIMARY_GATES + HARMONIC_GATES {
            Self::Harmonic
        } else {
            Self::Spiral
        }
    }

    /// The inclusive id range covered by this tier.
    pub const fn id_range(&self) -> std::ops::RangeInclusive<u16> {
        match self {
            Self::Primary => 1..=33,
            Self::Harmonic => 34..=66,
            Self::Spiral => 67..=99,
        }
    }

    /// Chapter for a gate: primary gates map 1:1, other tiers have none.
    pub const fn chapter(gate: GateId) -> Option<u16> {
        if gate.value() >= 1 && gate.value() <= PRIMARY_GATES {
            Some(gate.value())
        } else {
            None
        }
    }
}

impl std::fmt::Display for GateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::Harmonic => "harmonic",
            Self::Spiral => "spiral",
        };
        write!(f, "{name}")
    }
}

/// Human-readable gate name.
///
/// Primary gates carry their chapter; the other tiers are named by tier.
pub fn gate_name(gate: GateId) -> String {
    match GateTier::of(gate) {
        GateTier::Primary => match GateTier::chapter(gate) {
            Some(chapter) => format!("Gate {} (Chapter {})", gate.value(), chapter),
            None => format!("Gate {}", gate.value()),
        },
        GateTier::Harmonic => format!("Harmonic Gate {}", gate.value()),
        GateTier::Spiral => format!("Spiral Gate {}", gate.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GATE_COUNT;

    #[test]
    fn tier_boundaries() {
        assert_eq!(GateTier::of(GateId(1)), GateTier::Primary);
        assert_eq!(GateTier::of(GateId(33)), GateTier::Primary);
        assert_eq!(GateTier::of(GateId(34)), GateTier::Harmonic);
        assert_eq!(GateTier::of(GateId(66)), GateTier::Harmonic);
        assert_eq!(GateTier::of(GateId(67)), GateTier::Spiral);
        assert_eq!(GateTier::of(GateId(99)), GateTier::Spiral);
    }

    #[test]
    fn tiers_partition_all_99_gates() {
        // Union of the three ranges covers 1-99 exactly once
        let mut covered = vec![0u8; GATE_COUNT as usize + 1];
        for tier in GateTier::ALL {
            for id in tier.id_range() {
                covered[id as usize] += 1;
            }
        }
        assert!(covered[1..].iter().all(|&c| c == 1));
    }

    #[test]
    fn tier_of_matches_id_range() {
        for gate in GateId::all() {
            let tier = GateTier::of(gate);
            assert!(tier.id_range().contains(&gate.value()));
        }
    }

    #[test]
    fn chapters_exist_only_for_primary() {
        assert_eq!(GateTier::chapter(GateId(1)), Some(1));
        assert_eq!(GateTier::chapter(GateId(33)), Some(33));
        assert_eq!(GateTier::chapter(GateId(34)), None);
        assert_eq!(GateTier::chapter(GateId(99)), None);
    }

    #[test]
    fn gate_names_follow_tier() {
        assert_eq!(gate_name(GateId(1)), "Gate 1 (Chapter 1)");
        assert_eq!(gate_name(GateId(50)), "Harmonic Gate 50");
        assert_eq!(gate_name(GateId(70)), "Spiral Gate 70");
    }
}
