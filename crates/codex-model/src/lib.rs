//! Codex 144:99 Node Records
//!
//! The node store side of the lattice: the archetypal record type, its
//! elemental/chakric attribute enums, harmonic relation sets, and the
//! narrow store interface the mapping layer consumes.
//!
//! Records are immutable once sourced - the mapping layer only derives new
//! structures referencing them by id. The one mutation path in the
//! workspace, the repair actions in `codex-audit`, builds a *new* store
//! rather than editing one in place.

mod attributes;
mod node;
mod store;

pub mod seed;

pub use attributes::{Chakra, Element, DEFAULT_SOLFEGGIO, SOLFEGGIO_FREQUENCIES};
pub use node::{Harmonics, MissingField, Node};
pub use store::{MemoryStore, NodeStore};
