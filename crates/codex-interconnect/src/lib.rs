//! Codex 144:99 Interconnections
//!
//! Read-time joins across the four id spaces surrounding the lattice:
//! nodes (1-144), gates (1-99), chapters (1-33, through primary gates),
//! and the 22 major arcana.
//!
//! Queries are defensive by design - they are called interactively by UI
//! collaborators, so a lookup of a nonexistent id returns `None` rather
//! than failing. Nothing here mutates mapper state; the resolver borrows
//! the maps and assembles views on demand.

mod arcana;
mod resolver;

pub use arcana::{card_for_node, card_name, nodes_for_card, ArcanumId, ARCANA_COUNT, MAJOR_ARCANA};
pub use resolver::{
    CardInterconnection, ChapterInterconnection, Interconnections, NodeInterconnection,
};
