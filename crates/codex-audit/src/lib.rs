//! Codex 144:99 Audit
//!
//! Walks the complete derived lattice checking what the mapping layer
//! deliberately tolerates: absent records, incomplete records, unmapped
//! gates, and broken cross-references.
//!
//! # Two read-only phases
//!
//! - [`audit`] classifies every node id (complete / incomplete / missing)
//!   and every gate id (mapped / unmapped) and tallies edge counts.
//! - [`validate_connections`] checks the symmetric-reference invariant:
//!   a node listing a gate implies that gate lists the node back, and
//!   vice versa. Referential violations (ids pointing outside the lattice
//!   or at nothing) are errors; asymmetric-but-resolvable references are
//!   warnings.
//!
//! Neither phase mutates anything and neither fails - all findings are
//! data in the report.
//!
//! # Repair
//!
//! The repair operations are explicit and caller-invoked, and they build
//! a **new** store rather than editing in place - callers opt into
//! applying the result. [`generate_missing_nodes`] synthesizes
//! placeholder records for absent ids and never touches present ones;
//! [`complete_incomplete_nodes`] is the separately named path that fills
//! the missing descriptive fields of present records.

mod consistency;
mod repair;
mod report;

pub use consistency::{validate_connections, Asymmetry, ConsistencyReport, Inconsistency};
pub use repair::{
    complete_incomplete_nodes, generate_missing_nodes, placeholder_node, RepairOutcome,
};
pub use report::{audit, DatasetAudit, IncompleteNode};
