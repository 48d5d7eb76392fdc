//! Cross-crate properties of the Codex 144:99 lattice.
//!
//! Exercises the whole pipeline - store, mapper, interconnections,
//! audit, repair - over the seeded dataset.
