//! Inventory domain module.
//!
//! This crate contains the spare-part master record and its business rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod part;

pub use part::{Category, Part, PartDraft};
