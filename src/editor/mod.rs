// src/editor/mod.rs
//! Section editors: pure add/update/remove operations over each slice
//! of the CV record. Every operation returns a new value; the caller
//! replaces the whole record so downstream consumers can treat it as
//! immutable. Edits are scoped by entity id (or index for the flat
//! skills lists) and never touch sibling entries.

pub mod education;
pub mod experience;
pub mod personal;
pub mod skills;
