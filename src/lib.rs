//! clubreg: club member registry
//!
//! Typed member records (person, soldier, student) edited through a
//! validate-then-commit protocol, looked up by primary or secondary key,
//! and persisted as a single YAML snapshot.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
