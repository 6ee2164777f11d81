//! CLI command implementations

pub mod utils;

pub mod check;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod show;
