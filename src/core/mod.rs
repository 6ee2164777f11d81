//! Core module - member records, edit protocol, registry and persistence

pub mod config;
pub mod entity;
pub mod member;
pub mod registry;
pub mod rules;
pub mod session;
pub mod store;

pub use config::Config;
pub use entity::{Entity, EntityKind, Field};
pub use member::{CommitError, EntityError, Member};
pub use registry::{Registry, RegistryError};
pub use rules::Validation;
pub use session::{EditSession, SessionError, SessionState};
pub use store::{LoadOutcome, SnapshotStore, StoreError, StoreStatus};
