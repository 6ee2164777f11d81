//! Snapshot store - whole-registry persistence as a single YAML file
//!
//! `load` never fails: a missing file is the expected first-run state and a
//! file that cannot be parsed falls back to an empty registry. Both cases
//! are reported through [`StoreStatus`] so the caller can tell the user.
//! `save` overwrites the previous snapshot via a sibling temp file and a
//! rename, which is atomic on most platforms but not fsynced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::member::Member;
use crate::core::registry::Registry;

/// Snapshot file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "club-members.yaml";

/// Newest snapshot layout this build understands
pub const SNAPSHOT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// On-disk layout
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved: Option<DateTime<Utc>>,

    #[serde(default)]
    members: Vec<Member>,
}

/// What `load` found at the store path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    /// Snapshot read; holds the member count
    Loaded(usize),
    /// No file yet; starting empty
    Absent,
    /// File present but unusable; starting empty
    Unreadable(String),
}

/// Registry restored by `load`, plus how it was obtained
#[derive(Debug)]
pub struct LoadOutcome {
    pub registry: Registry,
    pub status: StoreStatus,
}

/// A snapshot file at a fixed path
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, falling back to an empty registry
    pub fn load(&self) -> LoadOutcome {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no snapshot yet, starting empty");
                return LoadOutcome {
                    registry: Registry::new(),
                    status: StoreStatus::Absent,
                };
            }
            Err(e) => return Self::unreadable(&self.path, e.to_string()),
        };

        match Self::parse(&content) {
            Ok(registry) => {
                tracing::debug!(path = %self.path.display(), members = registry.len(), "snapshot loaded");
                LoadOutcome {
                    status: StoreStatus::Loaded(registry.len()),
                    registry,
                }
            }
            Err(e) => Self::unreadable(&self.path, e.to_string()),
        }
    }

    fn unreadable(path: &Path, reason: String) -> LoadOutcome {
        tracing::warn!(path = %path.display(), %reason, "snapshot unreadable, starting empty");
        LoadOutcome {
            registry: Registry::new(),
            status: StoreStatus::Unreadable(reason),
        }
    }

    /// Parse snapshot text into a registry; all or nothing
    pub fn parse(content: &str) -> Result<Registry, StoreError> {
        let snapshot: Snapshot = serde_yml::from_str(content)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(Registry::from_members(snapshot.members))
    }

    /// Render a registry as snapshot text
    pub fn render(registry: &Registry) -> Result<String, StoreError> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            saved: Some(Utc::now()),
            members: registry.list().to_vec(),
        };
        serde_yml::to_string(&snapshot).map_err(StoreError::Encode)
    }

    /// Write the whole registry, replacing any previous snapshot
    pub fn save(&self, registry: &Registry) -> Result<(), StoreError> {
        let result = self.write(registry);
        match &result {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), members = registry.len(), "snapshot saved")
            }
            Err(e) => tracing::error!(path = %self.path.display(), error = %e, "failed to save snapshot"),
        }
        result
    }

    fn write(&self, registry: &Registry) -> Result<(), StoreError> {
        let content = Self::render(registry)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, content).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

/// Errors raised while reading or writing a snapshot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("could not encode snapshot: {0}")]
    Encode(#[source] serde_yml::Error),

    #[error("could not write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
