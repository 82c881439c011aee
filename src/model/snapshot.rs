//! Snapshot of a learned structure.
//!
//! A search run's only persisted artifact is the returned DAG. A
//! [`StructureSnapshot`] pairs the structure with version metadata so a
//! restored snapshot can be checked for compatibility before downstream
//! parameter estimation consumes it.

use crate::model::Network;
use crate::search::errors::SearchError;

/// Metadata included in snapshots for compatibility checking.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotMetadata {
    /// Crate version string at snapshot time.
    pub version: String,
    /// Number of nodes the structure was learned over.
    pub num_nodes: usize,
}

/// A learned DAG with metadata.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructureSnapshot {
    /// The structure itself.
    pub structure: Network,
    /// Metadata for compatibility checking.
    pub metadata: SnapshotMetadata,
}

impl StructureSnapshot {
    /// Creates a snapshot of `structure` stamped with the current crate version.
    pub fn new(structure: Network) -> Self {
        let metadata = SnapshotMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            num_nodes: structure.num_nodes(),
        };
        Self { structure, metadata }
    }

    /// Validates that this snapshot can be consumed by the current crate.
    ///
    /// Checks the version stamp, that the recorded node count matches the
    /// structure, and that the structure satisfies its own invariants
    /// (acyclic, no self-loops, parent bound respected).
    pub fn validate_compatibility(&self) -> Result<(), SearchError> {
        let current_version = env!("CARGO_PKG_VERSION");
        if self.metadata.version != current_version {
            return Err(SearchError::Data(format!(
                "snapshot version mismatch: snapshot was created with version {}, current version is {}",
                self.metadata.version, current_version
            )));
        }
        if self.metadata.num_nodes != self.structure.num_nodes() {
            return Err(SearchError::Data(format!(
                "snapshot metadata records {} nodes, structure has {}",
                self.metadata.num_nodes,
                self.structure.num_nodes()
            )));
        }
        self.structure.validate()
    }
}
