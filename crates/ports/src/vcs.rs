// crates/ports/src/vcs.rs
use std::path::PathBuf;

use docs_conf_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters for querying the nearest reachable tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagQuery {
    pub repo_dir: PathBuf,
}

/// Port for describing the current revision of a version-controlled tree.
pub trait TagDescriber: Send + Sync {
    /// Returns the raw describe output for the repository named in `query`.
    fn describe(&self, query: &TagQuery) -> Result<String>;
}
