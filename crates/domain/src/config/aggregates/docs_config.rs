use std::path::{Path, PathBuf};

use docs_conf_shared_kernel::{DomainError, DomainResult, ReleaseString};

use crate::{
    config::GlobPattern,
    options::{Extension, HtmlTheme},
};

/// Domain representation of a resolved documentation configuration.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    pub project: String,
    pub copyright: String,
    pub author: String,
    pub master_doc: String,
    pub release: ReleaseString,
    pub extensions: Vec<Extension>,
    pub templates_path: Vec<PathBuf>,
    pub exclude_patterns: Vec<GlobPattern>,
    pub html_theme: HtmlTheme,
    pub html_static_path: Vec<PathBuf>,
    pub html_logo: Option<PathBuf>,
}

impl DocsConfig {
    /// Checks the invariants a renderable configuration must hold.
    pub fn validate(&self) -> DomainResult<()> {
        if self.project.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "project must not be empty".to_string(),
            });
        }

        if self.master_doc.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "master_doc must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Determine whether a source file at `path` is excluded from the build.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.iter().any(|pattern| pattern.matches_path(path))
    }
}
