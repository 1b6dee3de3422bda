// crates/infra/src/vcs.rs
use std::process::Command;

use docs_conf_ports::vcs::{TagDescriber, TagQuery};
use docs_conf_shared_kernel::{InfrastructureError, Result};

const GIT_DESCRIBE_ARGS: [&str; 2] = ["describe", "--abbrev=0"];

/// Adapter implementing the `TagDescriber` port over the `git` binary.
#[derive(Debug, Default)]
pub struct GitTagDescriber;

impl GitTagDescriber {
    pub fn new() -> Self {
        Self
    }
}

impl TagDescriber for GitTagDescriber {
    fn describe(&self, query: &TagQuery) -> Result<String> {
        log::debug!("running `git describe --abbrev=0` in {}", query.repo_dir.display());

        let output = Command::new("git")
            .args(GIT_DESCRIBE_ARGS)
            .current_dir(&query.repo_dir)
            .output()
            .map_err(|source| InfrastructureError::ToolInvocation {
                tool: "git describe".to_string(),
                details: "failed to spawn process".to_string(),
                source: Some(source),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InfrastructureError::ToolInvocation {
                tool: "git describe".to_string(),
                details: format!("{}: {}", output.status, stderr.trim()),
                source: None,
            }
            .into());
        }

        let stdout = String::from_utf8(output.stdout).map_err(|err| {
            InfrastructureError::ToolInvocation {
                tool: "git describe".to_string(),
                details: format!("stdout was not valid UTF-8: {err}"),
                source: None,
            }
        })?;

        let described = stdout.trim();
        if described.is_empty() {
            return Err(InfrastructureError::ToolInvocation {
                tool: "git describe".to_string(),
                details: "produced no output".to_string(),
                source: None,
            }
            .into());
        }

        Ok(described.to_string())
    }
}

/// Reports whether a usable `git` binary is on the search path.
#[must_use]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
