// crates/infra/src/buildlog.rs
use docs_conf_ports::buildlog::BuildLogSink;
use docs_conf_shared_kernel::Result;

/// Build log sink writing marker and release lines to stderr.
///
/// Stderr keeps the build log separate from the rendered configuration on
/// stdout.
#[derive(Debug, Default)]
pub struct ConsoleBuildLog;

impl ConsoleBuildLog {
    pub fn new() -> Self {
        Self
    }
}

impl BuildLogSink for ConsoleBuildLog {
    fn on_marker(&self, marker: &str) -> Result<()> {
        eprintln!("{marker}");
        Ok(())
    }

    fn on_release(&self, project: &str, release: &str) -> Result<()> {
        eprintln!("{project} version: {release}");
        Ok(())
    }
}
