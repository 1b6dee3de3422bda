// crates/ports/src/buildlog.rs
use docs_conf_shared_kernel::Result;

pub trait BuildLogSink: Send + Sync {
    fn on_marker(&self, marker: &str) -> Result<()>;
    fn on_release(&self, project: &str, release: &str) -> Result<()>;
}
