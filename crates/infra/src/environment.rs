// crates/infra/src/environment.rs
use docs_conf_domain::host::BuildHost;

/// Environment variable set by the hosted documentation builder.
pub const READTHEDOCS_ENV: &str = "READTHEDOCS";

/// Detects the build host from the process environment.
#[must_use]
pub fn read_build_host() -> BuildHost {
    BuildHost::from_env_value(std::env::var(READTHEDOCS_ENV).ok().as_deref())
}
