// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod buildlog;
pub mod environment;
pub mod vcs;
