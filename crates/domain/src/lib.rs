#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod host;
pub mod options;
pub mod release;
