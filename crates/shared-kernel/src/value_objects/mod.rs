// crates/shared-kernel/src/value_objects/mod.rs
pub mod release;

pub use release::ReleaseString;
