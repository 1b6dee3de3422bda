pub mod aggregates;
pub mod value_objects;

pub use aggregates::DocsConfig;
pub use value_objects::GlobPattern;
