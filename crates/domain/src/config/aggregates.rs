pub mod docs_config;

pub use docs_config::DocsConfig;
