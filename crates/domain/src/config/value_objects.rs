pub mod glob_pattern;

pub use glob_pattern::GlobPattern;
