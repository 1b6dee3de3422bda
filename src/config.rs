// src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use docs_conf_domain::config::GlobPattern;
use docs_conf_domain::options::{Extension, HtmlTheme};
use docs_conf_shared_kernel::{DocsConfError, DomainError};
use std::path::PathBuf;

/// Invocation settings derived from CLI arguments.
///
/// Defaults mirror the documented configuration: the full extension set and
/// a `_templates` search path apply when nothing is selected explicitly.
#[derive(Debug)]
pub struct Config {
    pub repo_dir: PathBuf,
    pub format: OutputFormat,
    pub project: String,
    pub copyright: String,
    pub author: String,
    pub master_doc: String,
    pub extensions: Vec<Extension>,
    pub templates_path: Vec<PathBuf>,
    pub exclude_patterns: Vec<GlobPattern>,
    pub html_theme: HtmlTheme,
    pub html_static_path: Vec<PathBuf>,
    pub html_logo: Option<PathBuf>,
}

impl TryFrom<Args> for Config {
    type Error = DocsConfError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let exclude_patterns = compile_patterns(&args.source.exclude)?;

        let extensions = if args.source.extensions.is_empty() {
            Extension::default_set()
        } else {
            args.source.extensions
        };

        let templates_path = if args.source.templates_path.is_empty() {
            vec![PathBuf::from("_templates")]
        } else {
            args.source.templates_path
        };

        Ok(Self {
            repo_dir: args.repo_dir.unwrap_or_else(|| PathBuf::from(".")),
            format: args.output.format,
            project: args.project.project,
            copyright: args.project.copyright,
            author: args.project.author,
            master_doc: args.project.master_doc,
            extensions,
            templates_path,
            exclude_patterns,
            html_theme: args.html.theme,
            html_static_path: args.html.static_path,
            html_logo: args.html.logo,
        })
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<GlobPattern>, DocsConfError> {
    patterns
        .iter()
        .map(|p| {
            GlobPattern::new(p).map_err(|e| {
                DomainError::InvalidPattern {
                    pattern: p.clone(),
                    details: e.to_string(),
                    source: Some(Box::new(e)),
                }
                .into()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config_from(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(argv).expect("arguments should parse");
        Config::try_from(args).expect("conversion should succeed")
    }

    #[test]
    fn defaults_match_the_documented_configuration() {
        let config = config_from(&["docs_conf"]);
        assert_eq!(config.repo_dir, PathBuf::from("."));
        assert_eq!(config.project, "Authentik-Manager");
        assert_eq!(config.copyright, "2023, George Onoufriou");
        assert_eq!(config.author, "George Onoufriou");
        assert_eq!(config.master_doc, "index");
        assert_eq!(config.extensions, Extension::default_set());
        assert_eq!(config.templates_path, vec![PathBuf::from("_templates")]);
        assert!(config.exclude_patterns.is_empty());
        assert_eq!(config.html_theme, HtmlTheme::PydataSphinxTheme);
        assert!(config.html_static_path.is_empty());
        assert!(config.html_logo.is_none());
    }

    #[test]
    fn explicit_extensions_replace_the_default_set() {
        let config = config_from(&["docs_conf", "--extension", "sphinx.ext.autodoc"]);
        assert_eq!(config.extensions, vec![Extension::Autodoc]);
    }

    #[test]
    fn comma_separated_extensions_are_split() {
        let config = config_from(&["docs_conf", "--extension", "sphinx_rtd_theme,sphinxarg.ext"]);
        assert_eq!(config.extensions, vec![Extension::RtdTheme, Extension::SphinxArg]);
    }

    #[test]
    fn hyphenated_theme_spelling_is_canonicalized() {
        let config = config_from(&["docs_conf", "--html-theme", "sphinx-rtd-theme"]);
        assert_eq!(config.html_theme, HtmlTheme::SphinxRtdTheme);
    }

    #[test]
    fn invalid_exclude_pattern_is_rejected() {
        let args =
            Args::try_parse_from(["docs_conf", "--exclude", "a["]).expect("arguments should parse");
        let err = Config::try_from(args).expect_err("pattern should be rejected");
        assert!(err.to_string().contains("Invalid pattern"));
    }

    #[test]
    fn exclude_patterns_keep_their_original_spelling() {
        let config = config_from(&["docs_conf", "--exclude", "_build/**,*.tmp"]);
        let spellings: Vec<_> = config.exclude_patterns.iter().map(GlobPattern::pattern).collect();
        assert_eq!(spellings, ["_build/**", "*.tmp"]);
    }
}
