use std::str::FromStr;

use docs_conf_shared_kernel::{DomainError, DomainResult};

/// Sphinx extensions the generated configuration may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    RtdTheme,
    SphinxArg,
    Autodoc,
}

impl Extension {
    /// Identifier as it appears in the rendered configuration.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::RtdTheme => "sphinx_rtd_theme",
            Self::SphinxArg => "sphinxarg.ext",
            Self::Autodoc => "sphinx.ext.autodoc",
        }
    }

    /// Extensions enabled when none are selected explicitly.
    #[must_use]
    pub fn default_set() -> Vec<Self> {
        vec![Self::RtdTheme, Self::SphinxArg, Self::Autodoc]
    }

    pub fn parse(name: &str) -> DomainResult<Self> {
        match name.trim() {
            "sphinx_rtd_theme" => Ok(Self::RtdTheme),
            "sphinxarg.ext" => Ok(Self::SphinxArg),
            "sphinx.ext.autodoc" => Ok(Self::Autodoc),
            other => Err(DomainError::UnknownExtension { name: other.to_string() }),
        }
    }
}

impl FromStr for Extension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(|e| e.to_string())
    }
}

/// HTML themes the configuration knows how to reference.
///
/// Theme identifiers use underscores; hyphenated spellings are accepted and
/// canonicalized during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlTheme {
    #[default]
    PydataSphinxTheme,
    SphinxRtdTheme,
    Alabaster,
}

impl HtmlTheme {
    /// Identifier as it appears in the rendered configuration.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::PydataSphinxTheme => "pydata_sphinx_theme",
            Self::SphinxRtdTheme => "sphinx_rtd_theme",
            Self::Alabaster => "alabaster",
        }
    }
}

impl FromStr for HtmlTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").as_str() {
            "pydata_sphinx_theme" => Ok(Self::PydataSphinxTheme),
            "sphinx_rtd_theme" => Ok(Self::SphinxRtdTheme),
            "alabaster" => Ok(Self::Alabaster),
            other => Err(format!("Unknown HTML theme: {other}")),
        }
    }
}
