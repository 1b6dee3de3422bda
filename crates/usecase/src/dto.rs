use std::path::PathBuf;

use docs_conf_domain::{
    config::{DocsConfig, GlobPattern},
    host::BuildHost,
    options::{Extension, HtmlTheme},
};
use docs_conf_ports::vcs::TagQuery;
use serde::Serialize;

/// Input assembled by the presentation layer for configuration loading.
#[derive(Debug, Clone)]
pub struct LoadConfigInput {
    pub query: TagQuery,
    pub host: BuildHost,
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

/// Serializable view of a resolved configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfigDto {
    pub project: String,
    pub copyright: String,
    pub author: String,
    pub master_doc: String,
    pub release: String,
    pub extensions: Vec<String>,
    pub templates_path: Vec<PathBuf>,
    pub exclude_patterns: Vec<String>,
    pub html_theme: String,
    pub html_static_path: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_logo: Option<PathBuf>,
}

impl From<&DocsConfig> for ResolvedConfigDto {
    fn from(config: &DocsConfig) -> Self {
        Self {
            project: config.project.clone(),
            copyright: config.copyright.clone(),
            author: config.author.clone(),
            master_doc: config.master_doc.clone(),
            release: config.release.as_str().to_string(),
            extensions: config.extensions.iter().map(|e| e.id().to_string()).collect(),
            templates_path: config.templates_path.clone(),
            exclude_patterns: config
                .exclude_patterns
                .iter()
                .map(|p| p.pattern().to_string())
                .collect(),
            html_theme: config.html_theme.id().to_string(),
            html_static_path: config.html_static_path.clone(),
            html_logo: config.html_logo.clone(),
        }
    }
}
