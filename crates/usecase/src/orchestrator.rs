use docs_conf_domain::{config::DocsConfig, release::normalize_tag};
use docs_conf_ports::{
    buildlog::BuildLogSink,
    vcs::{TagDescriber, TagQuery},
};
use docs_conf_shared_kernel::{ApplicationError, ReleaseString, Result};

use crate::dto::LoadConfigInput;

/// Resolves the release identifier from the nearest reachable tag.
pub struct ResolveRelease<'a> {
    describer: &'a dyn TagDescriber,
}

impl<'a> ResolveRelease<'a> {
    pub fn new(describer: &'a dyn TagDescriber) -> Self {
        Self { describer }
    }

    pub fn run(&self, query: &TagQuery) -> Result<ReleaseString> {
        let described = self.describer.describe(query)?;
        let normalized = normalize_tag(described.trim());
        log::debug!("normalized tag '{}' to '{normalized}'", described.trim());
        Ok(ReleaseString::new(normalized)?)
    }
}

/// Loads the complete documentation configuration for one repository.
pub struct LoadDocsConfig<'a> {
    describer: &'a dyn TagDescriber,
    build_log: &'a dyn BuildLogSink,
}

impl<'a> LoadDocsConfig<'a> {
    pub fn new(describer: &'a dyn TagDescriber, build_log: &'a dyn BuildLogSink) -> Self {
        Self { describer, build_log }
    }

    /// Emits the host marker, resolves the release and assembles the
    /// validated configuration. Resolution failure aborts the load.
    pub fn run(&self, input: &LoadConfigInput) -> Result<DocsConfig> {
        self.build_log.on_marker(input.host.marker())?;

        let release =
            ResolveRelease::new(self.describer).run(&input.query).map_err(|e| {
                ApplicationError::ReleaseResolutionFailed {
                    reason: format!(
                        "tag description failed in '{}'",
                        input.query.repo_dir.display()
                    ),
                    source: Some(Box::new(e)),
                }
            })?;

        self.build_log.on_release(&input.project, release.as_str())?;

        let config = DocsConfig {
            project: input.project.clone(),
            copyright: input.copyright.clone(),
            author: input.author.clone(),
            master_doc: input.master_doc.clone(),
            release,
            extensions: input.extensions.clone(),
            templates_path: input.templates_path.clone(),
            exclude_patterns: input.exclude_patterns.clone(),
            html_theme: input.html_theme,
            html_static_path: input.html_static_path.clone(),
            html_logo: input.html_logo.clone(),
        };

        config.validate().map_err(|e| ApplicationError::ConfigAssemblyFailed {
            reason: e.to_string(),
            source: Some(Box::new(e.into())),
        })?;

        Ok(config)
    }
}
