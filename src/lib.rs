// src/lib.rs
// 依存関係の推移的依存により複数のバージョンが混在するための抑制
// windows-sys: clap 系と env_logger 系で版が分かれる
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;

use docs_conf_infra::buildlog::ConsoleBuildLog;
use docs_conf_infra::environment;
use docs_conf_infra::vcs::GitTagDescriber;
use docs_conf_ports::vcs::TagQuery;
use docs_conf_usecase::{LoadConfigInput, LoadDocsConfig};

pub mod args;
pub mod config;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses the command line and performs one configuration load.
pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::try_from(args).context("building invocation settings")?;
    run_with_config(config)
}

pub fn run_with_config(config: Config) -> Result<()> {
    let describer = GitTagDescriber::new();
    let build_log = ConsoleBuildLog::new();
    let format = config.format;

    let input = LoadConfigInput {
        query: TagQuery { repo_dir: config.repo_dir },
        host: environment::read_build_host(),
        project: config.project,
        copyright: config.copyright,
        author: config.author,
        master_doc: config.master_doc,
        extensions: config.extensions,
        templates_path: config.templates_path,
        exclude_patterns: config.exclude_patterns,
        html_theme: config.html_theme,
        html_static_path: config.html_static_path,
        html_logo: config.html_logo,
    };

    log::debug!("resolving configuration in {}", input.query.repo_dir.display());

    let resolved = LoadDocsConfig::new(&describer, &build_log)
        .run(&input)
        .context("loading documentation configuration")?;

    presentation::print_config(&resolved, format)?;
    Ok(())
}
