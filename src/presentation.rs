// src/presentation.rs
use crate::options::OutputFormat;
use docs_conf_domain::config::DocsConfig;
use docs_conf_shared_kernel::Result;
use docs_conf_usecase::ResolvedConfigDto;
use std::path::PathBuf;

pub fn print_config(config: &DocsConfig, format: OutputFormat) -> Result<()> {
    let dto = ResolvedConfigDto::from(config);

    match format {
        OutputFormat::Json => print_json(&dto),
        OutputFormat::Yaml => print_yaml(&dto),
        OutputFormat::Table => {
            print_table(&dto);
            Ok(())
        }
    }
}

fn print_table(dto: &ResolvedConfigDto) {
    // Print version header
    println!("docs_conf v{} · theme={}", crate::VERSION, dto.html_theme);
    println!();

    // Print column header
    println!("    SETTING           VALUE");
    println!("----------------------------------------------");

    let rows = table_rows(dto);
    for (setting, value) in &rows {
        println!("    {setting:<18}{value}");
    }

    println!("---");

    // Print completion message
    println!();
    println!("[docs_conf] Completed: {} settings resolved.", rows.len());
}

fn table_rows(dto: &ResolvedConfigDto) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("project", dto.project.clone()),
        ("copyright", dto.copyright.clone()),
        ("author", dto.author.clone()),
        ("master_doc", dto.master_doc.clone()),
        ("release", dto.release.clone()),
        ("extensions", join_or_none(&dto.extensions)),
        ("templates_path", join_paths(&dto.templates_path)),
        ("exclude_patterns", join_or_none(&dto.exclude_patterns)),
        ("html_theme", dto.html_theme.clone()),
        ("html_static_path", join_paths(&dto.html_static_path)),
    ];

    if let Some(logo) = &dto.html_logo {
        rows.push(("html_logo", logo.display().to_string()));
    }

    rows
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(none)".to_string();
    }

    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_json(dto: &ResolvedConfigDto) -> Result<()> {
    let json = serde_json::to_string_pretty(dto)?;
    println!("{json}");
    Ok(())
}

fn print_yaml(dto: &ResolvedConfigDto) -> Result<()> {
    let yaml = serde_yaml::to_string(dto)?;
    println!("{yaml}");
    Ok(())
}
