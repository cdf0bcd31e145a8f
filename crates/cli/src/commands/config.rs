//! Config command - write and summarize legl-fields.toml

use anyhow::{Context, Result};
use legl_fields_domain::{BlankFields, DeriverKind, policy::OnUnrecognized};
use std::fs;
use std::path::{Path, PathBuf};

use crate::args::{ConfigArgs, ConfigCommands};
use crate::config::AppConfig;

pub async fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init { path, force } => init_config(path, force).await,
    }
}

async fn init_config(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(&path, AppConfig::example_toml())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    let config = AppConfig::load(Some(&path)).context("Failed to read back config file")?;

    println!("Created config file: {}", path.display());
    println!();
    for line in summary(&config, &path) {
        println!("{}", line);
    }

    Ok(())
}

/// What a derive run with this file would do
fn summary(config: &AppConfig, path: &Path) -> Vec<String> {
    let derivers = if config.derive.derivers.len() == DeriverKind::ALL.len() {
        format!("all {} built-in derivers", DeriverKind::ALL.len())
    } else {
        config.derive.derivers.join(", ")
    };

    let max_chars = match config.derive.max_value_chars() {
        Some(max) => format!("{} chars", max),
        None => "unlimited".to_string(),
    };

    let tables = match &config.rules.tables_dir {
        Some(dir) => format!("custom tables from {}", dir.display()),
        None => "built-in tables only (set [rules] tables_dir to add your own)".to_string(),
    };

    let on_unrecognized = match config.derive.on_unrecognized {
        OnUnrecognized::Empty => "emit empty values",
        OnUnrecognized::Reject => "fail the run",
    };

    let blank_fields = match config.keys.blank_fields {
        BlankFields::Skip => "skipped",
        BlankFields::Positional => "kept as empty slots",
    };

    vec![
        format!("Derivers:        {}", derivers),
        format!("Unknown _url:    {}", on_unrecognized),
        format!("Value limit:     {}", max_chars),
        format!("UK key blanks:   {}", blank_fields),
        format!("Rule tables:     {}", tables),
        String::new(),
        format!(
            "Run 'legl-fields --config {} derive --records <export.json>'",
            path.display()
        ),
    ]
}
