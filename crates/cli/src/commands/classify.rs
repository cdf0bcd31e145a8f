//! Classify command - one-shot tagging of text

use anyhow::{Context, Result};
use legl_fields_adapters::rules::FilesystemRuleTableRepo;
use legl_fields_domain::usecases::{ClassifyConfig, ClassifyUseCase};
use std::io::{self, Read};
use std::path::PathBuf;

use crate::args::ClassifyArgs;
use crate::config::{AppConfig, OutputFormat};

pub async fn execute(args: ClassifyArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    // Get text to classify
    let text = get_input_text(&args)?;

    if text.trim().is_empty() {
        anyhow::bail!("No text provided for classification");
    }

    let mut usecase = ClassifyUseCase::new(ClassifyConfig {
        tables: args.tables.clone(),
        skip_empty: false,
    });

    if let Some(rules_dir) = args.rules_dir.as_ref().or(config.rules.tables_dir.as_ref()) {
        let repo = FilesystemRuleTableRepo::new(rules_dir)
            .context("Failed to initialize rule table repository")?;
        usecase = usecase
            .with_repo(&repo)
            .await
            .context("Failed to load rule tables")?;
    }

    let results = usecase.classify(&text).context("Classification failed")?;

    // Output results
    if args.json || config.general.output == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&results).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        let width = results.iter().map(|r| r.table.len()).max().unwrap_or(0);
        for result in &results {
            let tags = if result.tags.is_empty() {
                "-"
            } else {
                result.tags.as_str()
            };
            println!("{:<width$}  {}", result.table, tags, width = width);
        }
    }

    Ok(())
}

fn get_input_text(args: &ClassifyArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    if let Some(ref path) = args.file {
        if path.as_os_str() != "-" {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()));
        }
    }

    // Default to stdin if no input specified
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read from stdin")?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args() -> ClassifyArgs {
        ClassifyArgs {
            text: None,
            file: None,
            tables: vec![],
            rules_dir: None,
            json: false,
        }
    }

    #[test]
    fn test_inline_text_wins() {
        let mut args = args();
        args.text = Some("the employer".to_string());
        assert_eq!(get_input_text(&args).unwrap(), "the employer");
    }

    #[test]
    fn test_reads_file_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("provision.txt");
        std::fs::write(&path, "The occupier shall").unwrap();

        let mut args = args();
        args.file = Some(path);
        assert_eq!(get_input_text(&args).unwrap(), "The occupier shall");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut args = args();
        args.file = Some(PathBuf::from("/nonexistent/provision.txt"));
        assert!(get_input_text(&args).is_err());
    }
}
