//! Derive command - run derivers over exported records

use anyhow::{Context, Result};
use legl_fields_adapters::{
    records::{FsRecordSource, InMemoryRecordSource},
    rules::FilesystemRuleTableRepo,
    sink::{DiscardSink, JsonlSink},
};
use legl_fields_domain::policy::{OnUnrecognized, PolicyConfig};
use legl_fields_domain::usecases::{DeriveConfig, DeriveUseCase};
use legl_fields_domain::{DerivedField, KeyPolicy, RecordSource, RuleTableRepo};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::args::DeriveArgs;
use crate::config::{AppConfig, OutputFormat};

pub async fn execute(args: DeriveArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    let derive_config = derive_config_from(&args, &config)?;

    let records_path = args
        .records
        .clone()
        .or_else(|| config.general.records_path.clone())
        .context("No records file given: pass --records or set general.records_path")?;

    let source = open_records(&records_path)?;

    let mut usecase = DeriveUseCase::new(derive_config);
    if let Some(rules_dir) = args.rules_dir.as_ref().or(config.rules.tables_dir.as_ref()) {
        let repo = FilesystemRuleTableRepo::new(rules_dir)
            .context("Failed to initialize rule table repository")?;
        let tables = repo.load().await.context("Failed to load rule tables")?;
        usecase = usecase.with_tables(tables);
    }

    let (rows, summary) = match &args.out {
        Some(out) => {
            let sink = JsonlSink::new(out.clone())
                .await
                .with_context(|| format!("Failed to open output file: {}", out.display()))?;
            usecase.run(source.as_ref(), &sink).await
        }
        None => usecase.run(source.as_ref(), &DiscardSink).await,
    }
    .context("Derivation failed")?;

    if args.json || config.general.output == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        print_rows(&rows);
    }

    if let Some(out) = &args.out {
        tracing::info!(
            path = %out.display(),
            records = summary.records,
            rows = rows.len(),
            "Wrote derived values"
        );
    }

    Ok(())
}

fn open_records(path: &Path) -> Result<Box<dyn RecordSource>> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read records from stdin")?;
        let source = InMemoryRecordSource::from_stdin_text(&content)
            .context("Failed to parse records from stdin")?;
        return Ok(Box::new(source));
    }

    let source = FsRecordSource::new(path)
        .with_context(|| format!("Failed to open records: {}", path.display()))?;
    Ok(Box::new(source))
}

fn derive_config_from(args: &DeriveArgs, config: &AppConfig) -> Result<DeriveConfig> {
    let names = if args.derivers.is_empty() {
        &config.derive.derivers
    } else {
        &args.derivers
    };

    let on_unrecognized = if args.reject_unrecognized {
        OnUnrecognized::Reject
    } else {
        config.derive.on_unrecognized
    };

    let blank_fields = args
        .blank_fields
        .map(Into::into)
        .unwrap_or(config.keys.blank_fields);

    let derive_config = DeriveConfig {
        key_policy: KeyPolicy { blank_fields },
        policy: PolicyConfig {
            on_unrecognized,
            max_value_chars: config.derive.max_value_chars(),
        },
        ..Default::default()
    }
    .with_deriver_names(names)?;

    Ok(derive_config)
}

fn print_rows(rows: &[DerivedField]) {
    for row in rows {
        println!("{}\t{}\t{}", row.record_id, row.field, row.value);
    }
}
