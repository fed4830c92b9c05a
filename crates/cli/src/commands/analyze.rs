//! Commande d'analyse

use super::{emit, load_records};
use crate::display::{stats, visualizer};
use crate::OutputFormat;
use anyhow::{bail, Result};
use dnaseq_core::{analyze_batch, input, SequenceAnalyzer, SequenceRecord, SequenceReport};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Source de la séquence à analyser
pub enum Source {
    File(PathBuf),
    Inline(String),
}

pub struct AnalyzeOptions {
    pub format: OutputFormat,
    pub report: bool,
    pub all: bool,
    pub output: Option<PathBuf>,
}

pub fn run(source: Source, analyzer: SequenceAnalyzer, options: AnalyzeOptions) -> Result<()> {
    let precision = analyzer.config().precision;

    let records = match source {
        Source::File(path) => {
            println!("🧬 Analyse de: {}", path.display());
            load_records(&path)?
        }
        Source::Inline(text) => {
            // Même contrôle que pour une saisie directe dans le formulaire
            let sequence = if options.report { input::validate_submission(&text)? } else { text };
            vec![SequenceRecord {
                id: "inline".to_string(),
                description: "Saisie directe".to_string(),
                sequence,
            }]
        }
    };

    let content = if options.all {
        if options.report {
            bail!("--report et --all ne peuvent pas être combinés");
        }
        let entries = analyze_batch(&analyzer, &records);
        match options.format {
            OutputFormat::Table => stats::batch_table(&entries, precision),
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|entry| match &entry.result {
                        Ok(result) => json!({ "id": entry.id, "analysis": result }),
                        Err(e) => json!({ "id": entry.id, "error": e.to_string() }),
                    })
                    .collect();
                format!("{}\n", serde_json::to_string_pretty(&values)?)
            }
        }
    } else if options.report {
        let report = SequenceReport::from_records(&records, &analyzer)?;
        info!("Rapport généré pour {} bases", report.sequence_info.length);
        match options.format {
            OutputFormat::Table => visualizer::report_text(&report, precision),
            OutputFormat::Json => format!("{}\n", report.to_json_pretty()?),
        }
    } else {
        let Some(first) = records.first() else {
            bail!("Aucune séquence à analyser");
        };
        let (result, skipped) = analyzer.analyze_detailed(&first.sequence)?;
        if !skipped.is_empty() {
            eprintln!("⚠️  {} symbole(s) ignoré(s) (mode permissif)", skipped.len());
        }
        match options.format {
            OutputFormat::Table => stats::analysis_tables(&result, precision),
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&result)?),
        }
    };

    emit(&content, options.output.as_deref())
}
