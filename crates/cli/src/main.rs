//! CLI pour l'analyse de séquences ADN

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod config;
mod display;

use commands::{analyze, detect, motifs};
use config::AppConfig;
use dnaseq_core::{init_logging, AnalyzerConfig, SequenceAnalyzer, ValidationMode};

#[derive(Parser)]
#[command(name = "dnaseq")]
#[command(about = "Analyse de composition de séquences ADN", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fichier de configuration TOML
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse la composition d'une séquence
    Analyze {
        /// Fichier d'entrée (FASTA, FASTQ, TSV ou texte brut)
        #[arg(short, long, conflicts_with = "sequence", required_unless_present = "sequence")]
        input: Option<PathBuf>,

        /// Séquence saisie directement
        #[arg(short, long)]
        sequence: Option<String>,

        /// Ignorer les symboles hors {A,T,G,C} au lieu de rejeter la séquence
        #[arg(short, long)]
        lenient: bool,

        /// Nombre de décimales des pourcentages
        #[arg(short, long)]
        precision: Option<u32>,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Rapport complet (motifs, traduction, profil) de la première séquence
        #[arg(short, long)]
        report: bool,

        /// Analyser toutes les séquences du fichier
        #[arg(short, long)]
        all: bool,

        /// Exporter en fichier
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Détecte le format d'un fichier et liste ses séquences
    Detect {
        /// Fichier de séquences
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Recherche les motifs courants et les k-mers fréquents
    Motifs {
        /// Fichier de séquences
        #[arg(short, long)]
        input: PathBuf,

        /// Longueur des k-mers
        #[arg(short, default_value = "6")]
        k: usize,

        /// Nombre minimal d'occurrences
        #[arg(short, long, default_value = "2")]
        min: usize,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = AppConfig::load(cli.config.as_deref())?;
    let level = match cli.verbose {
        0 => app_config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    init_logging(level, app_config.logging.format);

    match cli.command {
        Commands::Analyze {
            input,
            sequence,
            lenient,
            precision,
            format,
            report,
            all,
            output,
        } => {
            let analyzer = build_analyzer(app_config.analysis, lenient, precision);
            let source = match (input, sequence) {
                (Some(path), _) => analyze::Source::File(path),
                (None, Some(text)) => analyze::Source::Inline(text),
                (None, None) => anyhow::bail!("--input ou --sequence est requis"),
            };
            analyze::run(
                source,
                analyzer,
                analyze::AnalyzeOptions {
                    format,
                    report,
                    all,
                    output,
                },
            )?;
        }
        Commands::Detect { input } => {
            detect::run(input)?;
        }
        Commands::Motifs { input, k, min } => {
            motifs::run(input, k, min)?;
        }
    }

    Ok(())
}

/// Applique les options de la ligne de commande sur la configuration chargée
fn build_analyzer(base: AnalyzerConfig, lenient: bool, precision: Option<u32>) -> SequenceAnalyzer {
    let mut builder = AnalyzerConfig::builder()
        .mode(base.mode)
        .precision(precision.unwrap_or(base.precision));
    if lenient {
        builder = builder.mode(ValidationMode::Lenient);
    }
    SequenceAnalyzer::new(builder.build())
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lenient_flag_overrides_config() {
        let analyzer = build_analyzer(AnalyzerConfig::default(), true, Some(4));
        assert_eq!(analyzer.config().mode, ValidationMode::Lenient);
        assert_eq!(analyzer.config().precision, 4);
    }

    #[test]
    fn test_config_mode_kept_without_flag() {
        let base = AnalyzerConfig::builder().mode(ValidationMode::Lenient).precision(1).build();
        let analyzer = build_analyzer(base, false, None);
        assert_eq!(analyzer.config().mode, ValidationMode::Lenient);
        assert_eq!(analyzer.config().precision, 1);
    }

    #[test]
    fn test_parse_analyze_inline() {
        let cli = Cli::try_parse_from(["dnaseq", "analyze", "--sequence", "ACGT", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze { sequence: Some(_), .. }));
    }

    #[test]
    fn test_analyze_requires_a_source() {
        assert!(Cli::try_parse_from(["dnaseq", "analyze"]).is_err());
    }
}
