//! Configuration de la CLI

use dnaseq_core::{AnalyzerConfig, LogFormat};
use serde::Deserialize;
use std::path::Path;

/// Configuration du logging
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Configuration complète de l'application
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalyzerConfig,
    pub logging: LoggingConfig,
}

/// Préfixe des variables d'environnement (`DNASEQ_ANALYSIS__MODE=lenient`)
const ENV_PREFIX: &str = "DNASEQ";

impl AppConfig {
    /// Charge la configuration depuis un fichier TOML optionnel et l'environnement
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize::<AppConfig>()
    }
}
