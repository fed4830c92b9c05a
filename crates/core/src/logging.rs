//! Système de logging pour dnaseq

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Format de sortie des logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Normalise un niveau de log, `info` par défaut
pub fn level_filter(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// Initialise le système de logging.
///
/// `RUST_LOG` prime sur le niveau passé en argument.
pub fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_filter(level)));

    match format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Compact => {
            fmt()
                .compact()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Macro pour le logging des opérations longues
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = $crate::__tracing::span!($crate::__tracing::Level::INFO, $name);
        let _enter = span.enter();
        $crate::__tracing::debug!("Début de l'opération: {}", $name);
        let result = $block;
        $crate::__tracing::debug!("Fin de l'opération: {}", $name);
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("DEBUG"), "debug");
        assert_eq!(level_filter("verbose"), "info");
    }
}
