//! dnaseq Core Library
//!
//! Analyse de composition de séquences ADN: comptage des bases, taux de GC,
//! statistiques dérivées, et rapport complet (motifs, traduction, ORFs).

pub mod analyzer;
pub mod batch;
pub mod error;
pub mod input;
pub mod logging;
pub mod motifs;
pub mod report;
pub mod sequence;
pub mod statistics;
pub mod translation;

// Réexportations principales
pub use analyzer::{
    analyze, AnalysisResult, AnalyzerConfig, AnalyzerConfigBuilder, CompositionCounts, SequenceAnalyzer, Statistics,
    ValidationMode,
};
pub use batch::{analyze_batch, BatchEntry, BatchSummary};
pub use error::{Result, SequenceError};
pub use input::{detect_format, parse_records, read_upload, InputFormat, SequenceRecord};
pub use logging::{init_logging, LogFormat};
pub use report::{report_from_text, SequenceReport};
pub use sequence::{DnaSequence, InvalidSymbol, Nucleotide};
// La macro log_operation est automatiquement exportée à la racine du crate

#[doc(hidden)]
pub use tracing as __tracing;
