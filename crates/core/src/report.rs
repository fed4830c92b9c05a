//! Rapport d'analyse complet
//!
//! Le rapport reprend la forme JSON de [`AnalysisResult`] au premier niveau
//! (`composition`, `gc_content`, `statistics`) et y ajoute les informations
//! de séquence, les motifs, la traduction et le profil.

use crate::analyzer::{AnalysisResult, SequenceAnalyzer};
use crate::error::{Result, SequenceError};
use crate::input::{clean_sequence, parse_records, SequenceRecord};
use crate::motifs::{find_motifs, MotifHit};
use crate::statistics::{molecular_weight, SequenceProfile};
use crate::translation::TranslationSummary;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

const SEQUENCE_PREVIEW: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceInfo {
    /// Longueur après nettoyage
    pub length: usize,
    /// Longueur de l'entrée brute, en caractères
    pub original_length: usize,
    /// Début de la séquence nettoyée
    pub cleaned_sequence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub sequence_id: String,
    pub description: String,
    pub total_sequences: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    pub sequence_info: SequenceInfo,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub motifs: BTreeMap<String, MotifHit>,
    pub translation: TranslationSummary,
    /// `null` pour les séquences trop longues
    pub molecular_weight: Option<f64>,
    pub profile: SequenceProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
}

impl SequenceReport {
    /// Construit le rapport d'une séquence brute.
    ///
    /// Les symboles hors {A,T,G,C} sont retirés avant l'analyse; seule une
    /// entrée sans aucune base valide échoue.
    pub fn build(raw: &str, analyzer: &SequenceAnalyzer) -> Result<Self> {
        let cleaned = clean_sequence(raw);
        let analysis = analyzer.analyze(&cleaned)?;
        debug!("Rapport: {} bases retenues sur {}", cleaned.len(), raw.chars().count());

        let preview = if cleaned.len() > SEQUENCE_PREVIEW {
            format!("{}...", &cleaned[..SEQUENCE_PREVIEW])
        } else {
            cleaned.clone()
        };

        Ok(Self {
            sequence_info: SequenceInfo {
                length: cleaned.len(),
                original_length: raw.chars().count(),
                cleaned_sequence: preview,
            },
            profile: SequenceProfile::from_analysis(&analysis),
            analysis,
            motifs: find_motifs(&cleaned),
            translation: TranslationSummary::compute(&cleaned),
            molecular_weight: molecular_weight(&cleaned),
            file_info: None,
        })
    }

    /// Construit le rapport du premier enregistrement d'un fichier
    pub fn from_records(records: &[SequenceRecord], analyzer: &SequenceAnalyzer) -> Result<Self> {
        let first = records.first().ok_or(SequenceError::NoSequences)?;
        let report = Self::build(&first.sequence, analyzer)?;
        Ok(report.with_file_info(FileInfo {
            sequence_id: first.id.clone(),
            description: first.description.clone(),
            total_sequences: records.len(),
        }))
    }

    pub fn with_file_info(mut self, file_info: FileInfo) -> Self {
        self.file_info = Some(file_info);
        self
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Détection du format, lecture des enregistrements et rapport du premier
#[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn report_from_text(text: &str, analyzer: &SequenceAnalyzer) -> Result<SequenceReport> {
    let records = parse_records(text)?;
    SequenceReport::from_records(&records, analyzer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cleans_input() {
        let report = SequenceReport::build("atgNNcTATA", &SequenceAnalyzer::default()).unwrap();
        assert_eq!(report.sequence_info.length, 8);
        assert_eq!(report.sequence_info.original_length, 10);
        assert_eq!(report.sequence_info.cleaned_sequence, "ATGCTATA");
        assert_eq!(report.analysis.composition().a, 3);
        assert!(report.motifs.contains_key("TATA"));
        assert!(report.molecular_weight.is_some());
        assert!(report.file_info.is_none());
    }

    #[test]
    fn test_build_rejects_empty() {
        let err = SequenceReport::build("NNNN", &SequenceAnalyzer::default()).unwrap_err();
        assert!(matches!(err, SequenceError::EmptySequence));
    }

    #[test]
    fn test_preview_is_truncated() {
        let report = SequenceReport::build(&"A".repeat(150), &SequenceAnalyzer::default()).unwrap();
        assert_eq!(report.sequence_info.cleaned_sequence.len(), 103);
        assert!(report.sequence_info.cleaned_sequence.ends_with("..."));
    }

    #[test]
    fn test_json_keeps_chart_fields_at_top_level() {
        let report = SequenceReport::build("ATGCATGCAT", &SequenceAnalyzer::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["composition"]["A"], 3);
        assert_eq!(value["gc_content"], 40.0);
        assert_eq!(value["statistics"]["at_content"], 60.0);
        assert_eq!(value["statistics"]["purine_content"], 50.0);
        assert!(value.get("sequence_info").is_some());
        assert!(value.get("file_info").is_none());
    }

    #[test]
    fn test_report_from_fasta_text() {
        let text = ">seq1 demo\nATGCATGCAT\n>seq2\nGGGGCCCCAA\n";
        let report = report_from_text(text, &SequenceAnalyzer::default()).unwrap();
        let info = report.file_info.unwrap();
        assert_eq!(info.sequence_id, "seq1");
        assert_eq!(info.description, "seq1 demo");
        assert_eq!(info.total_sequences, 2);
        assert_eq!(report.sequence_info.length, 10);
    }
}
