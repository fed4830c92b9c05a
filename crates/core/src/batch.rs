//! Analyse parallèle de plusieurs séquences

use crate::analyzer::{AnalysisResult, CompositionCounts, SequenceAnalyzer};
use crate::error::Result;
use crate::input::SequenceRecord;
use crate::log_operation;
use rayon::prelude::*;
use tracing::warn;

/// Résultat d'analyse d'un enregistrement
#[derive(Debug)]
pub struct BatchEntry {
    pub id: String,
    pub result: Result<AnalysisResult>,
}

/// Analyse chaque enregistrement indépendamment, dans l'ordre d'entrée
pub fn analyze_batch(analyzer: &SequenceAnalyzer, records: &[SequenceRecord]) -> Vec<BatchEntry> {
    log_operation!("analyze_batch", {
        records
            .par_iter()
            .map(|record| {
                let result = analyzer.analyze(&record.sequence);
                if let Err(e) = &result {
                    warn!("Séquence {} rejetée: {}", record.id, e);
                }
                BatchEntry {
                    id: record.id.clone(),
                    result,
                }
            })
            .collect()
    })
}

/// Bilan agrégé d'un lot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchSummary {
    pub analyzed: usize,
    pub failed: usize,
    /// Somme des compositions des séquences analysées
    pub composition: CompositionCounts,
}

impl BatchSummary {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            match &entry.result {
                Ok(result) => {
                    let counts = result.composition();
                    summary.analyzed += 1;
                    summary.composition.a += counts.a;
                    summary.composition.t += counts.t;
                    summary.composition.g += counts.g;
                    summary.composition.c += counts.c;
                }
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    /// Taux de GC global, `None` si rien n'a été analysé
    pub fn gc_content(&self) -> Option<f64> {
        let total = self.composition.total();
        (total > 0).then(|| self.composition.gc() as f64 / total as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, sequence: &str) -> SequenceRecord {
        SequenceRecord {
            id: id.to_string(),
            description: String::new(),
            sequence: sequence.to_string(),
        }
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_errors() {
        let records = vec![record("a", "ATGC"), record("b", "ATGX"), record("c", "GGCC")];
        let entries = analyze_batch(&SequenceAnalyzer::default(), &records);

        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(entries[0].result.is_ok());
        assert!(entries[1].result.is_err());
        assert_eq!(entries[2].result.as_ref().unwrap().gc_content(), 100.0);
    }

    #[test]
    fn test_batch_summary() {
        let records = vec![record("a", "ATGC"), record("b", ""), record("c", "GGCC")];
        let entries = analyze_batch(&SequenceAnalyzer::default(), &records);
        let summary = BatchSummary::from_entries(&entries);

        assert_eq!(summary.analyzed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.composition.total(), 8);
        assert_eq!(summary.gc_content(), Some(75.0));
    }

    #[test]
    fn test_empty_batch() {
        let entries = analyze_batch(&SequenceAnalyzer::default(), &[]);
        assert!(entries.is_empty());
        assert_eq!(BatchSummary::from_entries(&entries).gc_content(), None);
    }
}
