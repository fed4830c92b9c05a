//! Affichage des statistiques de composition

use console::style;
use dnaseq_core::{AnalysisResult, BatchEntry, BatchSummary, Nucleotide};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CompositionRow {
    #[tabled(rename = "Base")]
    base: char,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "%")]
    percent: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Statistique")]
    name: &'static str,
    #[tabled(rename = "%")]
    value: String,
}

/// Tableaux de composition et de statistiques d'une analyse
pub fn analysis_tables(result: &AnalysisResult, precision: u32) -> String {
    let order = [Nucleotide::A, Nucleotide::T, Nucleotide::G, Nucleotide::C];
    let composition: Vec<CompositionRow> = order
        .iter()
        .map(|&base| CompositionRow {
            base: base.as_char(),
            count: result.composition().get(base),
            percent: format!("{:.*}", precision as usize, result.base_percentage(base, precision)),
        })
        .collect();

    let p = precision as usize;
    let stats = vec![
        StatRow { name: "GC", value: format!("{:.*}", p, result.gc_content()) },
        StatRow { name: "AT", value: format!("{:.*}", p, result.at_content()) },
        StatRow { name: "Purines (A+G)", value: format!("{:.*}", p, result.purine_content()) },
        StatRow { name: "Pyrimidines (T+C)", value: format!("{:.*}", p, result.pyrimidine_content()) },
    ];

    format!(
        "{}\n{}\n\n{}\n{}\n",
        style(format!("Composition ({} bases)", result.length())).bold(),
        Table::new(composition),
        style("Statistiques").bold(),
        Table::new(stats)
    )
}

#[derive(Tabled)]
struct BatchRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Length")]
    length: String,
    #[tabled(rename = "GC%")]
    gc_percent: String,
    #[tabled(rename = "Purines%")]
    purine_percent: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Tableau d'un lot d'analyses suivi du bilan global
pub fn batch_table(entries: &[BatchEntry], precision: u32) -> String {
    let precision = precision as usize;
    let rows: Vec<BatchRow> = entries
        .iter()
        .map(|entry| match &entry.result {
            Ok(result) => BatchRow {
                id: entry.id.clone(),
                length: result.length().to_string(),
                gc_percent: format!("{:.*}", precision, result.gc_content()),
                purine_percent: format!("{:.*}", precision, result.purine_content()),
                status: "ok".to_string(),
            },
            Err(e) => BatchRow {
                id: entry.id.clone(),
                length: "-".to_string(),
                gc_percent: "-".to_string(),
                purine_percent: "-".to_string(),
                status: e.to_string(),
            },
        })
        .collect();

    let summary = BatchSummary::from_entries(entries);
    let gc = summary
        .gc_content()
        .map(|gc| format!("{:.*}%", precision, gc))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{}\n\n{} analysée(s), {} rejetée(s), {} bases, GC global {}\n",
        Table::new(rows),
        summary.analyzed,
        summary.failed,
        summary.composition.total(),
        gc
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnaseq_core::{analyze, analyze_batch, AnalyzerConfig, SequenceAnalyzer, SequenceRecord};

    #[test]
    fn test_analysis_tables() {
        let output = analysis_tables(&analyze("GGGGCCCC").unwrap(), 2);
        assert!(output.contains("100.00"));
        assert!(output.contains("Pyrimidines (T+C)"));
        assert!(output.contains("8 bases"));
    }

    #[test]
    fn test_batch_table() {
        let records = vec![
            SequenceRecord { id: "ok".into(), description: String::new(), sequence: "ACGT".into() },
            SequenceRecord { id: "bad".into(), description: String::new(), sequence: "".into() },
        ];
        let entries = analyze_batch(&SequenceAnalyzer::default(), &records);
        let output = batch_table(&entries, 2);
        assert!(output.contains("1 analysée(s), 1 rejetée(s), 4 bases, GC global 50.00%"));
    }

    #[test]
    fn test_batch_table_precision() {
        let records = vec![SequenceRecord { id: "r1".into(), description: String::new(), sequence: "GGGACT".into() }];
        let analyzer = SequenceAnalyzer::new(AnalyzerConfig::builder().precision(3).build());
        let entries = analyze_batch(&analyzer, &records);

        let output = batch_table(&entries, 3);
        assert!(output.contains("66.667"));
        assert!(output.contains("GC global 66.667%"));

        let output = batch_table(&entries, 0);
        assert!(output.contains("GC global 67%"));
        assert!(!output.contains("66.67"));
    }
}
