//! Affichage du rapport complet

use console::style;
use dnaseq_core::SequenceReport;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MotifRow {
    #[tabled(rename = "Motif")]
    motif: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Positions")]
    positions: String,
}

#[derive(Tabled)]
struct OrfRow {
    #[tabled(rename = "Frame")]
    frame: usize,
    #[tabled(rename = "Start")]
    start: usize,
    #[tabled(rename = "End")]
    end: usize,
    #[tabled(rename = "Length")]
    length: usize,
}

/// Motifs trouvés, sous forme de tableau
pub fn motif_table<'a>(motifs: impl IntoIterator<Item = (&'a String, &'a dnaseq_core::motifs::MotifHit)>) -> String {
    let rows: Vec<MotifRow> = motifs
        .into_iter()
        .map(|(motif, hit)| MotifRow {
            motif: motif.clone(),
            count: hit.count,
            positions: hit
                .positions
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    if rows.is_empty() {
        "Aucun motif trouvé\n".to_string()
    } else {
        format!("{}\n", Table::new(rows))
    }
}

/// Rapport complet, mis en forme pour le terminal
pub fn report_text(report: &SequenceReport, precision: u32) -> String {
    let mut out = String::new();

    if let Some(info) = &report.file_info {
        out.push_str(&format!(
            "{} {} ({} séquence(s) dans le fichier)\n{}\n\n",
            style("Séquence:").bold(),
            info.sequence_id,
            info.total_sequences,
            info.description
        ));
    }

    out.push_str(&format!(
        "Longueur: {} bases ({} caractères en entrée)\n",
        report.sequence_info.length, report.sequence_info.original_length
    ));
    match report.molecular_weight {
        Some(weight) => out.push_str(&format!("Masse moléculaire: {:.2} g/mol\n", weight)),
        None => out.push_str("Masse moléculaire: séquence trop longue\n"),
    }
    out.push_str(&format!("Profil: {}\n\n", style(&report.profile.summary).cyan()));

    out.push_str(&super::stats::analysis_tables(&report.analysis, precision));

    out.push_str(&format!("\n{}\n", style("Motifs courants").bold()));
    out.push_str(&motif_table(&report.motifs));

    out.push_str(&format!("\n{}\n", style("Traduction").bold()));
    out.push_str(&format!("Protéine: {}\n", report.translation.protein));
    if report.translation.orfs.is_empty() {
        out.push_str("Aucun ORF d'au moins 90 nt\n");
    } else {
        let rows: Vec<OrfRow> = report
            .translation
            .orfs
            .iter()
            .map(|orf| OrfRow {
                frame: orf.frame,
                start: orf.start,
                end: orf.end,
                length: orf.length,
            })
            .collect();
        out.push_str(&format!("{}\n", Table::new(rows)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnaseq_core::SequenceAnalyzer;

    #[test]
    fn test_report_text() {
        let report = SequenceReport::build("TATAATGCCGCG", &SequenceAnalyzer::default()).unwrap();
        let text = report_text(&report, 2);
        assert!(text.contains("Longueur: 12 bases"));
        assert!(text.contains("TATA"));
        assert!(text.contains("Aucun ORF"));
    }

    #[test]
    fn test_empty_motif_table() {
        let report = SequenceReport::build("GGGGGGGG", &SequenceAnalyzer::default()).unwrap();
        assert_eq!(motif_table(&report.motifs), "Aucun motif trouvé\n");
    }
}
