//! Commande de recherche de motifs

use super::load_records;
use crate::display::visualizer::motif_table;
use anyhow::{Context, Result};
use console::style;
use dnaseq_core::{input, motifs};
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct KmerRow {
    #[tabled(rename = "k-mer")]
    kmer: String,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Nombre de k-mers affichés
const TOP_KMERS: usize = 20;

pub fn run(path: PathBuf, k: usize, min_occurrences: usize) -> Result<()> {
    let records = load_records(&path)?;
    let first = records.first().context("Aucune séquence dans le fichier")?;
    let sequence = input::clean_sequence(&first.sequence);

    println!("{}", style(format!("Motifs courants ({})", first.id)).bold());
    print!("{}", motif_table(&motifs::find_motifs(&sequence)));

    let kmers = motifs::frequent_kmers(&sequence, k, min_occurrences);
    println!("\n{}", style(format!("{}-mers vus au moins {} fois", k, min_occurrences)).bold());
    if kmers.is_empty() {
        println!("Aucun");
    } else {
        let rows: Vec<KmerRow> = kmers
            .into_iter()
            .take(TOP_KMERS)
            .map(|(kmer, count)| KmerRow { kmer, count })
            .collect();
        println!("{}", Table::new(rows));
    }

    Ok(())
}
