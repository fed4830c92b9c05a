//! Commande de détection de format

use anyhow::Result;
use dnaseq_core::input;
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Description")]
    description: String,
}

pub fn run(path: PathBuf) -> Result<()> {
    let text = input::read_upload(&path)?;
    println!("Format détecté: {}", input::detect_format(&text));

    let records = input::parse_records(&text)?;
    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            id: r.id.clone(),
            length: r.sequence.len(),
            description: r.description.chars().take(60).collect(),
        })
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
