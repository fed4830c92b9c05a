//! Sous-commandes de la CLI

pub mod analyze;
pub mod detect;
pub mod motifs;

use crate::create_spinner;
use anyhow::{Context, Result};
use dnaseq_core::{input, SequenceRecord};
use std::path::Path;

/// Lit un fichier déposé et en extrait les séquences
pub fn load_records(path: &Path) -> Result<Vec<SequenceRecord>> {
    let spinner = create_spinner("Lecture du fichier...");
    let text = input::read_upload(path).with_context(|| format!("Lecture de {}", path.display()))?;
    let records = input::parse_records(&text)?;
    spinner.finish_with_message(format!("{} séquence(s) lue(s)", records.len()));
    Ok(records)
}

/// Écrit la sortie dans un fichier ou sur la sortie standard
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Écriture de {}", path.display()))?;
            println!("✅ Résultat écrit dans {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
