//! Lecture des fichiers de séquences déposés par l'utilisateur
//!
//! Formats reconnus: FASTA, FASTQ, TSV avec une colonne `sequence`, et texte
//! brut. Le format est deviné depuis la première ligne.

use crate::error::{Result, SequenceError};
use bio::io::{fasta, fastq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Extensions de fichiers acceptées
pub const ALLOWED_EXTENSIONS: [&str; 9] = ["fasta", "fa", "fna", "fastq", "fq", "txt", "seq", "ffn", "faa"];

/// Taille maximale d'un fichier déposé (16 Mo)
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Longueur minimale d'une séquence brute ou saisie directement
pub const MIN_SEQUENCE_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Fasta,
    Fastq,
    Tsv,
    Raw,
    Unknown,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Fasta => "fasta",
            InputFormat::Fastq => "fastq",
            InputFormat::Tsv => "tsv",
            InputFormat::Raw => "raw",
            InputFormat::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Séquence extraite d'un fichier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

/// Devine le format à partir de la première ligne
pub fn detect_format(text: &str) -> InputFormat {
    let first_line = text.lines().next().unwrap_or("").trim();

    if first_line.starts_with('>') {
        InputFormat::Fasta
    } else if first_line.starts_with('@') {
        InputFormat::Fastq
    } else if first_line.contains('\t') && first_line.to_lowercase().contains("sequence") {
        InputFormat::Tsv
    } else if !first_line.is_empty()
        && first_line
            .chars()
            .all(|c| c.is_whitespace() || matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C' | 'N'))
    {
        InputFormat::Raw
    } else {
        InputFormat::Unknown
    }
}

/// Met en majuscules et ne garde que A, T, G et C
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| matches!(c, 'A' | 'T' | 'G' | 'C'))
        .collect()
}

/// Extrait toutes les séquences d'un texte déposé
pub fn parse_records(text: &str) -> Result<Vec<SequenceRecord>> {
    let format = detect_format(text);
    debug!("Format détecté: {}", format);

    let records = match format {
        InputFormat::Fasta => parse_fasta(text)?,
        InputFormat::Fastq => parse_fastq(text)?,
        InputFormat::Tsv => parse_tsv(text),
        InputFormat::Raw | InputFormat::Unknown => parse_raw(text),
    };

    if records.is_empty() {
        return Err(SequenceError::NoSequences);
    }

    info!("{} séquence(s) lue(s) au format {}", records.len(), format);
    Ok(records)
}

fn header_description(id: &str, desc: Option<&str>) -> String {
    match desc {
        Some(desc) => format!("{} {}", id, desc),
        None => id.to_string(),
    }
}

fn parse_fasta(text: &str) -> Result<Vec<SequenceRecord>> {
    fasta::Reader::new(text.as_bytes())
        .records()
        .map(|record| -> Result<SequenceRecord> {
            let record = record?;
            Ok(SequenceRecord {
                id: record.id().to_string(),
                description: header_description(record.id(), record.desc()),
                sequence: String::from_utf8_lossy(record.seq()).into_owned(),
            })
        })
        .collect()
}

fn parse_fastq(text: &str) -> Result<Vec<SequenceRecord>> {
    fastq::Reader::new(text.as_bytes())
        .records()
        .map(|record| -> Result<SequenceRecord> {
            let record = record.map_err(|e| SequenceError::Parse(format!("FASTQ: {}", e)))?;
            Ok(SequenceRecord {
                id: record.id().to_string(),
                description: header_description(record.id(), record.desc()),
                sequence: String::from_utf8_lossy(record.seq()).into_owned(),
            })
        })
        .collect()
}

fn parse_tsv(text: &str) -> Vec<SequenceRecord> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let Some(seq_index) = header
        .split('\t')
        .position(|col| col.trim().eq_ignore_ascii_case("sequence"))
    else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for line in lines {
        let parts: Vec<&str> = line.split('\t').collect();
        let Some(column) = parts.get(seq_index) else {
            continue;
        };

        let sequence: String = column.trim().chars().filter(|&c| c != ' ').collect();
        if sequence.is_empty() {
            continue;
        }

        let class = parts.get(1).map(|c| c.trim()).unwrap_or("unknown");
        records.push(SequenceRecord {
            id: format!("Sequence_{}", records.len() + 1),
            description: format!("Sequence from TSV file, class: {}", class),
            sequence,
        });
    }

    records
}

fn parse_raw(text: &str) -> Vec<SequenceRecord> {
    let cleaned = clean_sequence(text);
    if cleaned.len() < MIN_SEQUENCE_LENGTH {
        return Vec::new();
    }

    vec![SequenceRecord {
        id: "Sequence_1".to_string(),
        description: "Raw DNA sequence".to_string(),
        sequence: cleaned,
    }]
}

/// Vérifie l'extension d'un fichier (insensible à la casse)
pub fn is_allowed_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.iter().any(|allowed| ext.eq_ignore_ascii_case(allowed)))
        .unwrap_or(false)
}

/// Lit un fichier déposé en contrôlant son extension et sa taille
pub fn read_upload(path: &Path) -> Result<String> {
    if !is_allowed_file(path) {
        return Err(SequenceError::UnsupportedFile(path.display().to_string()));
    }

    let size = std::fs::metadata(path)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(SequenceError::PayloadTooLarge {
            size,
            max: MAX_UPLOAD_BYTES,
        });
    }

    let bytes = std::fs::read(path)?;
    debug!("Fichier lu: {} ({} octets)", path.display(), bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Contrôle d'une séquence saisie directement: au moins
/// [`MIN_SEQUENCE_LENGTH`] caractères parmi A, T, G, C et N.
pub fn validate_submission(text: &str) -> Result<String> {
    let sequence = text.trim().to_ascii_uppercase();

    if sequence.chars().count() < MIN_SEQUENCE_LENGTH {
        return Err(SequenceError::SequenceTooShort {
            len: sequence.chars().count(),
            min: MIN_SEQUENCE_LENGTH,
        });
    }

    let mut invalid = crate::sequence::InvalidSymbols::default();
    for (i, c) in sequence.chars().enumerate() {
        if !matches!(c, 'A' | 'T' | 'G' | 'C' | 'N') {
            invalid.push(c, i + 1);
        }
    }
    if !invalid.is_empty() {
        return Err(invalid.into_error());
    }

    Ok(sequence)
}
