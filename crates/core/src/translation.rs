//! Transcription, traduction (code génétique standard) et cadres ouverts de lecture

use serde::{Deserialize, Serialize};

// Ordre des codons: AAA, AAC, AAG, AAT, ACA, ..., TTG, TTT
// (index = 16 * b1 + 4 * b2 + b3 avec A=0, C=1, G=2, T=3)

/// Code génétique standard (NCBI table 1)
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

pub const START_CODON: &[u8; 3] = b"ATG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Longueur minimale (nt, codon stop inclus) d'un ORF retenu
pub const MIN_ORF_LENGTH: usize = 90;
/// Nombre d'ORFs conservés, les plus longs d'abord
pub const MAX_ORFS: usize = 5;

const RNA_PREVIEW: usize = 500;
const PROTEIN_PREVIEW: usize = 200;
const ORF_PREVIEW: usize = 60;

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        [b1, b2, b3] => Some(16 * base_index(*b1)? + 4 * base_index(*b2)? + base_index(*b3)?),
        _ => None,
    }
}

/// Traduit un codon; `'*'` pour un stop, `'X'` pour un codon non reconnu
pub fn translate_codon(codon: &[u8]) -> u8 {
    codon_index(codon).map_or(b'X', |idx| STANDARD_CODE[idx])
}

pub fn is_stop(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == stop.as_slice())
}

/// ADN vers ARN (T → U)
pub fn transcribe(sequence: &str) -> String {
    sequence.chars().map(|c| if c == 'T' { 'U' } else { c }).collect()
}

/// Traduit toute la séquence, codons stop compris (`'*'`).
///
/// Un codon final incomplet est ignoré.
pub fn translate(sequence: &str) -> String {
    sequence
        .as_bytes()
        .chunks_exact(3)
        .map(|codon| translate_codon(codon) as char)
        .collect()
}

/// Cadre ouvert de lecture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orf {
    /// Position du codon start (0-based)
    pub start: usize,
    /// Fin du codon stop (exclusive)
    pub end: usize,
    pub length: usize,
    /// Cadre de lecture, 1 à 3
    pub frame: usize,
    /// Début de l'ORF suivi de `...`
    pub sequence: String,
}

/// Cherche les ORFs ATG…stop d'au moins [`MIN_ORF_LENGTH`] nucléotides sur
/// les trois cadres du brin direct et retourne les [`MAX_ORFS`] plus longs.
pub fn find_orfs(sequence: &str) -> Vec<Orf> {
    let bytes = sequence.as_bytes();
    let mut orfs = Vec::new();

    for frame in 0..3 {
        let mut i = frame;
        while i + 3 <= bytes.len() {
            if &bytes[i..i + 3] == START_CODON {
                if let Some(end) = find_stop(bytes, i + 3) {
                    let length = end - i;
                    if length >= MIN_ORF_LENGTH {
                        let preview_end = (i + ORF_PREVIEW).min(end);
                        orfs.push(Orf {
                            start: i,
                            end,
                            length,
                            frame: frame + 1,
                            sequence: format!("{}...", String::from_utf8_lossy(&bytes[i..preview_end])),
                        });
                    }
                }
            }
            i += 3;
        }
    }

    orfs.sort_by(|a, b| b.length.cmp(&a.length));
    orfs.truncate(MAX_ORFS);
    orfs
}

/// Fin (exclusive) du premier codon stop en phase à partir de `from`
fn find_stop(bytes: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while j + 3 <= bytes.len() {
        if is_stop(&bytes[j..j + 3]) {
            return Some(j + 3);
        }
        j += 3;
    }
    None
}

/// Résumé de traduction joint au rapport d'analyse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSummary {
    pub rna: String,
    pub protein: String,
    pub orfs: Vec<Orf>,
}

impl TranslationSummary {
    pub fn compute(sequence: &str) -> Self {
        let mut rna = transcribe(sequence);
        rna.truncate(RNA_PREVIEW);
        let mut protein = translate(sequence);
        protein.truncate(PROTEIN_PREVIEW);

        Self {
            rna,
            protein,
            orfs: find_orfs(sequence),
        }
    }
}
