//! Recherche de motifs courants et de k-mers fréquents

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Motifs recherchés par défaut (boîtes TATA/CAAT, îlots CpG...)
pub const COMMON_MOTIFS: [&str; 6] = ["TATA", "CAAT", "GCCGCC", "ATGC", "CGCG", "ATAT"];

/// Nombre maximal de positions conservées par motif
pub const MAX_MOTIF_POSITIONS: usize = 10;

/// Occurrences d'un motif dans une séquence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifHit {
    pub count: usize,
    /// Premières positions (0-based)
    pub positions: Vec<usize>,
}

/// Cherche les [`COMMON_MOTIFS`] dans une séquence normalisée
pub fn find_motifs(sequence: &str) -> BTreeMap<String, MotifHit> {
    find_motifs_in(sequence, &COMMON_MOTIFS)
}

/// Cherche des motifs arbitraires, occurrences chevauchantes comprises.
///
/// Les motifs absents ne figurent pas dans le résultat.
pub fn find_motifs_in(sequence: &str, motifs: &[&str]) -> BTreeMap<String, MotifHit> {
    let mut found = BTreeMap::new();

    for motif in motifs.iter().filter(|m| !m.is_empty()) {
        let mut positions = Vec::new();
        let mut count = 0;
        let mut start = 0;

        while let Some(offset) = sequence.get(start..).and_then(|rest| rest.find(motif)) {
            let pos = start + offset;
            if positions.len() < MAX_MOTIF_POSITIONS {
                positions.push(pos);
            }
            count += 1;
            start = pos + 1;
        }

        if count > 0 {
            found.insert(motif.to_string(), MotifHit { count, positions });
        }
    }

    found
}

/// k-mers vus au moins `min_occurrences` fois, du plus fréquent au moins fréquent
pub fn frequent_kmers(sequence: &str, k: usize, min_occurrences: usize) -> Vec<(String, usize)> {
    let bytes = sequence.as_bytes();
    if k == 0 || bytes.len() < k {
        return Vec::new();
    }

    let mut counts: HashMap<&[u8], usize> = HashMap::new();
    for window in bytes.windows(k) {
        *counts.entry(window).or_insert(0) += 1;
    }

    let mut kmers: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count >= min_occurrences)
        .map(|(kmer, count)| (String::from_utf8_lossy(kmer).into_owned(), count))
        .collect();

    kmers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    kmers
}
