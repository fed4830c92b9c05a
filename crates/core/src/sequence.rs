//! Alphabet nucléotidique, normalisation et séquences ADN validées

use crate::error::{Result, SequenceError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nombre maximal de symboles fautifs conservés dans une erreur
pub const MAX_REPORTED_SYMBOLS: usize = 32;

/// Les quatre bases de l'ADN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A, // Adénine
    C, // Cytosine
    G, // Guanine
    T, // Thymine
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Convertit un caractère (insensible à la casse) en nucléotide
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Retourne true si c'est une base G ou C
    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }

    /// Purines: adénine et guanine
    pub fn is_purine(self) -> bool {
        matches!(self, Nucleotide::A | Nucleotide::G)
    }

    /// Base complémentaire (Watson-Crick)
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::C => Nucleotide::G,
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = SequenceError;

    fn try_from(c: char) -> Result<Self> {
        Nucleotide::from_char(c).ok_or_else(|| SequenceError::InvalidSequence {
            symbols: vec![InvalidSymbol { symbol: c, position: 1 }],
            total: 1,
        })
    }
}

/// Symbole rejeté et sa position (1-based, dans la séquence sans espaces)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidSymbol {
    pub symbol: char,
    pub position: usize,
}

/// Parcourt l'entrée brute en ignorant les espaces et retours à la ligne.
///
/// Chaque symbole est mis en majuscule et accompagné de sa position 1-based
/// dans la séquence normalisée. Aucune copie de l'entrée n'est faite.
pub fn normalized_symbols(raw: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .enumerate()
        .map(|(i, c)| (i + 1, c))
}

/// Accumulateur des symboles invalides rencontrés pendant un parcours
#[derive(Debug, Default)]
pub(crate) struct InvalidSymbols {
    reported: Vec<InvalidSymbol>,
    total: usize,
}

impl InvalidSymbols {
    pub(crate) fn push(&mut self, symbol: char, position: usize) {
        if self.reported.len() < MAX_REPORTED_SYMBOLS {
            self.reported.push(InvalidSymbol { symbol, position });
        }
        self.total += 1;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub(crate) fn into_vec(self) -> Vec<InvalidSymbol> {
        self.reported
    }

    pub(crate) fn into_error(self) -> SequenceError {
        SequenceError::InvalidSequence {
            symbols: self.reported,
            total: self.total,
        }
    }
}

/// Séquence ADN normalisée et validée, immuable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnaSequence {
    bases: Vec<Nucleotide>,
}

impl DnaSequence {
    /// Parse une séquence en mode strict: tout symbole hors {A,T,G,C} est rejeté
    pub fn parse(raw: &str) -> Result<Self> {
        let (sequence, invalid) = Self::scan(raw);
        if !invalid.is_empty() {
            return Err(invalid.into_error());
        }
        if sequence.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        Ok(sequence)
    }

    /// Parse une séquence en ignorant les symboles invalides, qui sont retournés
    pub fn parse_lenient(raw: &str) -> Result<(Self, Vec<InvalidSymbol>)> {
        let (sequence, invalid) = Self::scan(raw);
        if sequence.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        Ok((sequence, invalid.into_vec()))
    }

    fn scan(raw: &str) -> (Self, InvalidSymbols) {
        let mut bases = Vec::with_capacity(raw.len());
        let mut invalid = InvalidSymbols::default();

        for (position, c) in normalized_symbols(raw) {
            match Nucleotide::from_char(c) {
                Some(base) => bases.push(base),
                None => invalid.push(c, position),
            }
        }

        (Self { bases }, invalid)
    }

    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Brin complémentaire inverse
    pub fn reverse_complement(&self) -> Self {
        Self {
            bases: self.bases.iter().rev().map(|b| b.complement()).collect(),
        }
    }
}

impl std::str::FromStr for DnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        DnaSequence::parse(s)
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_conversion() {
        assert_eq!(Nucleotide::from_char('A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_char('c'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_char('N'), None);
        assert!(Nucleotide::try_from('X').is_err());
    }

    #[test]
    fn test_nucleotide_classes() {
        assert!(Nucleotide::G.is_gc() && Nucleotide::C.is_gc());
        assert!(!Nucleotide::A.is_gc());
        assert!(Nucleotide::A.is_purine() && Nucleotide::G.is_purine());
        assert!(!Nucleotide::T.is_purine());
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
    }

    #[test]
    fn test_normalized_positions_skip_whitespace() {
        let symbols: Vec<_> = normalized_symbols("a t\ng\r\nx").collect();
        assert_eq!(symbols, vec![(1, 'A'), (2, 'T'), (3, 'G'), (4, 'X')]);
    }

    #[test]
    fn test_parse_strict() {
        let seq = DnaSequence::parse("atg c\nGA").unwrap();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.to_string(), "ATGCGA");
    }

    #[test]
    fn test_parse_strict_rejects_invalid() {
        let err = DnaSequence::parse("ATGX").unwrap_err();
        assert_eq!(err.first_invalid(), Some(InvalidSymbol { symbol: 'X', position: 4 }));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(DnaSequence::parse("  \n\t"), Err(SequenceError::EmptySequence)));
    }

    #[test]
    fn test_parse_lenient_reports_skipped() {
        let (seq, skipped) = DnaSequence::parse_lenient("ATNNGC").unwrap();
        assert_eq!(seq.to_string(), "ATGC");
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[1], InvalidSymbol { symbol: 'N', position: 4 });
    }

    #[test]
    fn test_reported_symbols_are_capped() {
        let raw = "N".repeat(100);
        match DnaSequence::parse(&raw) {
            Err(SequenceError::InvalidSequence { symbols, total }) => {
                assert_eq!(symbols.len(), MAX_REPORTED_SYMBOLS);
                assert_eq!(total, 100);
            }
            other => panic!("résultat inattendu: {:?}", other),
        }
    }

    #[test]
    fn test_reverse_complement() {
        let seq: DnaSequence = "AACG".parse().unwrap();
        assert_eq!(seq.reverse_complement().to_string(), "CGTT");
    }
}
