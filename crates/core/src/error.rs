//! Types d'erreurs pour l'analyse de séquences ADN

use crate::sequence::InvalidSymbol;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Séquence vide après normalisation")]
    EmptySequence,

    #[error(
        "Séquence invalide: {total} symbole(s) hors de {{A,T,G,C}} ({})",
        describe_symbols(.symbols)
    )]
    InvalidSequence {
        /// Symboles fautifs (tronqués à `MAX_REPORTED_SYMBOLS`)
        symbols: Vec<InvalidSymbol>,
        /// Nombre total de symboles invalides rencontrés
        total: usize,
    },

    #[error("Séquence trop courte: {len} < {min} nucléotides")]
    SequenceTooShort { len: usize, min: usize },

    #[error("Aucune séquence valide trouvée dans le fichier")]
    NoSequences,

    #[error("Fichier trop volumineux: {size} octets > {max}")]
    PayloadTooLarge { size: u64, max: u64 },

    #[error("Type de fichier non supporté: {0}")]
    UnsupportedFile(String),

    #[error("Erreur de parsing: {0}")]
    Parse(String),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SequenceError {
    /// Premier symbole fautif, s'il y en a un
    pub fn first_invalid(&self) -> Option<InvalidSymbol> {
        match self {
            SequenceError::InvalidSequence { symbols, .. } => symbols.first().copied(),
            _ => None,
        }
    }
}

fn describe_symbols(symbols: &[InvalidSymbol]) -> String {
    symbols
        .iter()
        .map(|s| format!("'{}' en position {}", s.symbol, s.position))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, SequenceError>;
