//! Analyseur de composition nucléotidique
//!
//! Le cœur du système: une chaîne brute entre, un [`AnalysisResult`] sort.
//! Normalisation, validation et comptage se font en un seul passage, sans
//! copie de la séquence et avec quatre compteurs.

use crate::error::{Result, SequenceError};
use crate::sequence::{normalized_symbols, DnaSequence, InvalidSymbol, InvalidSymbols, Nucleotide};
use serde::{Deserialize, Serialize};

/// Précision maximale acceptée pour l'arrondi des pourcentages
pub const MAX_PRECISION: u32 = 6;

/// Politique face aux symboles hors {A,T,G,C}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Toute la séquence est rejetée
    #[default]
    Strict,
    /// Les symboles invalides sont ignorés et signalés
    Lenient,
}

/// Configuration de l'analyseur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub mode: ValidationMode,
    /// Nombre de décimales des pourcentages
    pub precision: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Strict,
            precision: 2,
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }
}

/// Constructeur explicite de [`AnalyzerConfig`]
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn lenient(self, lenient: bool) -> Self {
        self.mode(if lenient { ValidationMode::Lenient } else { ValidationMode::Strict })
    }

    /// Décimales des pourcentages, bornées à [`MAX_PRECISION`]
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision.min(MAX_PRECISION);
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

/// Nombre d'occurrences de chaque base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompositionCounts {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "T")]
    pub t: usize,
    #[serde(rename = "G")]
    pub g: usize,
    #[serde(rename = "C")]
    pub c: usize,
}

impl CompositionCounts {
    /// Compte les bases d'une séquence déjà validée
    pub fn from_bases(bases: &[Nucleotide]) -> Self {
        let mut counts = Self::default();
        for &base in bases {
            counts.add(base);
        }
        counts
    }

    fn add(&mut self, base: Nucleotide) {
        match base {
            Nucleotide::A => self.a += 1,
            Nucleotide::T => self.t += 1,
            Nucleotide::G => self.g += 1,
            Nucleotide::C => self.c += 1,
        }
    }

    pub fn get(&self, base: Nucleotide) -> usize {
        match base {
            Nucleotide::A => self.a,
            Nucleotide::T => self.t,
            Nucleotide::G => self.g,
            Nucleotide::C => self.c,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    pub fn gc(&self) -> usize {
        self.g + self.c
    }

    pub fn at(&self) -> usize {
        self.a + self.t
    }

    pub fn purines(&self) -> usize {
        self.a + self.g
    }

    pub fn pyrimidines(&self) -> usize {
        self.t + self.c
    }
}

/// Statistiques dérivées, en pourcentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub at_content: f64,
    pub purine_content: f64,
    pub pyrimidine_content: f64,
}

/// Résultat d'analyse, construit une fois et jamais modifié.
///
/// Seul l'analyseur le construit: il n'est pas désérialisable, ses invariants
/// (comptages non vides, paires à 100 %) ne pourraient pas être garantis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisResult {
    composition: CompositionCounts,
    gc_content: f64,
    statistics: Statistics,
}

impl AnalysisResult {
    /// Construit le résultat depuis des comptages non vides.
    ///
    /// AT et pyrimidines sont les compléments arrondis de GC et purines, pour
    /// que chaque paire somme exactement à 100 après arrondi.
    fn from_counts(composition: CompositionCounts, precision: u32) -> Self {
        let total = composition.total() as f64;
        let gc_content = round_to(composition.gc() as f64 / total * 100.0, precision);
        let purine_content = round_to(composition.purines() as f64 / total * 100.0, precision);

        Self {
            composition,
            gc_content,
            statistics: Statistics {
                at_content: round_to(100.0 - gc_content, precision),
                purine_content,
                pyrimidine_content: round_to(100.0 - purine_content, precision),
            },
        }
    }

    pub fn composition(&self) -> &CompositionCounts {
        &self.composition
    }

    /// Nombre de bases analysées
    pub fn length(&self) -> usize {
        self.composition.total()
    }

    pub fn gc_content(&self) -> f64 {
        self.gc_content
    }

    pub fn at_content(&self) -> f64 {
        self.statistics.at_content
    }

    pub fn purine_content(&self) -> f64 {
        self.statistics.purine_content
    }

    pub fn pyrimidine_content(&self) -> f64 {
        self.statistics.pyrimidine_content
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Pourcentage d'une base, à la même précision que `gc_content`
    pub fn base_percentage(&self, base: Nucleotide, precision: u32) -> f64 {
        round_to(
            self.composition.get(base) as f64 / self.length() as f64 * 100.0,
            precision,
        )
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

/// Analyseur de séquences, sans état mutable
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceAnalyzer {
    config: AnalyzerConfig,
}

impl SequenceAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config: AnalyzerConfig {
                precision: config.precision.min(MAX_PRECISION),
                ..config
            },
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyse une séquence brute
    pub fn analyze(&self, raw: &str) -> Result<AnalysisResult> {
        self.analyze_detailed(raw).map(|(result, _)| result)
    }

    /// Analyse une séquence brute et retourne aussi les symboles ignorés
    /// (toujours vide en mode strict)
    pub fn analyze_detailed(&self, raw: &str) -> Result<(AnalysisResult, Vec<InvalidSymbol>)> {
        let mut counts = CompositionCounts::default();
        let mut invalid = InvalidSymbols::default();

        for (position, c) in normalized_symbols(raw) {
            match Nucleotide::from_char(c) {
                Some(base) => counts.add(base),
                None => invalid.push(c, position),
            }
        }

        if self.config.mode == ValidationMode::Strict && !invalid.is_empty() {
            return Err(invalid.into_error());
        }
        if counts.total() == 0 {
            return Err(SequenceError::EmptySequence);
        }

        Ok((
            AnalysisResult::from_counts(counts, self.config.precision),
            invalid.into_vec(),
        ))
    }

    /// Analyse une séquence déjà validée
    pub fn analyze_sequence(&self, sequence: &DnaSequence) -> AnalysisResult {
        AnalysisResult::from_counts(
            CompositionCounts::from_bases(sequence.bases()),
            self.config.precision,
        )
    }
}

/// Analyse stricte avec la configuration par défaut
pub fn analyze(raw: &str) -> Result<AnalysisResult> {
    SequenceAnalyzer::default().analyze(raw)
}
