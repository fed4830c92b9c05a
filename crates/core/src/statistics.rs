//! Statistiques complémentaires: masse moléculaire et profil qualitatif

use crate::analyzer::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Masses moyennes des nucléotides (ADN simple brin, g/mol)
const WEIGHT_A: f64 = 331.2218;
const WEIGHT_C: f64 = 307.1971;
const WEIGHT_G: f64 = 347.2212;
const WEIGHT_T: f64 = 322.2085;
const WATER: f64 = 18.0153;

/// Au-delà, la masse moléculaire n'est pas calculée
pub const MAX_WEIGHT_LENGTH: usize = 1000;

/// Masse moléculaire d'une séquence normalisée, arrondie à 2 décimales.
///
/// `None` pour une séquence vide ou d'au moins [`MAX_WEIGHT_LENGTH`] bases.
pub fn molecular_weight(sequence: &str) -> Option<f64> {
    let len = sequence.len();
    if len == 0 || len >= MAX_WEIGHT_LENGTH {
        return None;
    }

    let mut weight = 0.0;
    for b in sequence.bytes() {
        weight += match b {
            b'A' => WEIGHT_A,
            b'C' => WEIGHT_C,
            b'G' => WEIGHT_G,
            b'T' => WEIGHT_T,
            _ => return None,
        };
    }
    weight -= (len - 1) as f64 * WATER;

    Some((weight * 100.0).round() / 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthClass {
    VeryShort,
    Medium,
    Long,
}

impl LengthClass {
    pub fn classify(length: usize) -> Self {
        match length {
            0..=99 => LengthClass::VeryShort,
            100..=999 => LengthClass::Medium,
            _ => LengthClass::Long,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthClass::VeryShort => "très courte",
            LengthClass::Medium => "longueur moyenne",
            LengthClass::Long => "longue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GcClass {
    Low,
    Balanced,
    High,
}

impl GcClass {
    pub fn classify(gc_content: f64) -> Self {
        if gc_content < 30.0 {
            GcClass::Low
        } else if gc_content > 70.0 {
            GcClass::High
        } else {
            GcClass::Balanced
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GcClass::Low => "GC faible",
            GcClass::Balanced => "GC équilibré",
            GcClass::High => "GC élevé",
        }
    }
}

/// Écart AT/GC maximal (en points) pour parler d'équilibre
const BALANCE_TOLERANCE: f64 = 10.0;

/// Profil qualitatif d'une séquence analysée
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceProfile {
    pub length_class: LengthClass,
    pub gc_class: GcClass,
    pub at_gc_balanced: bool,
    pub summary: String,
}

impl SequenceProfile {
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        let length_class = LengthClass::classify(result.length());
        let gc_class = GcClass::classify(result.gc_content());
        let at_gc_balanced = (result.at_content() - result.gc_content()).abs() < BALANCE_TOLERANCE;

        let mut labels = vec![length_class.label(), gc_class.label()];
        if at_gc_balanced {
            labels.push("bon équilibre AT/GC");
        }

        Self {
            length_class,
            gc_class,
            at_gc_balanced,
            summary: labels.join(" | "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn test_molecular_weight() {
        assert_eq!(molecular_weight("ATGC"), Some(1253.8));
        assert_eq!(molecular_weight("A"), Some(331.22));
        assert_eq!(molecular_weight(""), None);
    }

    #[test]
    fn test_molecular_weight_too_large() {
        assert!(molecular_weight(&"A".repeat(999)).is_some());
        assert_eq!(molecular_weight(&"A".repeat(1000)), None);
    }

    #[test]
    fn test_classes() {
        assert_eq!(LengthClass::classify(99), LengthClass::VeryShort);
        assert_eq!(LengthClass::classify(100), LengthClass::Medium);
        assert_eq!(LengthClass::classify(1000), LengthClass::Long);
        assert_eq!(GcClass::classify(29.99), GcClass::Low);
        assert_eq!(GcClass::classify(70.0), GcClass::Balanced);
        assert_eq!(GcClass::classify(70.01), GcClass::High);
    }

    #[test]
    fn test_profile_summary() {
        let profile = SequenceProfile::from_analysis(&analyze("ATGC").unwrap());
        assert!(profile.at_gc_balanced);
        assert_eq!(profile.summary, "très courte | GC équilibré | bon équilibre AT/GC");

        let gc_rich = SequenceProfile::from_analysis(&analyze(&"GC".repeat(600)).unwrap());
        assert_eq!(gc_rich.length_class, LengthClass::Long);
        assert_eq!(gc_rich.gc_class, GcClass::High);
        assert!(!gc_rich.at_gc_balanced);
        assert_eq!(gc_rich.summary, "longue | GC élevé");
    }
}
