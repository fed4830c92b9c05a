//! Propriétés de l'analyseur vérifiées sur des séquences aléatoires

use dnaseq_core::{analyze, AnalyzerConfig, SequenceAnalyzer, SequenceError};
use proptest::prelude::*;

fn dna(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], 1..=max_len)
        .prop_map(|bases| bases.into_iter().collect())
}

proptest! {
    #[test]
    fn counts_sum_to_length(seq in dna(500)) {
        let result = analyze(&seq).unwrap();
        let c = result.composition();
        prop_assert_eq!(c.a + c.t + c.g + c.c, seq.len());
    }

    #[test]
    fn gc_and_at_sum_to_hundred(seq in dna(500)) {
        let result = analyze(&seq).unwrap();
        prop_assert!((result.gc_content() + result.at_content() - 100.0).abs() <= 0.01);
        prop_assert!((result.purine_content() + result.pyrimidine_content() - 100.0).abs() <= 0.01);
    }

    #[test]
    fn percentages_in_range(seq in dna(200), precision in 0u32..8) {
        let analyzer = SequenceAnalyzer::new(AnalyzerConfig::builder().precision(precision).build());
        let result = analyzer.analyze(&seq).unwrap();
        for value in [result.gc_content(), result.at_content(), result.purine_content(), result.pyrimidine_content()] {
            prop_assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn analysis_is_deterministic(seq in dna(300)) {
        prop_assert_eq!(analyze(&seq).unwrap(), analyze(&seq).unwrap());
    }

    #[test]
    fn case_does_not_matter(seq in dna(300)) {
        prop_assert_eq!(analyze(&seq.to_lowercase()).unwrap(), analyze(&seq).unwrap());
    }

    #[test]
    fn whitespace_does_not_matter(seq in dna(300)) {
        let wrapped: String = seq
            .as_bytes()
            .chunks(60)
            .map(|line| format!("{}\n", String::from_utf8_lossy(line)))
            .collect();
        prop_assert_eq!(analyze(&wrapped).unwrap(), analyze(&seq).unwrap());
    }

    #[test]
    fn invalid_symbol_is_located(seq in dna(100), bad in "[BDEFHIJKLMNOPQRSUVWXYZ]") {
        let raw = format!("{}{}", seq, bad);
        match analyze(&raw) {
            Err(SequenceError::InvalidSequence { symbols, total }) => {
                prop_assert_eq!(total, 1);
                prop_assert_eq!(symbols[0].position, seq.len() + 1);
                prop_assert_eq!(Some(symbols[0].symbol), bad.chars().next());
            }
            other => prop_assert!(false, "résultat inattendu: {:?}", other),
        }
    }
}
