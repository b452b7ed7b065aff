use super::*;
use crate::chakra::{parse_chakras_toml, DEFAULT_CHAKRAS_TOML};
use crate::symbols::parse_symbols_toml;
use crate::tokenizer::TokenKind;

#[test]
fn test_rama_itrans() {
    let a = analyze("rAma", Scheme::Itrans).unwrap();
    assert_eq!(a.devanagari, "राम");
    assert_eq!(a.itrans, "rAma");
    assert_eq!(a.scan.token_count(), 4);
    assert_eq!(a.scan.skipped(), 0);
    assert_eq!(
        a.classifications,
        vec![
            Classification::Onset {
                key: "ra".into(),
                chakra: Chakra::Svadhisthana,
                folded: false,
            },
            Classification::Unclassified {
                text: "A".into(),
                kind: TokenKind::Nucleus,
            },
            Classification::Onset {
                key: "ma".into(),
                chakra: Chakra::Svadhisthana,
                folded: false,
            },
            Classification::Vowel { text: "a".into() },
        ]
    );
    assert_eq!(
        a.dominance,
        Dominance::Consonantal {
            chakras: vec![Chakra::Svadhisthana],
            count: 2,
        }
    );
    assert_eq!(a.tally.vowel_count(), 1);
    assert_eq!(a.activating_letters(Chakra::Svadhisthana), vec!["ra", "ma"]);
}

#[test]
fn test_rama_devanagari_matches_itrans() {
    let from_deva = analyze("राम", Scheme::Devanagari).unwrap();
    let from_itrans = analyze("rAma", Scheme::Itrans).unwrap();
    assert_eq!(from_deva.devanagari, "राम");
    assert_eq!(from_deva.itrans, from_itrans.itrans);
    assert_eq!(from_deva.scan, from_itrans.scan);
    assert_eq!(from_deva.dominance, from_itrans.dominance);
}

#[test]
fn test_three_way_tie_in_table_order() {
    // k -> Anahata, Sh -> Muladhara, N -> Manipura; encountered in that order.
    let a = analyze("kRSNa", Scheme::HarvardKyoto).unwrap();
    assert_eq!(a.itrans, "kRRiShNa");
    assert_eq!(
        a.dominance,
        Dominance::Consonantal {
            chakras: vec![Chakra::Muladhara, Chakra::Manipura, Chakra::Anahata],
            count: 1,
        }
    );
    assert_eq!(a.dominant(), Some(Chakra::Muladhara));
    assert_eq!(a.tally.vowel_count(), 2);
}

#[test]
fn test_conversion_error_stops_before_scan() {
    let err = analyze("Krishna", Scheme::Itrans).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Conversion(ConversionError::UndefinedCharacter { ch: 'K', offset: 0, .. })
    ));
}

#[test]
fn test_devanagari_input_must_contain_devanagari() {
    let err = analyze("rama", Scheme::Devanagari).unwrap_err();
    assert!(matches!(err, AnalysisError::NotDevanagari));
}

#[test]
fn test_whitespace_only_is_empty_not_error() {
    let a = analyze("   ", Scheme::Itrans).unwrap();
    assert!(a.is_empty());
    assert_eq!(a.scan.skipped(), 3);
    assert_eq!(a.dominance, Dominance::Silent);
    assert_eq!(a.dominant(), None);
}

#[test]
fn test_tokens_without_classification_are_not_empty() {
    // "A" scans as a nucleus but is not in the counted vowel set.
    let a = analyze("A", Scheme::Itrans).unwrap();
    assert!(!a.is_empty());
    assert!(a.tally.is_silent());
    assert_eq!(a.dominance, Dominance::Silent);
}

#[test]
fn test_vowels_only() {
    let a = analyze("ai", Scheme::Itrans).unwrap();
    assert_eq!(a.dominance, Dominance::VowelsOnly { vowels: 1 });
    assert_eq!(a.dominant(), Some(Chakra::Vishuddha));
}

#[test]
fn test_injected_tables() {
    let tables = parse_symbols_toml(
        r#"
onsets = ["n", "m"]
nuclei = ["a", "H"]
"#,
    )
    .unwrap();
    let chakras = parse_chakras_toml(DEFAULT_CHAKRAS_TOML).unwrap();
    let analyzer = Analyzer::new(SchemeConverter::global(), &tables, &chakras);
    let a = analyzer.analyze("namaH", Scheme::Itrans).unwrap();
    assert_eq!(a.scan.token_count(), 5);
    // na -> Manipura, ma -> Svadhisthana
    assert_eq!(
        a.dominance,
        Dominance::Consonantal {
            chakras: vec![Chakra::Svadhisthana, Chakra::Manipura],
            count: 1,
        }
    );
    assert_eq!(analyzer.profile(Chakra::Svadhisthana).element, "Water");
}

#[test]
fn test_analysis_serializes() {
    let a = analyze("rAma", Scheme::Itrans).unwrap();
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["scheme"], "itrans");
    assert_eq!(json["dominance"]["kind"], "consonantal");
    assert_eq!(json["dominance"]["chakras"][0], "Svadhisthana");
    assert_eq!(json["classifications"][1]["class"], "unclassified");
}

#[test]
fn test_om_namah_shivaya_itrans() {
    let a = analyze("Om namaH shivAya", Scheme::Itrans).unwrap();
    assert_eq!(a.devanagari, "ओम् नमः शिवाय");
    assert_eq!(a.itrans, "om namaH shivAya");
    assert_eq!(a.scan.token_count(), 12);
    // The two spaces and the "n", which is not an onset.
    assert_eq!(a.scan.skipped(), 3);
    assert_eq!(
        a.dominance,
        Dominance::Consonantal {
            chakras: vec![Chakra::Svadhisthana],
            count: 3,
        }
    );
    assert_eq!(a.activating_letters(Chakra::Svadhisthana), vec!["ma", "ma", "ya"]);
    assert_eq!(a.tally.count(Chakra::Muladhara), 2);
    assert_eq!(a.tally.vowel_count(), 5);
}

#[test]
fn test_om_sign_in_devanagari_input() {
    let a = analyze("ॐ नमः शिवाय", Scheme::Devanagari).unwrap();
    assert_eq!(a.itrans, "OM namaH shivAya");
    assert_eq!(a.scan.tokens()[0].text, "O");
    assert_eq!(a.scan.tokens()[1].text, "M");
    assert_eq!(
        a.dominance,
        Dominance::Consonantal {
            chakras: vec![Chakra::Muladhara, Chakra::Svadhisthana],
            count: 2,
        }
    );
}

#[test]
fn test_danda_is_skipped_not_rejected() {
    let a = analyze("राम।", Scheme::Devanagari).unwrap();
    assert_eq!(a.itrans, "rAma|");
    assert_eq!(a.scan.token_count(), 4);
    assert_eq!(a.scan.skipped(), 1);
}
