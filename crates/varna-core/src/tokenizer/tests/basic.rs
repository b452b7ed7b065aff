use super::{make_tables, texts};
use crate::symbols::SymbolTables;
use crate::tokenizer::{scan, PhonemeTokenizer, Token, TokenKind};

use TokenKind::{Nucleus, Onset};

#[test]
fn test_empty_input() {
    let tables = make_tables(&["k"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("");
    assert!(r.is_empty());
    assert_eq!(r.token_count(), 0);
    assert_eq!(r.skipped(), 0);
}

#[test]
fn test_onset_then_nucleus() {
    let tables = make_tables(&["k"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("ka");
    assert_eq!(texts(&r), vec![(Onset, "k"), (Nucleus, "a")]);
    assert_eq!(r.skipped(), 0);
}

#[test]
fn test_no_implicit_vowel() {
    let tables = make_tables(&["k"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("k");
    assert_eq!(
        r.tokens(),
        &[Token {
            text: "k".into(),
            kind: Onset,
            offset: 0,
            len: 1,
        }]
    );
}

#[test]
fn test_longest_onset_wins() {
    let tables = make_tables(&["k", "kSh"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("kSha");
    assert_eq!(texts(&r), vec![(Onset, "kSh"), (Nucleus, "a")]);
}

#[test]
fn test_skip_accounting_keeps_order() {
    let tables = make_tables(&["k"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("k#a");
    assert_eq!(texts(&r), vec![(Onset, "k"), (Nucleus, "a")]);
    assert_eq!(r.skipped(), 1);
    assert_eq!(r.tokens()[1].offset, 2);
}

#[test]
fn test_rama() {
    let tables = make_tables(&["r", "m"], &["A", "a"]);
    let r = PhonemeTokenizer::new(&tables).scan("rAma");
    assert_eq!(
        texts(&r),
        vec![(Onset, "r"), (Nucleus, "A"), (Onset, "m"), (Nucleus, "a")]
    );
    assert_eq!(r.skipped(), 0);
}

#[test]
fn test_all_skipped_is_empty() {
    let tables = make_tables(&["k"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("#?!");
    assert!(r.is_empty());
    assert_eq!(r.skipped(), 3);
}

#[test]
fn test_bare_nucleus() {
    let tables = make_tables(&["m"], &["O"]);
    let r = PhonemeTokenizer::new(&tables).scan("Om");
    assert_eq!(texts(&r), vec![(Nucleus, "O"), (Onset, "m")]);
}

#[test]
fn test_greedy_onset_is_not_revisited() {
    // "kS" has no entry: "k" is taken, then "S" is skipped rather than
    // reconsidering the onset choice.
    let tables = make_tables(&["k", "kSh"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("kSa");
    assert_eq!(texts(&r), vec![(Onset, "k"), (Nucleus, "a")]);
    assert_eq!(r.skipped(), 1);
}

#[test]
fn test_consecutive_onsets() {
    let tables = make_tables(&["k", "t"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("kta");
    assert_eq!(texts(&r), vec![(Onset, "k"), (Onset, "t"), (Nucleus, "a")]);
}

#[test]
fn test_offsets_in_chars() {
    let tables = make_tables(&["k"], &["a"]);
    let r = PhonemeTokenizer::new(&tables).scan("āka");
    assert_eq!(r.skipped(), 1);
    assert_eq!(r.tokens()[0].offset, 1);
    assert_eq!(r.tokens()[1].offset, 2);
    assert_eq!(r.tokens()[1].end(), 3);
}

#[test]
fn test_default_kshatriya_cluster() {
    let r = scan("kShatriya");
    assert_eq!(
        texts(&r),
        vec![
            (Onset, "kSh"),
            (Nucleus, "a"),
            (Onset, "t"),
            (Onset, "r"),
            (Nucleus, "i"),
            (Onset, "y"),
            (Nucleus, "a"),
        ]
    );
}

#[test]
fn test_default_long_nucleus_after_onset() {
    let r = scan("kRRiShNa");
    assert_eq!(
        texts(&r),
        vec![
            (Onset, "k"),
            (Nucleus, "RRi"),
            (Onset, "Sh"),
            (Onset, "N"),
            (Nucleus, "a"),
        ]
    );
}

#[test]
fn test_default_diphthong_beats_short_vowel() {
    let r = scan("kai");
    assert_eq!(texts(&r), vec![(Onset, "k"), (Nucleus, "ai")]);
}

#[test]
fn test_default_aspirate_beats_plain() {
    let r = scan("Dharma");
    assert_eq!(
        texts(&r),
        vec![
            (Onset, "Dh"),
            (Nucleus, "a"),
            (Onset, "r"),
            (Onset, "m"),
            (Nucleus, "a"),
        ]
    );
}

#[test]
fn test_default_phrase_with_spaces() {
    // "n" is not an onset in the default tables and is skipped with the spaces.
    let r = scan("Om namaH shivAya");
    assert_eq!(
        texts(&r),
        vec![
            (Nucleus, "O"),
            (Onset, "m"),
            (Nucleus, "a"),
            (Onset, "m"),
            (Nucleus, "a"),
            (Nucleus, "H"),
            (Onset, "sh"),
            (Nucleus, "i"),
            (Onset, "v"),
            (Nucleus, "A"),
            (Onset, "y"),
            (Nucleus, "a"),
        ]
    );
    assert_eq!(r.skipped(), 3);
    assert_eq!(r.covered_len() + r.skipped(), 16);
}

#[test]
fn test_onset_and_nucleus_iterators() {
    let r = scan("rAma");
    let onsets: Vec<&str> = r.onsets().map(|t| t.text.as_str()).collect();
    let nuclei: Vec<&str> = r.nuclei().map(|t| t.text.as_str()).collect();
    assert_eq!(onsets, vec!["r", "m"]);
    assert_eq!(nuclei, vec!["A", "a"]);
}

#[test]
fn test_tokenizer_is_shareable_across_threads() {
    let tables = SymbolTables::global();
    let tokenizer = PhonemeTokenizer::new(tables);
    let expected = tokenizer.scan("rAmakRRiShNa");
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| tokenizer.scan("rAmakRRiShNa")))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_scan_result_serializes() {
    let r = scan("ka");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["skipped"], 0);
    assert_eq!(json["tokens"][0]["kind"], "onset");
    assert_eq!(json["tokens"][1]["text"], "a");
}
