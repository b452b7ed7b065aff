//! Letter inventory shared by every scheme.
//!
//! Each letter lists its spellings per romanization, indexed by
//! `Scheme::roman_index()` (ITRANS, Harvard-Kyoto, SLP1, Velthuis, WX). The
//! first spelling is the one written on output; the rest are accepted on
//! input only. An empty list means the scheme cannot write the letter
//! directly; it is then written through `decompose` if that is set.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LetterKind {
    Vowel,
    Consonant,
    Mark,
    /// Stands alone: never takes or removes a vowel.
    Symbol,
}

#[derive(Debug)]
pub(crate) struct Letter {
    /// IAST form, used in error messages.
    pub name: &'static str,
    pub kind: LetterKind,
    pub roman: [&'static [&'static str]; 5],
    /// Independent vowel, consonant with inherent "a", or mark.
    pub deva: char,
    /// Dependent vowel sign; `None` for the inherent "a" and non-vowels.
    pub matra: Option<char>,
    /// Letter names written in place of this one when a scheme has no
    /// spelling for it.
    pub decompose: &'static [&'static str],
}

pub(crate) const VIRAMA: char = '\u{094D}';

/// Index of the inherent vowel "a" in [`LETTERS`].
pub(crate) const INHERENT_A: usize = 0;

const fn vowel(
    name: &'static str,
    deva: char,
    matra: Option<char>,
    roman: [&'static [&'static str]; 5],
) -> Letter {
    Letter {
        name,
        kind: LetterKind::Vowel,
        roman,
        deva,
        matra,
        decompose: &[],
    }
}

const fn consonant(name: &'static str, deva: char, roman: [&'static [&'static str]; 5]) -> Letter {
    Letter {
        name,
        kind: LetterKind::Consonant,
        roman,
        deva,
        matra: None,
        decompose: &[],
    }
}

const fn mark(name: &'static str, deva: char, roman: [&'static [&'static str]; 5]) -> Letter {
    Letter {
        name,
        kind: LetterKind::Mark,
        roman,
        deva,
        matra: None,
        decompose: &[],
    }
}

const fn symbol(
    name: &'static str,
    deva: char,
    roman: [&'static [&'static str]; 5],
    decompose: &'static [&'static str],
) -> Letter {
    Letter {
        name,
        kind: LetterKind::Symbol,
        roman,
        deva,
        matra: None,
        decompose,
    }
}

/// Same spelling in every romanization.
const fn same(s: &'static [&'static str]) -> [&'static [&'static str]; 5] {
    [s, s, s, s, s]
}

pub(crate) static LETTERS: &[Letter] = &[
    // Vowels
    vowel("a", 'अ', None, same(&["a"])),
    vowel("ā", 'आ', Some('ा'), [&["A", "aa"], &["A"], &["A"], &["aa", "A"], &["A"]]),
    vowel("i", 'इ', Some('ि'), same(&["i"])),
    vowel("ī", 'ई', Some('ी'), [&["I", "ii"], &["I"], &["I"], &["ii", "I"], &["I"]]),
    vowel("u", 'उ', Some('ु'), same(&["u"])),
    vowel("ū", 'ऊ', Some('ू'), [&["U", "uu"], &["U"], &["U"], &["uu", "U"], &["U"]]),
    vowel("ṛ", 'ऋ', Some('ृ'), [&["RRi", "R^i"], &["R"], &["f"], &[".r"], &["q"]]),
    vowel("ṝ", 'ॠ', Some('ॄ'), [&["RRI", "R^I"], &["RR"], &["F"], &[".rr"], &["Q"]]),
    vowel("ḷ", 'ऌ', Some('ॢ'), [&["LLi", "L^i"], &["lR"], &["x"], &[".l"], &["L"]]),
    vowel("ḹ", 'ॡ', Some('ॣ'), [&["LLI", "L^I"], &["lRR"], &["X"], &[".ll"], &[]]),
    vowel("e", 'ए', Some('े'), [&["e", "E"], &["e"], &["e"], &["e"], &["e"]]),
    vowel("ai", 'ऐ', Some('ै'), [&["ai", "AI"], &["ai"], &["E"], &["ai"], &["E"]]),
    vowel("o", 'ओ', Some('ो'), [&["o", "O"], &["o"], &["o"], &["o"], &["o"]]),
    vowel("au", 'औ', Some('ौ'), [&["au", "AU"], &["au"], &["O"], &["au"], &["O"]]),
    // Velars
    consonant("k", 'क', same(&["k"])),
    consonant("kh", 'ख', [&["kh"], &["kh"], &["K"], &["kh"], &["K"]]),
    consonant("g", 'ग', same(&["g"])),
    consonant("gh", 'घ', [&["gh"], &["gh"], &["G"], &["gh"], &["G"]]),
    consonant("ṅ", 'ङ', [&["~N", "N^"], &["G"], &["N"], &["\"n"], &["f"]]),
    // Palatals
    consonant("c", 'च', [&["ch", "c"], &["c"], &["c"], &["c"], &["c"]]),
    consonant("ch", 'छ', [&["Ch", "chh"], &["ch"], &["C"], &["ch"], &["C"]]),
    consonant("j", 'ज', same(&["j"])),
    consonant("jh", 'झ', [&["jh"], &["jh"], &["J"], &["jh"], &["J"]]),
    consonant("ñ", 'ञ', [&["~n", "JN"], &["J"], &["Y"], &["~n"], &["F"]]),
    // Retroflexes
    consonant("ṭ", 'ट', [&["T"], &["T"], &["w"], &[".t"], &["t"]]),
    consonant("ṭh", 'ठ', [&["Th"], &["Th"], &["W"], &[".th"], &["T"]]),
    consonant("ḍ", 'ड', [&["D"], &["D"], &["q"], &[".d"], &["d"]]),
    consonant("ḍh", 'ढ', [&["Dh"], &["Dh"], &["Q"], &[".dh"], &["D"]]),
    consonant("ṇ", 'ण', [&["N"], &["N"], &["R"], &[".n"], &["N"]]),
    // Dentals
    consonant("t", 'त', [&["t"], &["t"], &["t"], &["t"], &["w"]]),
    consonant("th", 'थ', [&["th"], &["th"], &["T"], &["th"], &["W"]]),
    consonant("d", 'द', [&["d"], &["d"], &["d"], &["d"], &["x"]]),
    consonant("dh", 'ध', [&["dh"], &["dh"], &["D"], &["dh"], &["X"]]),
    consonant("n", 'न', same(&["n"])),
    // Labials
    consonant("p", 'प', same(&["p"])),
    consonant("ph", 'फ', [&["ph"], &["ph"], &["P"], &["ph"], &["P"]]),
    consonant("b", 'ब', same(&["b"])),
    consonant("bh", 'भ', [&["bh"], &["bh"], &["B"], &["bh"], &["B"]]),
    consonant("m", 'म', same(&["m"])),
    // Semivowels, sibilants, aspirate
    consonant("y", 'य', same(&["y"])),
    consonant("r", 'र', same(&["r"])),
    consonant("l", 'ल', same(&["l"])),
    consonant("v", 'व', [&["v", "w"], &["v"], &["v"], &["v"], &["v"]]),
    consonant("ś", 'श', [&["sh"], &["z"], &["S"], &["\"s"], &["S"]]),
    consonant("ṣ", 'ष', [&["Sh", "shh"], &["S"], &["z"], &[".s"], &["R"]]),
    consonant("s", 'स', same(&["s"])),
    consonant("h", 'ह', same(&["h"])),
    // Marks
    mark("ṃ", 'ं', [&["M", ".n"], &["M"], &["M"], &[".m"], &["M"]]),
    mark("ḥ", 'ः', [&["H"], &["H"], &["H"], &[".h"], &["H"]]),
    mark("m̐", 'ँ', [&[".N"], &["~"], &["~"], &["/"], &["z"]]),
    // Symbols
    symbol("oṃ", 'ॐ', [&["OM", "AUM"], &["OM"], &[], &["O"], &[]], &["o", "ṃ"]),
    symbol("'", 'ऽ', [&[".a"], &["'"], &["'"], &[".a"], &["Z"]], &[]),
    symbol("|", '।', [&["|"], &["|"], &["."], &["|"], &["."]], &[]),
    symbol("||", '॥', [&["||"], &["||"], &[".."], &["||"], &[".."]], &[]),
    symbol("0", '०', same(&["0"]), &[]),
    symbol("1", '१', same(&["1"]), &[]),
    symbol("2", '२', same(&["2"]), &[]),
    symbol("3", '३', same(&["3"]), &[]),
    symbol("4", '४', same(&["4"]), &[]),
    symbol("5", '५', same(&["5"]), &[]),
    symbol("6", '६', same(&["6"]), &[]),
    symbol("7", '७', same(&["7"]), &[]),
    symbol("8", '८', same(&["8"]), &[]),
    symbol("9", '९', same(&["9"]), &[]),
];
