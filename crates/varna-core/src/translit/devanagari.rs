use std::collections::HashMap;

use super::letters::{LetterKind, INHERENT_A, LETTERS, VIRAMA};
use super::{ConversionError, Piece, Scheme};

/// Devanagari lookup: independent letters and dependent vowel signs.
pub(crate) struct DevanagariTable {
    letters: HashMap<char, usize>,
    matras: HashMap<char, usize>,
}

impl DevanagariTable {
    pub fn new() -> Self {
        let mut letters = HashMap::new();
        let mut matras = HashMap::new();
        for (idx, letter) in LETTERS.iter().enumerate() {
            letters.insert(letter.deva, idx);
            if let Some(m) = letter.matra {
                matras.insert(m, idx);
            }
        }
        DevanagariTable { letters, matras }
    }

    /// A consonant takes the following vowel sign, loses its vowel before a
    /// virama, and otherwise carries the inherent "a".
    pub fn parse(&self, text: &str) -> Result<Vec<Piece>, ConversionError> {
        let chars: Vec<char> = text.chars().collect();
        let mut pieces = Vec::with_capacity(chars.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let Some(&idx) = self.letters.get(&ch) else {
                if ch.is_whitespace() {
                    pieces.push(Piece::Literal(ch));
                    i += 1;
                    continue;
                }
                // Includes stray vowel signs and viramas.
                return Err(ConversionError::UndefinedCharacter {
                    scheme: Scheme::Devanagari,
                    offset: i,
                    ch,
                });
            };
            pieces.push(Piece::Letter(idx));
            i += 1;

            if LETTERS[idx].kind != LetterKind::Consonant {
                continue;
            }
            match chars.get(i) {
                Some(&VIRAMA) => i += 1,
                Some(c) if self.matras.contains_key(c) => {
                    pieces.push(Piece::Letter(self.matras[c]));
                    i += 1;
                }
                _ => pieces.push(Piece::Letter(INHERENT_A)),
            }
        }
        Ok(pieces)
    }

    pub fn render(&self, pieces: &[Piece]) -> String {
        let mut out = String::with_capacity(pieces.len() * 3);
        let mut iter = pieces.iter().peekable();

        while let Some(piece) = iter.next() {
            let idx = match *piece {
                Piece::Literal(ch) => {
                    out.push(ch);
                    continue;
                }
                Piece::Letter(idx) => idx,
            };
            let letter = &LETTERS[idx];
            out.push(letter.deva);
            if letter.kind != LetterKind::Consonant {
                continue;
            }
            match iter.peek() {
                Some(Piece::Letter(next)) if LETTERS[*next].kind == LetterKind::Vowel => {
                    if let Some(m) = LETTERS[*next].matra {
                        out.push(m);
                    }
                    iter.next();
                }
                _ => out.push(VIRAMA),
            }
        }
        out
    }
}
