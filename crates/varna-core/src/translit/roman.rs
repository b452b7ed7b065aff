use std::collections::HashMap;

use super::letters::{Letter, LETTERS};
use super::{ConversionError, Piece, Scheme};
use crate::symbols::char_bounds;

/// Spelling lookup for one romanization scheme.
pub(crate) struct RomanTable {
    scheme: Scheme,
    column: usize,
    spellings: HashMap<&'static str, usize>,
    /// Longest spelling, in chars.
    max_len: usize,
}

impl RomanTable {
    pub fn new(scheme: Scheme, column: usize) -> Self {
        let mut spellings = HashMap::new();
        let mut max_len = 0;
        for (idx, letter) in LETTERS.iter().enumerate() {
            for &spelling in letter.roman[column] {
                spellings.insert(spelling, idx);
                max_len = max_len.max(spelling.chars().count());
            }
        }
        RomanTable {
            scheme,
            column,
            spellings,
            max_len,
        }
    }

    /// Split `text` into letters by longest match. Whitespace passes
    /// through; anything else that matches no spelling is an error.
    pub fn parse(&self, text: &str) -> Result<Vec<Piece>, ConversionError> {
        let bounds = char_bounds(text);
        let char_count = bounds.len() - 1;
        let mut pieces = Vec::with_capacity(char_count);
        let mut pos = 0;

        while pos < char_count {
            let longest = self.max_len.min(char_count - pos);
            let hit = (1..=longest).rev().find_map(|len| {
                self.spellings
                    .get(&text[bounds[pos]..bounds[pos + len]])
                    .map(|&idx| (idx, len))
            });
            if let Some((idx, len)) = hit {
                pieces.push(Piece::Letter(idx));
                pos += len;
                continue;
            }

            let ch = text[bounds[pos]..].chars().next().unwrap_or_default();
            if !ch.is_whitespace() {
                return Err(ConversionError::UndefinedCharacter {
                    scheme: self.scheme,
                    offset: pos,
                    ch,
                });
            }
            pieces.push(Piece::Literal(ch));
            pos += 1;
        }
        Ok(pieces)
    }

    pub fn render(&self, pieces: &[Piece]) -> Result<String, ConversionError> {
        let mut out = String::with_capacity(pieces.len() * 2);
        for piece in pieces {
            match *piece {
                Piece::Literal(ch) => out.push(ch),
                Piece::Letter(idx) => self.spell(&LETTERS[idx], &mut out)?,
            }
        }
        Ok(out)
    }

    fn spell(&self, letter: &Letter, out: &mut String) -> Result<(), ConversionError> {
        if let Some(spelling) = letter.roman[self.column].first() {
            out.push_str(spelling);
            return Ok(());
        }
        let unrepresentable = ConversionError::Unrepresentable {
            scheme: self.scheme,
            letter: letter.name,
        };
        if letter.decompose.is_empty() {
            return Err(unrepresentable);
        }
        for part in letter.decompose {
            let spelling = LETTERS
                .iter()
                .find(|l| l.name == *part)
                .and_then(|l| l.roman[self.column].first())
                .ok_or_else(|| unrepresentable.clone())?;
            out.push_str(spelling);
        }
        Ok(())
    }
}
