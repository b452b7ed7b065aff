//! Greedy longest-match phoneme tokenizer over ITRANS text.

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::symbols::{char_bounds, SymbolTable, SymbolTables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Onset,
    Nucleus,
}

/// A matched phoneme. `offset` and `len` are counted in chars of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub offset: usize,
    pub len: usize,
}

impl Token {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Tokens in input order plus the number of chars that matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    tokens: Vec<Token>,
    skipped: usize,
}

impl ScanResult {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// True when no phoneme was recognised at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Chars covered by tokens; `covered_len() + skipped()` is the input length.
    pub fn covered_len(&self) -> usize {
        self.tokens.iter().map(|t| t.len).sum()
    }

    pub fn onsets(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Onset)
    }

    pub fn nuclei(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Nucleus)
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Splits ITRANS text into onset and nucleus tokens.
///
/// Holds only borrowed, immutable tables, so one tokenizer can be shared
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct PhonemeTokenizer<'a> {
    onsets: &'a SymbolTable,
    nuclei: &'a SymbolTable,
}

impl<'a> PhonemeTokenizer<'a> {
    pub fn new(tables: &'a SymbolTables) -> Self {
        PhonemeTokenizer {
            onsets: tables.onsets(),
            nuclei: tables.nuclei(),
        }
    }

    /// Scan `input` left to right.
    ///
    /// At each position an onset is tried first; after an onset a nucleus
    /// may follow immediately. A missing nucleus after an onset is left
    /// unrepresented (no implicit vowel token). Without an onset a bare
    /// nucleus is tried, and if that fails one char is skipped and counted.
    pub fn scan(&self, input: &str) -> ScanResult {
        let bounds = char_bounds(input);
        let char_count = bounds.len() - 1;
        let _span = debug_span!("scan", char_count).entered();

        let mut tokens = Vec::new();
        let mut skipped = 0;
        let mut pos = 0;

        while pos < char_count {
            if let Some(len) = self.onsets.longest_match(input, &bounds, pos) {
                tokens.push(make_token(input, &bounds, pos, len, TokenKind::Onset));
                pos += len;
                if let Some(len) = self.nuclei.longest_match(input, &bounds, pos) {
                    tokens.push(make_token(input, &bounds, pos, len, TokenKind::Nucleus));
                    pos += len;
                }
                continue;
            }

            if let Some(len) = self.nuclei.longest_match(input, &bounds, pos) {
                tokens.push(make_token(input, &bounds, pos, len, TokenKind::Nucleus));
                pos += len;
                continue;
            }

            skipped += 1;
            pos += 1;
        }

        debug!(tokens = tokens.len(), skipped);
        ScanResult { tokens, skipped }
    }
}

fn make_token(input: &str, bounds: &[usize], pos: usize, len: usize, kind: TokenKind) -> Token {
    Token {
        text: input[bounds[pos]..bounds[pos + len]].to_string(),
        kind,
        offset: pos,
        len,
    }
}

/// Scan `input` with the global symbol tables.
pub fn scan(input: &str) -> ScanResult {
    PhonemeTokenizer::new(SymbolTables::global()).scan(input)
}
