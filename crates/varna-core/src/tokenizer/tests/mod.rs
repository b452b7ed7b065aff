mod basic;

use crate::symbols::SymbolTables;

use super::{ScanResult, Token, TokenKind};

pub(super) fn make_tables(onsets: &[&str], nuclei: &[&str]) -> SymbolTables {
    SymbolTables::new(onsets.iter().copied(), nuclei.iter().copied()).unwrap()
}

pub(super) fn texts(result: &ScanResult) -> Vec<(TokenKind, &str)> {
    result
        .tokens()
        .iter()
        .map(|t: &Token| (t.kind, t.text.as_str()))
        .collect()
}
