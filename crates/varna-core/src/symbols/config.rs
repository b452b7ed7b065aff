use serde::Deserialize;

use super::{SymbolRole, SymbolTables};

#[derive(Deserialize)]
struct SymbolConfig {
    onsets: Vec<String>,
    nuclei: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SymbolConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("{0} table is empty")]
    Empty(SymbolRole),
    #[error("{0} table contains an empty entry")]
    EmptyEntry(SymbolRole),
    #[error("duplicate {role} entry: {entry}")]
    Duplicate { role: SymbolRole, entry: String },
    #[error("{role} entry {entry:?} is longer than {max} chars")]
    TooLong {
        role: SymbolRole,
        entry: String,
        max: usize,
    },
    #[error("entry {0:?} appears in both the onset and nucleus tables")]
    Overlap(String),
    #[error("symbol tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text with top-level `onsets` and `nuclei` arrays into
/// validated symbol tables.
pub fn parse_symbols_toml(toml_str: &str) -> Result<SymbolTables, SymbolConfigError> {
    let config: SymbolConfig =
        toml::from_str(toml_str).map_err(|e| SymbolConfigError::Parse(e.to_string()))?;
    SymbolTables::new(config.onsets, config.nuclei)
}
