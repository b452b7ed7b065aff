//! Onset and nucleus symbol tables.
//!
//! - `SymbolTables::init_custom(toml_content)` sets custom tables before the first `global()` call
//! - `SymbolTables::global()` returns `&'static SymbolTables` (lazy-init singleton)
//! - Default tables are embedded via `include_str!("default_symbols.toml")`

mod config;

pub use config::{parse_symbols_toml, SymbolConfigError};

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

pub const DEFAULT_SYMBOLS_TOML: &str = include_str!("default_symbols.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default symbol TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SYMBOLS_TOML
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolRole {
    Onset,
    Nucleus,
}

impl SymbolRole {
    /// Longest candidate (in chars) tried at a position.
    pub const fn max_len(self) -> usize {
        match self {
            SymbolRole::Onset => 3,
            SymbolRole::Nucleus => 4,
        }
    }
}

impl fmt::Display for SymbolRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolRole::Onset => f.write_str("onset"),
            SymbolRole::Nucleus => f.write_str("nucleus"),
        }
    }
}

/// An ordered set of surface forms for one role.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    role: SymbolRole,
    entries: Vec<String>,
    index: HashSet<String>,
}

impl SymbolTable {
    pub fn new<I, S>(role: SymbolRole, entries: I) -> Result<Self, SymbolConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = SymbolTable {
            role,
            entries: Vec::new(),
            index: HashSet::new(),
        };
        for entry in entries {
            let entry: String = entry.into();
            if entry.is_empty() {
                return Err(SymbolConfigError::EmptyEntry(role));
            }
            if entry.chars().count() > role.max_len() {
                return Err(SymbolConfigError::TooLong {
                    role,
                    entry,
                    max: role.max_len(),
                });
            }
            if !table.index.insert(entry.clone()) {
                return Err(SymbolConfigError::Duplicate { role, entry });
            }
            table.entries.push(entry);
        }
        if table.entries.is_empty() {
            return Err(SymbolConfigError::Empty(role));
        }
        Ok(table)
    }

    pub fn role(&self) -> SymbolRole {
        self.role
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains(symbol)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Length in chars of the longest entry that starts at char position
    /// `pos`, trying `max_len..=1` in that order.
    ///
    /// `bounds` holds the byte offset of every char boundary of `input`,
    /// including `input.len()` (see [`char_bounds`]). The first length whose
    /// substring is an exact entry wins; no alternative of the same length
    /// is ever considered and earlier decisions are never revisited.
    pub fn longest_match(&self, input: &str, bounds: &[usize], pos: usize) -> Option<usize> {
        let remaining = bounds.len().saturating_sub(pos + 1);
        let longest = self.role.max_len().min(remaining);
        (1..=longest)
            .rev()
            .find(|&len| self.contains(&input[bounds[pos]..bounds[pos + len]]))
    }
}

/// Byte offsets of every char boundary in `input`, ending with `input.len()`.
pub fn char_bounds(input: &str) -> Vec<usize> {
    input
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(input.len()))
        .collect()
}

/// The onset and nucleus tables used by the tokenizer.
#[derive(Debug, Clone)]
pub struct SymbolTables {
    onsets: SymbolTable,
    nuclei: SymbolTable,
}

impl SymbolTables {
    pub fn new<I, J, S, T>(onsets: I, nuclei: J) -> Result<Self, SymbolConfigError>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let onsets = SymbolTable::new(SymbolRole::Onset, onsets)?;
        let nuclei = SymbolTable::new(SymbolRole::Nucleus, nuclei)?;
        if let Some(shared) = onsets.iter().find(|e| nuclei.contains(e)) {
            return Err(SymbolConfigError::Overlap(shared.to_string()));
        }
        Ok(SymbolTables { onsets, nuclei })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), SymbolConfigError> {
        // Validate eagerly
        parse_symbols_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| SymbolConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static SymbolTables {
        static INSTANCE: OnceLock<SymbolTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_SYMBOLS_TOML);
            parse_symbols_toml(toml_str).expect("symbol TOML must be valid")
        })
    }

    pub fn onsets(&self) -> &SymbolTable {
        &self.onsets
    }

    pub fn nuclei(&self) -> &SymbolTable {
        &self.nuclei
    }
}
