//! Conversion between Sanskrit romanization schemes and Devanagari.
//!
//! The tokenizer only reads ITRANS; everything else is brought into ITRANS
//! through a [`Transliterate`] implementation before scanning.
//! [`SchemeConverter`] is the built-in one: every scheme is parsed into a
//! shared letter inventory and rendered back out of it.

mod devanagari;
mod letters;
mod roman;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use devanagari::DevanagariTable;
use roman::RomanTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Itrans,
    HarvardKyoto,
    Slp1,
    Velthuis,
    Wx,
    Devanagari,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::Itrans,
        Scheme::HarvardKyoto,
        Scheme::Slp1,
        Scheme::Velthuis,
        Scheme::Wx,
        Scheme::Devanagari,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Scheme::Itrans => "ITRANS",
            Scheme::HarvardKyoto => "Harvard-Kyoto",
            Scheme::Slp1 => "SLP1",
            Scheme::Velthuis => "Velthuis",
            Scheme::Wx => "WX",
            Scheme::Devanagari => "Devanagari",
        }
    }

    /// Short identifier accepted on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Scheme::Itrans => "itrans",
            Scheme::HarvardKyoto => "hk",
            Scheme::Slp1 => "slp1",
            Scheme::Velthuis => "velthuis",
            Scheme::Wx => "wx",
            Scheme::Devanagari => "devanagari",
        }
    }

    pub const fn is_roman(self) -> bool {
        !matches!(self, Scheme::Devanagari)
    }

    const fn roman_index(self) -> Option<usize> {
        match self {
            Scheme::Itrans => Some(0),
            Scheme::HarvardKyoto => Some(1),
            Scheme::Slp1 => Some(2),
            Scheme::Velthuis => Some(3),
            Scheme::Wx => Some(4),
            Scheme::Devanagari => None,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheme: {0} (expected one of itrans, hk, slp1, velthuis, wx, devanagari)")]
pub struct UnknownScheme(pub String);

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.id() == lower || scheme.name().to_ascii_lowercase() == lower)
            .ok_or_else(|| UnknownScheme(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("{ch:?} at offset {offset} is not defined in {scheme}")]
    UndefinedCharacter {
        scheme: Scheme,
        offset: usize,
        ch: char,
    },
    #[error("{letter} cannot be written in {scheme}")]
    Unrepresentable { scheme: Scheme, letter: &'static str },
}

/// Converts text between schemes.
pub trait Transliterate {
    fn transliterate(&self, text: &str, from: Scheme, to: Scheme)
        -> Result<String, ConversionError>;
}

/// One parsed unit: an inventory letter (index into the letter table) or a
/// literal passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece {
    Letter(usize),
    Literal(char),
}

/// Table-driven converter over the built-in letter inventory.
pub struct SchemeConverter {
    roman: Vec<RomanTable>,
    devanagari: DevanagariTable,
}

impl SchemeConverter {
    pub fn new() -> Self {
        let roman = Scheme::ALL
            .iter()
            .filter_map(|&s| s.roman_index().map(|col| RomanTable::new(s, col)))
            .collect();
        SchemeConverter {
            roman,
            devanagari: DevanagariTable::new(),
        }
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static SchemeConverter {
        static INSTANCE: OnceLock<SchemeConverter> = OnceLock::new();
        INSTANCE.get_or_init(SchemeConverter::new)
    }

    fn parse(&self, text: &str, scheme: Scheme) -> Result<Vec<Piece>, ConversionError> {
        match scheme.roman_index() {
            Some(col) => self.roman[col].parse(text),
            None => self.devanagari.parse(text),
        }
    }

    fn render(&self, pieces: &[Piece], scheme: Scheme) -> Result<String, ConversionError> {
        match scheme.roman_index() {
            Some(col) => self.roman[col].render(pieces),
            None => Ok(self.devanagari.render(pieces)),
        }
    }
}

impl Default for SchemeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterate for SchemeConverter {
    fn transliterate(
        &self,
        text: &str,
        from: Scheme,
        to: Scheme,
    ) -> Result<String, ConversionError> {
        let _span = debug_span!("transliterate", from = from.id(), to = to.id()).entered();
        let pieces = self.parse(text, from)?;
        let out = self.render(&pieces, to)?;
        debug!(pieces = pieces.len(), out_len = out.len());
        Ok(out)
    }
}

impl<T: Transliterate + ?Sized> Transliterate for &T {
    fn transliterate(
        &self,
        text: &str,
        from: Scheme,
        to: Scheme,
    ) -> Result<String, ConversionError> {
        (**self).transliterate(text, from, to)
    }
}
