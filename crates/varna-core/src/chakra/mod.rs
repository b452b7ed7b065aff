//! Chakra classification of scanned phonemes.
//!
//! The onset map, the counted-vowel set and the descriptive profiles are
//! immutable configuration loaded from TOML, following the same OnceLock
//! pattern as the symbol tables. Callers may also build a [`ChakraMap`]
//! from custom TOML and pass it around explicitly.

mod config;
mod devas;
mod tally;

pub use config::{parse_chakras_toml, ChakraConfigError};
pub use devas::{Deva, DevaSeat};
pub use tally::{ChakraTally, Dominance};

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::tokenizer::{Token, TokenKind};

pub const DEFAULT_CHAKRAS_TOML: &str = include_str!("default_chakras.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default chakra TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_CHAKRAS_TOML
}

/// The six tallied chakras, in table order.
///
/// The declaration order is observable: co-dominant chakras are reported
/// in this order, never in count or encounter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Chakra {
    Muladhara,
    Svadhisthana,
    Manipura,
    Anahata,
    Vishuddha,
    Ajna,
}

impl Chakra {
    pub const ALL: [Chakra; 6] = [
        Chakra::Muladhara,
        Chakra::Svadhisthana,
        Chakra::Manipura,
        Chakra::Anahata,
        Chakra::Vishuddha,
        Chakra::Ajna,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Chakra::Muladhara => "Muladhara",
            Chakra::Svadhisthana => "Svadhisthana",
            Chakra::Manipura => "Manipura",
            Chakra::Anahata => "Anahata",
            Chakra::Vishuddha => "Vishuddha",
            Chakra::Ajna => "Ajna",
        }
    }
}

impl fmt::Display for Chakra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chakra name: {0}")]
pub struct UnknownChakra(pub String);

impl FromStr for Chakra {
    type Err = UnknownChakra;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chakra::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownChakra(s.to_string()))
    }
}

/// A tally bucket: one of the six chakras, or the vowel aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Chakra(Chakra),
    Vowels,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Chakra(c) => c.name(),
            Category::Vowels => "Vishuddha (Vowels)",
        }
    }

    /// The chakra a bucket is attributed to; vowels activate Vishuddha.
    pub fn chakra(&self) -> Chakra {
        match self {
            Category::Chakra(c) => *c,
            Category::Vowels => Chakra::Vishuddha,
        }
    }
}

/// Descriptive attributes of a chakra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChakraProfile {
    pub bhava: String,
    pub rasa: String,
    pub element: String,
    pub color: String,
    pub description: String,
}

/// Outcome of classifying one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum Classification {
    /// An onset whose `key` (onset text plus "a") is in the map. `folded`
    /// is set when only the lowercased key matched.
    Onset {
        key: String,
        chakra: Chakra,
        folded: bool,
    },
    /// A nucleus counted towards the vowel aggregate.
    Vowel { text: String },
    /// A token with no entry in the map.
    Unclassified { text: String, kind: TokenKind },
}

impl Classification {
    pub fn category(&self) -> Option<Category> {
        match self {
            Classification::Onset { chakra, .. } => Some(Category::Chakra(*chakra)),
            Classification::Vowel { .. } => Some(Category::Vowels),
            Classification::Unclassified { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChakraMap {
    onsets: HashMap<String, Chakra>,
    vowels: HashSet<String>,
    /// Indexed by `Chakra::index()`.
    profiles: Vec<ChakraProfile>,
    devas: Vec<Deva>,
}

impl ChakraMap {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), ChakraConfigError> {
        // Validate eagerly
        parse_chakras_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ChakraConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ChakraMap {
        static INSTANCE: OnceLock<ChakraMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_CHAKRAS_TOML);
            parse_chakras_toml(toml_str).expect("chakra TOML must be valid")
        })
    }

    pub fn onset_count(&self) -> usize {
        self.onsets.len()
    }

    pub fn onset_chakra(&self, key: &str) -> Option<Chakra> {
        self.onsets.get(key).copied()
    }

    pub fn vowel_count(&self) -> usize {
        self.vowels.len()
    }

    pub fn is_counted_vowel(&self, text: &str) -> bool {
        self.vowels.contains(text)
    }

    pub fn profile(&self, chakra: Chakra) -> &ChakraProfile {
        &self.profiles[chakra.index()]
    }

    /// Every deva, in table order.
    pub fn devas(&self) -> &[Deva] {
        &self.devas
    }

    /// Devas seated at `chakra` plus those seated at every chakra, in
    /// table order.
    pub fn devas_for(&self, chakra: Chakra) -> Vec<&Deva> {
        self.devas.iter().filter(|d| d.seat.matches(chakra)).collect()
    }

    /// Onset keys mapped to `chakra`, sorted.
    pub fn keys_for(&self, chakra: Chakra) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .onsets
            .iter()
            .filter(|(_, c)| **c == chakra)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn classify(&self, token: &Token) -> Classification {
        match token.kind {
            TokenKind::Onset => self.classify_onset(&token.text),
            TokenKind::Nucleus if self.is_counted_vowel(&token.text) => Classification::Vowel {
                text: token.text.clone(),
            },
            TokenKind::Nucleus => Classification::Unclassified {
                text: token.text.clone(),
                kind: TokenKind::Nucleus,
            },
        }
    }

    fn classify_onset(&self, text: &str) -> Classification {
        let key = format!("{text}a");
        if let Some(chakra) = self.onset_chakra(&key) {
            return Classification::Onset {
                key,
                chakra,
                folded: false,
            };
        }

        let folded = format!("{}a", text.to_lowercase());
        if folded != key {
            if let Some(chakra) = self.onset_chakra(&folded) {
                return Classification::Onset {
                    key: folded,
                    chakra,
                    folded: true,
                };
            }
        }

        Classification::Unclassified {
            text: text.to_string(),
            kind: TokenKind::Onset,
        }
    }

    /// Classify every token, preserving emission order.
    pub fn classify_all(&self, tokens: &[Token]) -> Vec<Classification> {
        let _span = debug_span!("classify", tokens = tokens.len()).entered();
        let classes: Vec<Classification> = tokens.iter().map(|t| self.classify(t)).collect();
        debug!(
            unclassified = classes
                .iter()
                .filter(|c| c.category().is_none())
                .count()
        );
        classes
    }
}
