//! End-to-end analysis of a name or phrase.
//!
//! Conversion failures are returned before any tokenization happens. A
//! result with zero tokens is not an error: callers check
//! [`Analysis::is_empty`] and report "no recognizable phonemes".

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::chakra::{Chakra, ChakraMap, ChakraProfile, Deva, ChakraTally, Classification, Dominance};
use crate::symbols::SymbolTables;
use crate::tokenizer::{PhonemeTokenizer, ScanResult};
use crate::translit::{ConversionError, Scheme, SchemeConverter, Transliterate};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("input contains no Devanagari characters")]
    NotDevanagari,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub input: String,
    pub scheme: Scheme,
    /// Display form of the input.
    pub devanagari: String,
    /// Tokenizer input.
    pub itrans: String,
    pub scan: ScanResult,
    /// One entry per token, in token order.
    pub classifications: Vec<Classification>,
    pub tally: ChakraTally,
    pub dominance: Dominance,
}

impl Analysis {
    /// True when every char was skipped.
    pub fn is_empty(&self) -> bool {
        self.scan.is_empty()
    }

    pub fn dominant(&self) -> Option<Chakra> {
        self.dominance.primary()
    }

    /// Keys that activated `chakra`, in emission order.
    pub fn activating_letters(&self, chakra: Chakra) -> Vec<&str> {
        self.tally.letters_for(chakra)
    }
}

/// Runs transliteration, scanning and classification with injected tables.
pub struct Analyzer<'a, T> {
    translit: T,
    tables: &'a SymbolTables,
    chakras: &'a ChakraMap,
}

impl Analyzer<'static, &'static SchemeConverter> {
    /// Analyzer over the global converter and tables.
    pub fn global() -> Self {
        Analyzer::new(
            SchemeConverter::global(),
            SymbolTables::global(),
            ChakraMap::global(),
        )
    }
}

impl<'a, T: Transliterate> Analyzer<'a, T> {
    pub fn new(translit: T, tables: &'a SymbolTables, chakras: &'a ChakraMap) -> Self {
        Analyzer {
            translit,
            tables,
            chakras,
        }
    }

    pub fn profile(&self, chakra: Chakra) -> &'a ChakraProfile {
        self.chakras.profile(chakra)
    }

    /// Devas seated at `chakra`, universal ones included.
    pub fn devas_for(&self, chakra: Chakra) -> Vec<&'a Deva> {
        self.chakras.devas_for(chakra)
    }

    pub fn analyze(&self, text: &str, scheme: Scheme) -> Result<Analysis, AnalysisError> {
        let _span = debug_span!("analyze", scheme = scheme.id()).entered();

        let (devanagari, itrans) = match scheme {
            Scheme::Devanagari => {
                if !text.chars().any(is_devanagari) {
                    return Err(AnalysisError::NotDevanagari);
                }
                let itrans = self.translit.transliterate(text, scheme, Scheme::Itrans)?;
                (text.to_string(), itrans)
            }
            _ => {
                let devanagari = self
                    .translit
                    .transliterate(text, scheme, Scheme::Devanagari)?;
                let itrans = self.translit.transliterate(text, scheme, Scheme::Itrans)?;
                (devanagari, itrans)
            }
        };

        let scan = PhonemeTokenizer::new(self.tables).scan(&itrans);
        let classifications = self.chakras.classify_all(scan.tokens());
        let tally = ChakraTally::from_classifications(&classifications);
        let dominance = tally.dominance();
        debug!(
            tokens = scan.token_count(),
            skipped = scan.skipped(),
            dominant = ?dominance.primary()
        );

        Ok(Analysis {
            input: text.to_string(),
            scheme,
            devanagari,
            itrans,
            scan,
            classifications,
            tally,
            dominance,
        })
    }
}

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Analyze `text` with the global converter and tables.
pub fn analyze(text: &str, scheme: Scheme) -> Result<Analysis, AnalysisError> {
    Analyzer::global().analyze(text, scheme)
}
