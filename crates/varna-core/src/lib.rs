//! Sanskrit phoneme segmentation and chakra classification.
//!
//! The pipeline is: transliterate the caller's input into ITRANS
//! ([`translit`]), split it into onset and nucleus phonemes by greedy
//! longest match ([`tokenizer`], [`symbols`]), then classify and tally each
//! phoneme ([`chakra`]). [`analysis`] wires the steps together at the caller
//! boundary.

pub mod analysis;
pub mod chakra;
pub mod symbols;
pub mod tokenizer;
pub mod translit;
