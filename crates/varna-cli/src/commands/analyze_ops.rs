use std::fmt::Write;

use serde::Serialize;

use varna_core::analysis::{self, Analysis};
use varna_core::chakra::{Chakra, ChakraMap, Classification, Deva, Dominance};
use varna_core::translit::{Scheme, SchemeConverter, Transliterate};

use super::CommandError;

pub fn analyze_cmd(text: &str, scheme: Scheme, json: bool) -> Result<(), CommandError> {
    let analysis = analysis::analyze(text, scheme)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", format_analysis(&analysis, ChakraMap::global()));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TranslitOutput<'a> {
    pub input: &'a str,
    pub from: Scheme,
    pub to: Scheme,
    pub output: String,
}

pub fn translit_cmd(text: &str, from: Scheme, to: Scheme, json: bool) -> Result<(), CommandError> {
    let output = SchemeConverter::global().transliterate(text, from, to)?;
    if json {
        let record = TranslitOutput {
            input: text,
            from,
            to,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{output}");
    }
    Ok(())
}

/// List devas, optionally only those associated with one chakra.
pub fn devas_cmd(chakra: Option<&str>, json: bool) -> Result<(), CommandError> {
    let map = ChakraMap::global();
    let devas: Vec<&Deva> = match chakra {
        Some(name) => map.devas_for(name.parse::<Chakra>()?),
        None => map.devas().iter().collect(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&devas)?);
    } else {
        print!("{}", format_devas(&devas));
    }
    Ok(())
}

pub fn format_devas(devas: &[&Deva]) -> String {
    let mut out = String::new();
    for d in devas {
        let _ = writeln!(out, "{:<14} {:<8} {:<13} {}", d.name, d.kind, d.seat, d.element);
        if let Some(bija) = &d.bija {
            let _ = writeln!(out, "  bija:   {bija}");
        }
        if let Some(vahana) = &d.vahana {
            let _ = writeln!(out, "  vahana: {vahana}");
        }
    }
    let _ = writeln!(out, "{} devas", devas.len());
    out
}

/// Human-readable report for one analysis.
pub fn format_analysis(analysis: &Analysis, chakras: &ChakraMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Devanagari: {}", analysis.devanagari);
    let _ = writeln!(out, "ITRANS:     {}", analysis.itrans);

    if analysis.is_empty() {
        let _ = writeln!(out, "No recognizable phonemes in input.");
        return out;
    }

    let tokens: Vec<&str> = analysis
        .scan
        .tokens()
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    let _ = writeln!(
        out,
        "Tokens:     {} ({} skipped)",
        tokens.join(" "),
        analysis.scan.skipped()
    );
    let _ = writeln!(out);

    match &analysis.dominance {
        Dominance::Consonantal { chakras: top, count } => {
            let Some(&primary) = top.first() else {
                return out;
            };
            let _ = writeln!(
                out,
                "Dominant chakra: {} ({} letters: {})",
                primary,
                count,
                analysis.activating_letters(primary).join(", ")
            );
            write_profile(&mut out, chakras, primary);
            for other in analysis.dominance.secondary() {
                let _ = writeln!(
                    out,
                    "Co-dominant:     {} ({})",
                    other,
                    analysis.activating_letters(*other).join(", ")
                );
            }
        }
        Dominance::VowelsOnly { vowels } => {
            let _ = writeln!(out, "Dominant chakra: Vishuddha ({vowels} vowels, no onsets)");
            if let Some(primary) = analysis.dominant() {
                write_profile(&mut out, chakras, primary);
            }
        }
        Dominance::Silent => {
            let _ = writeln!(out, "Dominant chakra: none");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Distribution:");
    for (category, count) in analysis.tally.distribution() {
        let _ = writeln!(out, "  {:<20} {}", category.label(), count);
    }

    let unclassified: Vec<&str> = analysis
        .classifications
        .iter()
        .filter_map(|c| match c {
            Classification::Unclassified { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    if !unclassified.is_empty() {
        let _ = writeln!(out, "Unclassified: {}", unclassified.join(" "));
    }
    out
}

fn write_profile(out: &mut String, chakras: &ChakraMap, chakra: Chakra) {
    let profile = chakras.profile(chakra);
    let _ = writeln!(out, "  Bhava:   {}", profile.bhava);
    let _ = writeln!(out, "  Rasa:    {}", profile.rasa);
    let _ = writeln!(out, "  Element: {}", profile.element);
    let devas: Vec<String> = chakras
        .devas_for(chakra)
        .iter()
        .map(|d| match &d.vahana {
            Some(vahana) => format!("{} ({}, on {})", d.name, d.kind, vahana),
            None => format!("{} ({})", d.name, d.kind),
        })
        .collect();
    if !devas.is_empty() {
        let _ = writeln!(out, "  Devas:   {}", devas.join("; "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str, scheme: Scheme) -> String {
        let a = analysis::analyze(text, scheme).unwrap();
        format_analysis(&a, ChakraMap::global())
    }

    #[test]
    fn test_report_for_rama() {
        let out = report("rAma", Scheme::Itrans);
        assert!(out.contains("Devanagari: राम"));
        assert!(out.contains("Dominant chakra: Svadhisthana (2 letters: ra, ma)"));
        assert!(out.contains("Element: Water"));
        assert!(out.contains("Unclassified: A"));
        assert!(out.contains("Vishuddha (Vowels)"));
    }

    #[test]
    fn test_report_lists_co_dominants() {
        let out = report("kRSNa", Scheme::HarvardKyoto);
        assert!(out.contains("Dominant chakra: Muladhara"));
        assert!(out.contains("Co-dominant:     Manipura"));
        assert!(out.contains("Co-dominant:     Anahata"));
    }

    #[test]
    fn test_report_names_devas_of_dominant_chakra() {
        let out = report("rAma", Scheme::Itrans);
        let line = out.lines().find(|l| l.trim_start().starts_with("Devas:")).unwrap();
        assert!(line.contains("Bhaga"));
        assert!(line.contains("Viṣṇu"));
        assert!(!line.contains("Nāsatya"));
    }

    #[test]
    fn test_report_empty_input() {
        let out = report("  ", Scheme::Itrans);
        assert!(out.contains("No recognizable phonemes"));
        assert!(!out.contains("Distribution"));
    }

    #[test]
    fn test_format_devas_for_ajna() {
        let map = ChakraMap::global();
        let devas = map.devas_for(Chakra::Ajna);
        let out = format_devas(&devas);
        assert!(out.contains("Viṣṇu"));
        assert!(out.ends_with(&format!("{} devas\n", devas.len())));
        assert!(devas.iter().all(|d| d.seat.matches(Chakra::Ajna)));
    }

    #[test]
    fn test_unknown_chakra_name_is_an_error() {
        let err = devas_cmd(Some("Crown"), false).unwrap_err();
        assert!(matches!(err, CommandError::Chakra(_)));
    }

    #[test]
    fn test_translit_error_is_returned() {
        let err = translit_cmd("rAma!", Scheme::Itrans, Scheme::Devanagari, false).unwrap_err();
        assert!(matches!(err, CommandError::Conversion(_)));
    }

    #[test]
    fn test_translit_output_serializes() {
        let record = TranslitOutput {
            input: "rAma",
            from: Scheme::Itrans,
            to: Scheme::Devanagari,
            output: "राम".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["from"], "itrans");
        assert_eq!(json["output"], "राम");
    }
}
