use serde::Serialize;

use super::{Category, Chakra, Classification};

/// Per-chakra counts over one scanned string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChakraTally {
    counts: [usize; 6],
    vowels: usize,
    /// Activating letters as (key, chakra), in emission order.
    letters: Vec<(String, Chakra)>,
    unclassified: Vec<String>,
}

/// Which chakra(s) dominate a tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dominance {
    /// Every chakra sharing the highest positive onset count, in
    /// declaration order. The first is the primary chakra.
    Consonantal { chakras: Vec<Chakra>, count: usize },
    /// No classified onset, but counted vowels: Vishuddha by default.
    VowelsOnly { vowels: usize },
    /// Nothing was classified.
    Silent,
}

impl Dominance {
    pub fn primary(&self) -> Option<Chakra> {
        match self {
            Dominance::Consonantal { chakras, .. } => chakras.first().copied(),
            Dominance::VowelsOnly { .. } => Some(Chakra::Vishuddha),
            Dominance::Silent => None,
        }
    }

    /// Co-dominant chakras after the primary one.
    pub fn secondary(&self) -> &[Chakra] {
        match self {
            Dominance::Consonantal { chakras, .. } if chakras.len() > 1 => &chakras[1..],
            _ => &[],
        }
    }

    pub fn is_tie(&self) -> bool {
        !self.secondary().is_empty()
    }
}

impl ChakraTally {
    pub fn from_classifications<'c, I>(classes: I) -> Self
    where
        I: IntoIterator<Item = &'c Classification>,
    {
        let mut tally = ChakraTally::default();
        for class in classes {
            match class {
                Classification::Onset { key, chakra, .. } => {
                    tally.counts[chakra.index()] += 1;
                    tally.letters.push((key.clone(), *chakra));
                }
                Classification::Vowel { .. } => tally.vowels += 1,
                Classification::Unclassified { text, .. } => {
                    tally.unclassified.push(text.clone());
                }
            }
        }
        tally
    }

    pub fn count(&self, chakra: Chakra) -> usize {
        self.counts[chakra.index()]
    }

    pub fn vowel_count(&self) -> usize {
        self.vowels
    }

    pub fn onset_total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn letters(&self) -> &[(String, Chakra)] {
        &self.letters
    }

    /// Keys that activated `chakra`, in emission order.
    pub fn letters_for(&self, chakra: Chakra) -> Vec<&str> {
        self.letters
            .iter()
            .filter(|(_, c)| *c == chakra)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn unclassified(&self) -> &[String] {
        &self.unclassified
    }

    /// True when neither a chakra onset nor a counted vowel was seen.
    pub fn is_silent(&self) -> bool {
        self.onset_total() == 0 && self.vowels == 0
    }

    /// The six chakra rows followed by the vowel aggregate row.
    pub fn distribution(&self) -> Vec<(Category, usize)> {
        Chakra::ALL
            .iter()
            .map(|&c| (Category::Chakra(c), self.count(c)))
            .chain(std::iter::once((Category::Vowels, self.vowels)))
            .collect()
    }

    pub fn dominance(&self) -> Dominance {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max > 0 {
            let chakras = Chakra::ALL
                .iter()
                .copied()
                .filter(|&c| self.count(c) == max)
                .collect();
            return Dominance::Consonantal { chakras, count: max };
        }
        if self.vowels > 0 {
            Dominance::VowelsOnly {
                vowels: self.vowels,
            }
        } else {
            Dominance::Silent
        }
    }
}
