use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;

use super::devas::DevaEntry;
use super::{Chakra, ChakraMap, ChakraProfile, Deva, DevaSeat};

#[derive(Deserialize)]
struct ChakraConfig {
    vowels: Vec<String>,
    onsets: BTreeMap<String, String>,
    profiles: BTreeMap<String, ChakraProfile>,
    #[serde(default)]
    devas: Vec<DevaEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChakraConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[onsets] table is empty")]
    Empty,
    #[error("empty key in [onsets]")]
    EmptyKey,
    #[error("unknown chakra: {0}")]
    UnknownChakra(String),
    #[error("missing profile for {0}")]
    MissingProfile(Chakra),
    #[error("empty entry in vowels")]
    EmptyVowel,
    #[error("duplicate vowel: {0}")]
    DuplicateVowel(String),
    #[error("deva #{0} has an empty name")]
    EmptyDevaName(usize),
    #[error("unknown seat for deva {deva}: {seat}")]
    UnknownDevaSeat { deva: String, seat: String },
    #[error("chakra map already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated [`ChakraMap`].
pub fn parse_chakras_toml(toml_str: &str) -> Result<ChakraMap, ChakraConfigError> {
    let config: ChakraConfig =
        toml::from_str(toml_str).map_err(|e| ChakraConfigError::Parse(e.to_string()))?;

    if config.onsets.is_empty() {
        return Err(ChakraConfigError::Empty);
    }

    let mut onsets = HashMap::with_capacity(config.onsets.len());
    for (key, name) in config.onsets {
        if key.is_empty() {
            return Err(ChakraConfigError::EmptyKey);
        }
        let chakra = name
            .parse::<Chakra>()
            .map_err(|_| ChakraConfigError::UnknownChakra(name))?;
        onsets.insert(key, chakra);
    }

    let mut vowels = HashSet::with_capacity(config.vowels.len());
    for vowel in config.vowels {
        if vowel.is_empty() {
            return Err(ChakraConfigError::EmptyVowel);
        }
        if vowels.contains(&vowel) {
            return Err(ChakraConfigError::DuplicateVowel(vowel));
        }
        vowels.insert(vowel);
    }

    let mut raw_profiles = HashMap::with_capacity(config.profiles.len());
    for (name, profile) in config.profiles {
        let chakra = name
            .parse::<Chakra>()
            .map_err(|_| ChakraConfigError::UnknownChakra(name))?;
        raw_profiles.insert(chakra, profile);
    }
    let profiles = Chakra::ALL
        .iter()
        .map(|c| {
            raw_profiles
                .remove(c)
                .ok_or(ChakraConfigError::MissingProfile(*c))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let devas = config
        .devas
        .into_iter()
        .enumerate()
        .map(|(i, entry)| parse_deva(i, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChakraMap {
        onsets,
        vowels,
        profiles,
        devas,
    })
}

fn parse_deva(index: usize, entry: DevaEntry) -> Result<Deva, ChakraConfigError> {
    if entry.name.is_empty() {
        return Err(ChakraConfigError::EmptyDevaName(index));
    }
    let seat = match entry.chakra.parse::<DevaSeat>() {
        Ok(seat) => seat,
        Err(_) => {
            return Err(ChakraConfigError::UnknownDevaSeat {
                deva: entry.name,
                seat: entry.chakra,
            })
        }
    };
    Ok(Deva {
        name: entry.name,
        kind: entry.kind,
        seat,
        element: entry.element,
        vahana: entry.vahana,
        bija: entry.bija,
        description: entry.description,
        vahana_symbolism: entry.vahana_symbolism,
    })
}
