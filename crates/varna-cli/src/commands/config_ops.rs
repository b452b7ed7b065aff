use std::fs;
use std::path::Path;

use varna_core::chakra::{self, ChakraConfigError, ChakraMap};
use varna_core::symbols::{self, SymbolConfigError, SymbolTables};

use super::CommandError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Symbols {
        path: String,
        source: SymbolConfigError,
    },
    #[error("{path}: {source}")]
    Chakras {
        path: String,
        source: ChakraConfigError,
    },
}

fn read_file(path: &Path) -> Result<String, ConfigFileError> {
    fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn read_symbols(path: &Path) -> Result<SymbolTables, ConfigFileError> {
    let content = read_file(path)?;
    symbols::parse_symbols_toml(&content).map_err(|source| ConfigFileError::Symbols {
        path: path.display().to_string(),
        source,
    })
}

pub fn read_chakras(path: &Path) -> Result<ChakraMap, ConfigFileError> {
    let content = read_file(path)?;
    chakra::parse_chakras_toml(&content).map_err(|source| ConfigFileError::Chakras {
        path: path.display().to_string(),
        source,
    })
}

/// Install custom tables as the process-wide ones. Must run before any
/// command reads the global tables.
pub fn install_custom(symbols: Option<&Path>, chakras: Option<&Path>) -> Result<(), ConfigFileError> {
    if let Some(path) = symbols {
        let content = read_file(path)?;
        SymbolTables::init_custom(content).map_err(|source| ConfigFileError::Symbols {
            path: path.display().to_string(),
            source,
        })?;
    }
    if let Some(path) = chakras {
        let content = read_file(path)?;
        ChakraMap::init_custom(content).map_err(|source| ConfigFileError::Chakras {
            path: path.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

pub fn symbols_export() -> Result<(), CommandError> {
    print!("{}", symbols::default_toml());
    Ok(())
}

pub fn symbols_validate(file: &str) -> Result<(), CommandError> {
    let tables = read_symbols(Path::new(file))?;
    println!(
        "OK: {} onsets, {} nuclei",
        tables.onsets().len(),
        tables.nuclei().len()
    );
    Ok(())
}

pub fn chakras_export() -> Result<(), CommandError> {
    print!("{}", chakra::default_toml());
    Ok(())
}

pub fn chakras_validate(file: &str) -> Result<(), CommandError> {
    let map = read_chakras(Path::new(file))?;
    println!(
        "OK: {} onset keys, {} counted vowels, {} devas",
        map.onset_count(),
        map.vowel_count(),
        map.devas().len()
    );
    Ok(())
}
