use varna_core::analysis::AnalysisError;
use varna_core::chakra::UnknownChakra;
use varna_core::translit::ConversionError;

pub mod analyze_ops;
pub mod config_ops;
pub mod scan_ops;

use config_ops::ConfigFileError;

/// Why a subcommand failed. `main` reports it after the trace writer has
/// been flushed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("loading custom tables: {0}")]
    Install(ConfigFileError),
    #[error(transparent)]
    Config(#[from] ConfigFileError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Chakra(#[from] UnknownChakra),
    #[error("serializing output: {0}")]
    Json(#[from] serde_json::Error),
}
