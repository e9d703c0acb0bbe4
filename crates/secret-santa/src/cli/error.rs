//! Error types for the secret-santa command line.

use thiserror::Error;

use crate::error::{GenerationError, OutputError, RosterError};

/// Errors surfaced by argument parsing and the run flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The command-line arguments were rejected.
    #[error("{message}")]
    InvalidArguments {
        /// Usage error rendered by the argument parser.
        message: String,
    },
    /// Settings could not be loaded from the environment or config file.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Description of the configuration error.
        message: String,
    },
    /// A roster file could not be read or parsed.
    #[error("{source}")]
    Roster {
        /// Underlying roster error.
        #[from]
        #[source]
        source: RosterError,
    },
    /// No assignment could be produced for the roster.
    #[error("{source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
    /// The output file could not be written.
    #[error("{source}")]
    Output {
        /// Underlying output error.
        #[from]
        #[source]
        source: OutputError,
    },
}
