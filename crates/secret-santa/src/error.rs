//! Error types for the secret-santa crate.
//!
//! Generation failures are expected outcomes of a given roster and ban list,
//! so they are reported as values rather than panics. Roster and output
//! errors cover the file collaborators around the generator.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned by [`generate`](crate::generate) and
/// [`generate_all`](crate::generate_all).
///
/// Both variants carry fixed messages so callers can surface them to an
/// operator verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The participant list named someone more than once.
    #[error("Participants list may not contain duplicates.")]
    DuplicateParticipants,

    /// Every permutation was rejected by the self-pairing or ban rules.
    #[error("No list with valid pairs can be generated.")]
    NoValidAssignment,
}

/// Errors that can occur while reading participants or banned pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster file at '{path}': {message}")]
    Read {
        /// Path to the roster file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A banned-pair line was not of the form `gifter,giftee`.
    #[error("malformed banned pair on line {line}: '{content}'")]
    MalformedBannedPair {
        /// One-based line number within the banned-pairs source.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
}

/// Errors that can occur while writing an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The output path does not name a single file.
    #[error("output path '{path}' must be a file name")]
    InvalidPath {
        /// The rejected path.
        path: Utf8PathBuf,
    },

    /// The output file could not be written.
    #[error("failed to write output file at '{path}': {message}")]
    Write {
        /// Path that was being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_participants_message_is_fixed() {
        assert_eq!(
            GenerationError::DuplicateParticipants.to_string(),
            "Participants list may not contain duplicates."
        );
    }

    #[test]
    fn no_valid_assignment_message_is_fixed() {
        assert_eq!(
            GenerationError::NoValidAssignment.to_string(),
            "No list with valid pairs can be generated."
        );
    }

    #[test]
    fn roster_read_error_formats_correctly() {
        let err = RosterError::Read {
            path: Utf8PathBuf::from("/tmp/people.txt"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read roster file at '/tmp/people.txt': file not found"
        );
    }

    #[test]
    fn malformed_banned_pair_formats_correctly() {
        let err = RosterError::MalformedBannedPair {
            line: 3,
            content: "alice".to_owned(),
        };
        assert_eq!(err.to_string(), "malformed banned pair on line 3: 'alice'");
    }

    #[test]
    fn output_invalid_path_formats_correctly() {
        let err = OutputError::InvalidPath {
            path: Utf8PathBuf::from("nested/.."),
        };
        assert_eq!(err.to_string(), "output path 'nested/..' must be a file name");
    }

    #[test]
    fn output_write_error_formats_correctly() {
        let err = OutputError::Write {
            path: Utf8PathBuf::from("pairs.txt"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write output file at 'pairs.txt': permission denied"
        );
    }
}
