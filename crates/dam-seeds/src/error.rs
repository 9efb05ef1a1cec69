//! Error types for the export boundary.
//!
//! The generation core itself is infallible by construction; errors surface
//! only when projecting records to JSON or writing the exported document.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while serializing or exporting seed records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// A record could not be converted to JSON.
    #[error("failed to serialize {kind} records: {message}")]
    Serialize {
        /// Type tag of the bucket that failed.
        kind: &'static str,
        /// Description of the serialization failure.
        message: String,
    },

    /// The output document could not be written.
    #[error("failed to write seed file at '{path}': {message}")]
    Write {
        /// Path of the intended output file.
        path: Utf8PathBuf,
        /// Description of the I/O failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_error_formats_correctly() {
        let err = ExportError::Serialize {
            kind: "customers",
            message: "key must be a string".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "failed to serialize customers records: key must be a string"
        );
    }

    #[test]
    fn write_error_formats_correctly() {
        let err = ExportError::Write {
            path: Utf8PathBuf::from("/tmp/seeds.json"),
            message: "permission denied".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "failed to write seed file at '/tmp/seeds.json': permission denied"
        );
    }
}
