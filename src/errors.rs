/*!
 * Error types for the lrcparse library.
 *
 * Parsing never stops on a bad tag or line. Instead each recoverable problem is
 * described by an `LrcError`, logged, and collected into the parse outcome so the
 * caller can decide what to do with it.
 */

use thiserror::Error;

/// Soft errors raised while extracting tags from LRC text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LrcError {
    /// A metadata tag outside the known ID tag set
    #[error("\"{tag}\" is not a known tag (value: \"{value}\")")]
    UnrecognizedTag {
        /// Tag name as written in the source
        tag: String,
        /// Raw value that was ignored
        value: String,
    },

    /// An `offset` tag whose value is not `<sign><number>`
    #[error("Invalid offset value: \"{value}\"")]
    InvalidOffset {
        /// Raw value that failed to parse
        value: String,
    },
}

impl LrcError {
    /// Whether this error came from a tag the parser does not know
    pub fn is_unrecognized_tag(&self) -> bool {
        matches!(self, Self::UnrecognizedTag { .. })
    }
}
