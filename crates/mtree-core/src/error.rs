//! Error type shared by tree construction, proof generation and verification.

use thiserror::Error;

/// Boxed error returned by a caller-supplied leaf hash function.
pub type LeafEncodingError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when working with a Merkle tree.
#[derive(Error, Debug)]
pub enum MerkleError {
    /// The tree was asked to build from zero leaves.
    #[error("Cannot build a Merkle tree from an empty leaf set")]
    EmptyInput,

    /// The normalized leaf does not match any level-0 node.
    #[error("Leaf {0} is not part of the tree")]
    LeafNotFound(String),

    /// A proof was requested for a position beyond the leaf count.
    #[error("Leaf index {index} is out of range for a tree with {leaf_count} leaves")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },

    /// The caller-supplied leaf hash function failed.
    #[error("Failed to encode leaf: {0}")]
    Encoding(#[source] LeafEncodingError),
}

impl MerkleError {
    /// Whether this error came from the caller's leaf hash function.
    #[must_use]
    pub const fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_error_keeps_source() {
        let err = MerkleError::Encoding("bad leaf".into());
        assert!(err.is_encoding());
        assert_eq!(err.to_string(), "Failed to encode leaf: bad leaf");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn index_error_reports_bounds() {
        let err = MerkleError::IndexOutOfRange {
            index: 7,
            leaf_count: 3,
        };
        assert!(!err.is_encoding());
        assert_eq!(
            err.to_string(),
            "Leaf index 7 is out of range for a tree with 3 leaves"
        );
    }
}
