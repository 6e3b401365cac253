//! Leaf normalization: turning caller values into level-0 nodes.

use crate::error::{LeafEncodingError, MerkleError};
use crate::node::Node;

/// Converts a leaf value into its canonical level-0 node.
///
/// Implementations must be deterministic: verification re-derives the node
/// independently of the tree that produced the proof.
pub trait LeafNormalizer<T: ?Sized> {
    /// Normalize `leaf` into a node.
    ///
    /// # Errors
    /// Returns [`MerkleError::Encoding`] if the leaf cannot be encoded.
    fn normalize(&self, leaf: &T) -> Result<Node, MerkleError>;
}

/// Uses the leaf's raw bytes unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawBytes;

impl<T: AsRef<[u8]> + ?Sized> LeafNormalizer<T> for RawBytes {
    fn normalize(&self, leaf: &T) -> Result<Node, MerkleError> {
        Ok(Node::from(leaf.as_ref()))
    }
}

/// Wraps a caller-supplied `Fn(&T) -> Result<bytes, E>`.
#[derive(Clone, Copy)]
pub struct LeafHashFn<F>(pub F);

impl<F> std::fmt::Debug for LeafHashFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LeafHashFn(..)")
    }
}

impl<T, F, B, E> LeafNormalizer<T> for LeafHashFn<F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<B, E>,
    B: Into<Vec<u8>>,
    E: Into<LeafEncodingError>,
{
    fn normalize(&self, leaf: &T) -> Result<Node, MerkleError> {
        (self.0)(leaf)
            .map(|bytes| Node::new(bytes.into()))
            .map_err(|e| MerkleError::Encoding(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bytes_are_unchanged() {
        let leaf = vec![1_u8, 2, 3];
        assert_eq!(
            RawBytes.normalize(&leaf).expect("raw bytes never fail"),
            Node::from([1_u8, 2, 3])
        );
        let fixed = [9_u8; 20];
        assert_eq!(
            RawBytes.normalize(&fixed).expect("raw bytes never fail"),
            Node::from(fixed)
        );
    }

    #[test]
    fn hash_fn_output_becomes_node() {
        let normalizer = LeafHashFn(|leaf: &u64| Ok::<_, LeafEncodingError>(leaf.to_be_bytes()));
        assert_eq!(
            normalizer.normalize(&5).expect("u64 encodes"),
            Node::from(5_u64.to_be_bytes())
        );
    }

    #[test]
    fn hash_fn_error_is_encoding_error() {
        let normalizer = LeafHashFn(|leaf: &str| {
            if leaf.is_empty() {
                Err("empty leaf")
            } else {
                Ok(leaf.as_bytes().to_vec())
            }
        });
        let err = normalizer.normalize("").expect_err("empty leaf must fail");
        assert!(err.is_encoding());
        assert_eq!(err.to_string(), "Failed to encode leaf: empty leaf");
    }
}
