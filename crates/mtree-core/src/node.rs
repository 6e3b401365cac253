//! Merkle tree node type.
//!
//! A node is either the raw byte representation of a leaf (level 0, any
//! length) or the 32-byte hash of two concatenated children.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::serde_as;

use crate::hasher::{DIGEST_SIZE, MerkleHasher};

/// A node in the Merkle tree. Ordering is byte-lexicographic.
#[serde_as]
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Node(
    #[serde_as(as = "Hex")]
    #[schemars(with = "String")]
    Vec<u8>,
);

impl Node {
    /// Create a node from raw bytes.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Hash `left || right` into a parent node.
    #[must_use]
    pub fn parent<H: MerkleHasher>(left: &Self, right: &Self) -> Self {
        let mut buf = Vec::with_capacity(left.len().saturating_add(right.len()));
        buf.extend_from_slice(&left.0);
        buf.extend_from_slice(&right.0);
        Self(H::hash(&buf).to_vec())
    }

    /// Borrow the underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the node.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the node holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the node, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The node as a 32-byte digest, if it has digest length.
    #[must_use]
    pub fn to_digest(&self) -> Option<[u8; DIGEST_SIZE]> {
        self.0.as_slice().try_into().ok()
    }

    /// Parse a node from hex text, with or without a `0x` prefix.
    ///
    /// # Errors
    /// Returns an error if the text is not valid hex.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        hex::decode(digits).map(Self)
    }
}

impl AsRef<[u8]> for Node {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Node {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Node {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Node {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Node> for Vec<u8> {
    fn from(node: Node) -> Self {
        node.0
    }
}

impl PartialEq<[u8]> for Node {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}
