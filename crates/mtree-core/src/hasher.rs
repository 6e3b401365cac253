//! Hash primitives used to combine sibling nodes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::Digest as _;

/// Size in bytes of every internal node.
pub const DIGEST_SIZE: usize = 32;

/// A fixed-output cryptographic hash over arbitrary byte strings.
pub trait MerkleHasher {
    /// Algorithm tag recorded in serialized proofs.
    const ALGORITHM: HashAlgorithm;

    /// Hash `data` into a 32-byte digest.
    fn hash(data: &[u8]) -> [u8; DIGEST_SIZE];
}

/// Ethereum Keccak-256. This is the default primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;

impl MerkleHasher for Keccak256 {
    const ALGORITHM: HashAlgorithm = HashAlgorithm::Keccak256;

    fn hash(data: &[u8]) -> [u8; DIGEST_SIZE] {
        alloy_primitives::keccak256(data).0
    }
}

/// SHA-256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl MerkleHasher for Sha256 {
    const ALGORITHM: HashAlgorithm = HashAlgorithm::Sha256;

    fn hash(data: &[u8]) -> [u8; DIGEST_SIZE] {
        sha2::Sha256::digest(data).into()
    }
}

/// Run-time selector for a [`MerkleHasher`].
#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// [`Keccak256`].
    #[default]
    Keccak256,
    /// [`Sha256`].
    Sha256,
}

impl HashAlgorithm {
    /// Hash `data` with the selected primitive.
    #[must_use]
    pub fn hash(self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        match self {
            Self::Keccak256 => Keccak256::hash(data),
            Self::Sha256 => Sha256::hash(data),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keccak256 => f.write_str("keccak256"),
            Self::Sha256 => f.write_str("sha256"),
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keccak256" | "keccak" => Ok(Self::Keccak256),
            "sha256" => Ok(Self::Sha256),
            other => Err(format!(
                "Invalid hash algorithm: {other}. Expected 'keccak256' or 'sha256'."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            Keccak256::hash(&[]),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            Sha256::hash(&[]),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }

    #[test]
    fn algorithm_dispatch_matches_static_hashers() {
        let data = b"mtree";
        assert_eq!(HashAlgorithm::Keccak256.hash(data), Keccak256::hash(data));
        assert_eq!(HashAlgorithm::Sha256.hash(data), Sha256::hash(data));
    }

    #[test]
    fn algorithm_parses_and_displays() {
        for algorithm in [HashAlgorithm::Keccak256, HashAlgorithm::Sha256] {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
        assert!("blake2b".parse::<HashAlgorithm>().is_err());
    }
}
