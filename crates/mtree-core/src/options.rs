//! Tree construction options and the single pairing rule.

use serde::{Deserialize, Serialize};

use crate::hasher::MerkleHasher;
use crate::node::Node;

/// Options controlling how leaves and sibling pairs are ordered.
///
/// The same options must be used to build a tree and to verify its proofs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleOptions {
    /// Sort level-0 nodes by their bytes before building.
    #[serde(default)]
    pub sort_leaves: bool,
    /// Hash each pair as `min || max` instead of `left || right`.
    #[serde(default)]
    pub sort_pairs: bool,
}

impl MerkleOptions {
    /// Options with both sorting flags set.
    pub const SORTED: Self = Self {
        sort_leaves: true,
        sort_pairs: true,
    };

    /// Create options with explicit flags.
    #[must_use]
    pub const fn new(sort_leaves: bool, sort_pairs: bool) -> Self {
        Self {
            sort_leaves,
            sort_pairs,
        }
    }

    /// Combine two sibling nodes into their parent.
    ///
    /// Builder, prover and verifier all pair through here.
    #[must_use]
    pub fn combine<H: MerkleHasher>(self, left: &Node, right: &Node) -> Node {
        if self.sort_pairs && right < left {
            Node::parent::<H>(right, left)
        } else {
            Node::parent::<H>(left, right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Keccak256;

    #[test]
    fn fixed_order_is_not_commutative() {
        let a = Node::from([1_u8; 20]);
        let b = Node::from([2_u8; 20]);
        let options = MerkleOptions::default();

        assert_ne!(
            options.combine::<Keccak256>(&a, &b),
            options.combine::<Keccak256>(&b, &a)
        );
        assert_eq!(
            options.combine::<Keccak256>(&a, &b),
            Node::parent::<Keccak256>(&a, &b)
        );
    }

    #[test]
    fn sorted_pairs_are_commutative() {
        let a = Node::from([1_u8; 20]);
        let b = Node::from([2_u8; 20]);
        let options = MerkleOptions::new(false, true);

        assert_eq!(
            options.combine::<Keccak256>(&a, &b),
            options.combine::<Keccak256>(&b, &a)
        );
        assert_eq!(
            options.combine::<Keccak256>(&b, &a),
            Node::parent::<Keccak256>(&a, &b)
        );
    }
}
