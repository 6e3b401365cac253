//! Level-by-level construction of the node arena.

use crate::hasher::MerkleHasher;
use crate::node::Node;
use crate::options::MerkleOptions;

/// Number of nodes on the level above a level of `width` nodes.
pub(super) const fn parent_width(width: usize) -> usize {
    width.div_ceil(2)
}

/// Widths of every level for `leaf_count` leaves, leaves first.
pub(super) fn level_widths(leaf_count: usize) -> Vec<usize> {
    let mut widths = vec![leaf_count];
    let mut width = leaf_count;
    while width > 1 {
        width = parent_width(width);
        widths.push(width);
    }
    widths
}

/// Pair adjacent nodes left to right. An unpaired last node is promoted
/// unchanged, never hashed with itself.
pub(super) fn next_level<H: MerkleHasher>(current: &[Node], options: MerkleOptions) -> Vec<Node> {
    current
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => options.combine::<H>(left, right),
            [promoted] => promoted.clone(),
            _ => unreachable!("chunks(2) yields one or two nodes"),
        })
        .collect()
}

/// Build every level from the normalized leaves up to the single root.
pub(super) fn build_levels<H: MerkleHasher>(
    leaves: Vec<Node>,
    options: MerkleOptions,
) -> Vec<Vec<Node>> {
    let mut levels = Vec::with_capacity(level_widths(leaves.len()).len());
    let mut current = leaves;
    while current.len() > 1 {
        let next = next_level::<H>(&current, options);
        levels.push(current);
        current = next;
    }
    levels.push(current);
    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Keccak256;

    fn leaves(count: u8) -> Vec<Node> {
        (0..count).map(|i| Node::from([i; 20])).collect()
    }

    #[test]
    fn widths_halve_rounding_up() {
        assert_eq!(level_widths(1), vec![1]);
        assert_eq!(level_widths(2), vec![2, 1]);
        assert_eq!(level_widths(5), vec![5, 3, 2, 1]);
        assert_eq!(level_widths(8), vec![8, 4, 2, 1]);
    }

    #[test]
    fn built_levels_match_widths() {
        for count in 1..=17 {
            let levels = build_levels::<Keccak256>(leaves(count), MerkleOptions::default());
            let widths: Vec<usize> = levels.iter().map(Vec::len).collect();
            assert_eq!(widths, level_widths(usize::from(count)));
        }
    }

    #[test]
    fn odd_node_is_promoted() {
        let nodes = leaves(3);
        let next = next_level::<Keccak256>(&nodes, MerkleOptions::default());
        assert_eq!(next.len(), 2);
        assert_eq!(next.last(), nodes.last());
    }
}
