//! Leaf file loading.

use std::path::Path;

use eyre::{Context as _, Result};
use mtree_core::Node;

/// Parse leaves from a JSON array of hex strings, or from one hex string per
/// line. Blank lines and `#` comments are skipped in the line format.
pub fn parse_leaves(text: &str) -> Result<Vec<Vec<u8>>> {
    let entries: Vec<String> = if text.trim_start().starts_with('[') {
        serde_json::from_str(text).context("Failed to parse leaves JSON array")?
    } else {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect()
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            Node::from_hex(entry)
                .map(Node::into_bytes)
                .with_context(|| format!("Invalid hex leaf at entry {idx}: {entry}"))
        })
        .collect()
}

/// Read and parse a leaf file.
pub fn load_leaves(path: &Path) -> Result<Vec<Vec<u8>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read leaf file {}", path.display()))?;
    parse_leaves(&text).with_context(|| format!("Failed to parse leaf file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_array() {
        let leaves = parse_leaves(r#"["0x01", "0203"]"#).expect("leaves should parse");
        assert_eq!(leaves, vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn parses_lines_with_comments() {
        let leaves =
            parse_leaves("# header\n0x0a\n\n  0b0c  \n").expect("leaves should parse");
        assert_eq!(leaves, vec![vec![10], vec![11, 12]]);
    }

    #[test]
    fn reports_bad_entry() {
        let err = parse_leaves("01\nzz\n").expect_err("bad hex must fail");
        assert!(format!("{err:#}").contains("entry 1"));
    }
}
