//! Display ordering: directories before files, then by name.

use crate::tree::TreeNode;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Compare two names: case-insensitive first, then case-sensitive, both on
/// NFC-normalized text. Names that normalize identically compare equal and
/// keep their insertion order under the stable sort below.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a: String = a.nfc().collect();
    let b: String = b.nfc().collect();
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(&b))
}

pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.is_directory
        .cmp(&a.is_directory)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Children of `node` in display order.
pub fn sorted_children(node: &TreeNode) -> Vec<&TreeNode> {
    let mut children: Vec<&TreeNode> = node.children().iter().collect();
    children.sort_by(|a, b| compare_nodes(a, b));
    children
}

/// Every file node under `root`, depth-first in display order.
pub fn files_in_display_order(root: &TreeNode) -> Vec<&TreeNode> {
    let mut files = Vec::new();
    collect_files(root, &mut files);
    files
}

fn collect_files<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
    for child in sorted_children(node) {
        if child.is_directory {
            collect_files(child, out);
        } else {
            out.push(child);
        }
    }
}
