//! Keyboard navigation between files in display order.

use crate::tree::TreeNode;
use crate::views::order::files_in_display_order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
}

impl NavKey {
    /// Map a DOM key name. `ArrowDown`/`j` move forward, `ArrowUp`/`k` back.
    pub fn from_key(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" | "j" => Some(NavKey::Next),
            "ArrowUp" | "k" => Some(NavKey::Previous),
            _ => None,
        }
    }
}

/// The file to move to from `current`, clamped at both ends.
///
/// `None` when nothing is selected, the selection is not a file in the tree,
/// or the move would stay in place.
pub fn neighbor<'a>(root: &'a TreeNode, current: Option<&str>, key: NavKey) -> Option<&'a str> {
    let current = current?;
    let files = files_in_display_order(root);
    let index = files.iter().position(|node| node.full_path == current)?;
    let target = match key {
        NavKey::Next => (index + 1).min(files.len() - 1),
        NavKey::Previous => index.saturating_sub(1),
    };
    if target == index {
        None
    } else {
        Some(files[target].full_path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;
    use crate::types::FileRecord;

    fn sample() -> TreeNode {
        build(&[
            FileRecord::new("README.md", "hi"),
            FileRecord::new("src/main.go", "package main"),
            FileRecord::new("src/a/b.go", ""),
        ])
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(NavKey::from_key("j"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("k"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("Enter"), None);
    }

    #[test]
    fn test_moves_in_display_order() {
        let root = sample();
        assert_eq!(neighbor(&root, Some("src/a/b.go"), NavKey::Next), Some("src/main.go"));
        assert_eq!(neighbor(&root, Some("src/main.go"), NavKey::Next), Some("README.md"));
        assert_eq!(neighbor(&root, Some("README.md"), NavKey::Previous), Some("src/main.go"));
    }

    #[test]
    fn test_clamps_without_wraparound() {
        let root = sample();
        assert_eq!(neighbor(&root, Some("README.md"), NavKey::Next), None);
        assert_eq!(neighbor(&root, Some("src/a/b.go"), NavKey::Previous), None);
    }

    #[test]
    fn test_no_active_node_is_noop() {
        let root = sample();
        assert_eq!(neighbor(&root, None, NavKey::Next), None);
        assert_eq!(neighbor(&root, Some("src"), NavKey::Next), None);
        assert_eq!(neighbor(&build(&[]), None, NavKey::Previous), None);
    }
}
