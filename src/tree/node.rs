//! Directory and file node types.

use std::collections::HashMap;

/// A directory or file in the reconstructed hierarchy.
///
/// Children keep their insertion order; display ordering is applied by the
/// renderer. `full_path` is the `/`-joined path from the root and identifies
/// the node for lookups, location fragments and `data-path` bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub full_path: String,
    pub is_directory: bool,
    /// Set for every path that terminated at this node. Unreachable through
    /// selection once the node has also been used as a directory.
    pub content: Option<String>,
    children: Vec<TreeNode>,
    index: HashMap<String, usize>,
}

impl TreeNode {
    /// Empty root directory with an empty path.
    pub fn root() -> Self {
        Self::new("", String::new(), true)
    }

    pub(crate) fn new(name: &str, full_path: String, is_directory: bool) -> Self {
        Self {
            name: name.to_string(),
            full_path,
            is_directory,
            content: None,
            children: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        !self.is_directory
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.index.get(name).map(|&i| &self.children[i])
    }

    /// Return the child named `name`, creating it when absent.
    ///
    /// `is_directory` only applies to a newly created child.
    pub(crate) fn child_or_insert(
        &mut self,
        name: &str,
        full_path: String,
        is_directory: bool,
    ) -> &mut TreeNode {
        let idx = match self.index.get(name) {
            Some(&i) => i,
            None => {
                let i = self.children.len();
                self.children
                    .push(TreeNode::new(name, full_path, is_directory));
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.children[idx]
    }

    /// Resolve a `/`-separated path relative to this node.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        path.split('/')
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Resolve a path to a file node; directories never match.
    pub fn find_file(&self, path: &str) -> Option<&TreeNode> {
        self.find(path).filter(|node| node.is_file())
    }

    /// Full paths of the directories enclosing `path`, outermost first.
    pub fn ancestor_paths(path: &str) -> Vec<String> {
        let segments: Vec<&str> = path.split('/').collect();
        (1..segments.len())
            .map(|end| segments[..end].join("/"))
            .collect()
    }

    pub fn file_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| {
                if child.is_directory {
                    child.file_count()
                } else {
                    1
                }
            })
            .sum()
    }

    pub fn directory_count(&self) -> usize {
        self.children
            .iter()
            .filter(|child| child.is_directory)
            .map(|child| 1 + child.directory_count())
            .sum()
    }
}
