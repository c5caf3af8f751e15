//! Tree Views
//!
//! Projects the immutable node tree plus UI-only state (collapsed directories,
//! the active file, the sidebar toggle) into a display tree. Rendering is a
//! pure function of those inputs; the HTML and terminal outputs are both
//! produced from the same display tree.

pub mod html;
pub mod icons;
pub mod order;
pub mod text;

use crate::tree::TreeNode;
use serde::Serialize;
use std::collections::HashSet;

pub use icons::{extension_of, Icon, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One node of the display tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNode {
    pub name: String,
    pub full_path: String,
    pub kind: NodeKind,
    pub icon: Icon,
    pub depth: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Rendered gallery tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTree {
    pub nodes: Vec<DisplayNode>,
    pub sidebar_collapsed: bool,
}

impl DisplayTree {
    /// Nothing to show.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Visible nodes, depth-first; children of collapsed directories are hidden.
    pub fn visible_rows(&self) -> Vec<&DisplayNode> {
        let mut rows = Vec::new();
        fn walk<'a>(nodes: &'a [DisplayNode], rows: &mut Vec<&'a DisplayNode>) {
            for node in nodes {
                rows.push(node);
                if !node.collapsed {
                    walk(&node.children, rows);
                }
            }
        }
        walk(&self.nodes, &mut rows);
        rows
    }

    /// Paths of every file node in display order, visible or not.
    pub fn file_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        fn walk<'a>(nodes: &'a [DisplayNode], paths: &mut Vec<&'a str>) {
            for node in nodes {
                match node.kind {
                    NodeKind::Directory => walk(&node.children, paths),
                    NodeKind::File => paths.push(&node.full_path),
                }
            }
        }
        walk(&self.nodes, &mut paths);
        paths
    }

    /// Paths of nodes currently marked active.
    pub fn active_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        fn walk<'a>(nodes: &'a [DisplayNode], paths: &mut Vec<&'a str>) {
            for node in nodes {
                if node.active {
                    paths.push(node.full_path.as_str());
                }
                walk(&node.children, paths);
            }
        }
        walk(&self.nodes, &mut paths);
        paths
    }

    pub fn find(&self, path: &str) -> Option<&DisplayNode> {
        fn walk<'a>(nodes: &'a [DisplayNode], path: &str) -> Option<&'a DisplayNode> {
            for node in nodes {
                if node.full_path == path {
                    return Some(node);
                }
                if let Some(found) = walk(&node.children, path) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.nodes, path)
    }
}

/// UI-only state owned by the renderer.
///
/// Directories are expanded unless their path is in `collapsed`. Each
/// directory's flag is independent, so collapsing and re-expanding a parent
/// leaves its descendants as they were.
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    collapsed: HashSet<String>,
    active: Option<String>,
    sidebar_collapsed: bool,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a directory's collapsed flag; returns the new state.
    pub fn toggle(&mut self, dir_path: &str) -> bool {
        if self.collapsed.remove(dir_path) {
            false
        } else {
            self.collapsed.insert(dir_path.to_string());
            true
        }
    }

    pub fn is_collapsed(&self, dir_path: &str) -> bool {
        self.collapsed.contains(dir_path)
    }

    pub fn expand(&mut self, dir_path: &str) {
        self.collapsed.remove(dir_path);
    }

    /// Expand every directory enclosing `path`. Siblings are untouched.
    pub fn expand_ancestors(&mut self, path: &str) {
        for ancestor in TreeNode::ancestor_paths(path) {
            self.expand(&ancestor);
        }
    }

    /// Mark `path` as the single active node, clearing any previous one.
    pub fn set_active(&mut self, path: Option<&str>) {
        self.active = path.map(str::to_string);
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn render(&self, root: &TreeNode) -> DisplayTree {
        render(root, self)
    }
}

/// Render `root` with the given view state.
pub fn render(root: &TreeNode, view: &TreeView) -> DisplayTree {
    DisplayTree {
        nodes: render_children(root, view, 0),
        sidebar_collapsed: view.sidebar_collapsed,
    }
}

fn render_children(node: &TreeNode, view: &TreeView, depth: usize) -> Vec<DisplayNode> {
    order::sorted_children(node)
        .into_iter()
        .map(|child| {
            if child.is_directory {
                DisplayNode {
                    name: child.name.clone(),
                    full_path: child.full_path.clone(),
                    kind: NodeKind::Directory,
                    icon: Icon::Directory,
                    depth,
                    collapsed: view.is_collapsed(&child.full_path),
                    active: false,
                    children: render_children(child, view, depth + 1),
                }
            } else {
                DisplayNode {
                    name: child.name.clone(),
                    full_path: child.full_path.clone(),
                    kind: NodeKind::File,
                    icon: Icon::for_file(&child.name),
                    depth,
                    collapsed: false,
                    active: view.active() == Some(child.full_path.as_str()),
                    children: Vec::new(),
                }
            }
        })
        .collect()
}
