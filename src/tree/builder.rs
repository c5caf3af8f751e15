//! Tree builder: flat file records to a hierarchical node tree.

use crate::tree::node::TreeNode;
use crate::types::FileRecord;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Ambiguities found while building. Neither rejects the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Paths used both as a file and as a directory; the directory wins.
    pub collisions: Vec<String>,
    /// Paths supplied more than once; the last record's content wins.
    pub duplicates: Vec<String>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty() && self.duplicates.is_empty()
    }
}

/// A built tree together with its build report.
#[derive(Debug, Clone)]
pub struct PathTree {
    pub root: TreeNode,
    pub report: BuildReport,
}

/// Builds the node tree from file records. Total over any input.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    collisions: BTreeSet<String>,
    duplicates: BTreeSet<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self, records: &[FileRecord]) -> PathTree {
        let mut root = TreeNode::root();
        for record in records {
            self.insert(&mut root, record);
        }

        for path in &self.collisions {
            warn!(path = %path, "Path used as both file and directory; directory wins");
        }
        for path in &self.duplicates {
            warn!(path = %path, "Duplicate path in payload; last record wins");
        }
        debug!(
            records = records.len(),
            files = root.file_count(),
            "Built gallery tree"
        );

        PathTree {
            root,
            report: BuildReport {
                collisions: self.collisions.into_iter().collect(),
                duplicates: self.duplicates.into_iter().collect(),
            },
        }
    }

    fn insert(&mut self, root: &mut TreeNode, record: &FileRecord) {
        let segments: Vec<&str> = record.path.split('/').collect();
        let (dirs, leaf) = segments.split_at(segments.len() - 1);

        let mut current = root;
        for (i, segment) in dirs.iter().enumerate() {
            let node = current.child_or_insert(segment, segments[..=i].join("/"), true);
            if !node.is_directory {
                node.is_directory = true;
                self.collisions.insert(node.full_path.clone());
            }
            current = node;
        }

        let leaf = leaf[0];
        let existed = current.child(leaf).is_some();
        let node = current.child_or_insert(leaf, record.path.clone(), false);
        if existed {
            if node.is_directory {
                self.collisions.insert(node.full_path.clone());
            } else if node.content.is_some() {
                self.duplicates.insert(node.full_path.clone());
            }
        }
        node.content = Some(record.content.clone());
    }
}

/// Build the tree for `records`, discarding the report.
pub fn build(records: &[FileRecord]) -> TreeNode {
    TreeBuilder::new().build(records).root
}
