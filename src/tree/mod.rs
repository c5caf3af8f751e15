//! Path tree reconstruction from flat file records.

pub mod builder;
pub mod node;

pub use builder::{build, BuildReport, PathTree, TreeBuilder};
pub use node::TreeNode;
