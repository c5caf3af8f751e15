//! Selection Controller
//!
//! Sole owner of the selected path. A selection either fully applies or is a
//! no-op; when it applies the collaborators are updated in a fixed order:
//! active marker, ancestor expansion, content panel, location.

use crate::error::SelectError;
use crate::panel::ContentPanel;
use crate::router::{HashRouter, Location};
use crate::tree::TreeNode;
use crate::views::TreeView;
use tracing::debug;

/// Components updated after a successful selection.
pub struct SelectionTargets<'a, L: Location> {
    pub view: &'a mut TreeView,
    pub panel: &'a mut ContentPanel,
    pub router: &'a mut HashRouter<L>,
}

#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected path. When set, it always names a file node.
    pub fn current(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select<L: Location>(
        &mut self,
        path: &str,
        root: &TreeNode,
        targets: SelectionTargets<'_, L>,
    ) -> Result<(), SelectError> {
        let node = root
            .find_file(path)
            .ok_or_else(|| SelectError::NotFound(path.to_string()))?;
        let previous = self.selected.replace(node.full_path.clone());

        targets.view.set_active(Some(&node.full_path));
        targets.view.expand_ancestors(&node.full_path);
        targets
            .panel
            .show(&node.full_path, node.content.as_deref().unwrap_or(""));
        let written = targets.router.reflect(&node.full_path);

        debug!(
            path = %node.full_path,
            previous = ?previous,
            location_written = written,
            "Selected file"
        );
        Ok(())
    }
}
