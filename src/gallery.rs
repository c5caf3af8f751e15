//! Gallery facade: explicit message dispatch over the viewer components.
//!
//! Host adapters (a browser page, the terminal session) translate their input
//! events into [`Message`]s and render from the read accessors. No component
//! state lives in the host.

use crate::config::ViewerConfig;
use crate::error::SelectError;
use crate::keyboard::{self, NavKey};
use crate::panel::{ContentPanel, Highlighter, NoHighlight};
use crate::payload;
use crate::router::{DefaultFilePolicy, HashRouter, Location, MemoryLocation};
use crate::selection::{SelectionController, SelectionTargets};
use crate::tree::{BuildReport, TreeBuilder, TreeNode};
use crate::types::Payload;
use crate::views::{DisplayTree, TreeView};
use tracing::{debug, info};

/// Input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A tree node was clicked.
    Activate(String),
    /// A key was pressed, by DOM key name.
    Key(String),
    /// Direct next/previous request.
    Navigate(NavKey),
    /// The location fragment changed outside the viewer.
    HashChanged,
    ToggleSidebar,
}

/// What a message did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(String),
    Toggled { path: String, collapsed: bool },
    SidebarToggled(bool),
    Unchanged,
    NotFound(String),
}

pub struct GalleryOptions {
    pub default_file: DefaultFilePolicy,
    pub highlighter: Box<dyn Highlighter>,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            default_file: DefaultFilePolicy::default(),
            highlighter: Box::new(NoHighlight),
        }
    }
}

impl GalleryOptions {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            default_file: DefaultFilePolicy::new(config.default_file.clone()),
            ..Self::default()
        }
    }
}

pub struct Gallery<L: Location = MemoryLocation> {
    payload: Payload,
    root: TreeNode,
    report: BuildReport,
    view: TreeView,
    panel: ContentPanel,
    router: HashRouter<L>,
    selection: SelectionController,
    policy: DefaultFilePolicy,
}

impl<L: Location> Gallery<L> {
    pub fn new(payload: Payload, location: L) -> Self {
        Self::with_options(payload, location, GalleryOptions::default())
    }

    /// Build the tree and apply the initial selection from the location or
    /// the default-file policy.
    pub fn with_options(payload: Payload, location: L, options: GalleryOptions) -> Self {
        let tree = TreeBuilder::new().build(&payload.files);
        let mut gallery = Self {
            payload,
            root: tree.root,
            report: tree.report,
            view: TreeView::new(),
            panel: ContentPanel::with_highlighter(options.highlighter),
            router: HashRouter::new(location),
            selection: SelectionController::new(),
            policy: options.default_file,
        };
        gallery.initialize();
        gallery
    }

    /// Like [`Gallery::with_options`], degrading to an empty gallery when
    /// `json` is not a valid payload.
    pub fn from_json(json: &str, location: L, options: GalleryOptions) -> Self {
        Self::with_options(payload::parse_or_empty(json), location, options)
    }

    fn initialize(&mut self) {
        let target = self
            .router
            .initial_selection(&self.root, &self.payload.files, &self.policy);
        match target {
            Some(path) => {
                if let Err(e) = self.select(&path) {
                    debug!("Initial selection failed: {}", e);
                }
            }
            None => self.panel.clear(),
        }
        info!(
            files = self.payload.files.len(),
            selected = ?self.selection.current(),
            "Gallery initialized"
        );
    }

    pub fn select(&mut self, path: &str) -> Result<(), SelectError> {
        self.selection.select(
            path,
            &self.root,
            SelectionTargets {
                view: &mut self.view,
                panel: &mut self.panel,
                router: &mut self.router,
            },
        )
    }

    pub fn dispatch(&mut self, message: Message) -> Outcome {
        match message {
            Message::Activate(path) => self.activate(path),
            Message::Key(name) => match NavKey::from_key(&name) {
                Some(key) => self.navigate(key),
                None => Outcome::Unchanged,
            },
            Message::Navigate(key) => self.navigate(key),
            Message::HashChanged => {
                let target = self.router.on_external_change(&self.root, |path| path);
                match target {
                    Some(path) => self.select_outcome(path),
                    None => Outcome::Unchanged,
                }
            }
            Message::ToggleSidebar => Outcome::SidebarToggled(self.view.toggle_sidebar()),
        }
    }

    fn activate(&mut self, path: String) -> Outcome {
        match self.root.find(&path) {
            Some(node) if node.is_directory => {
                let collapsed = self.view.toggle(&path);
                debug!(path = %path, collapsed, "Toggled directory");
                Outcome::Toggled { path, collapsed }
            }
            Some(_) => self.select_outcome(path),
            None => Outcome::NotFound(path),
        }
    }

    fn navigate(&mut self, key: NavKey) -> Outcome {
        let target = keyboard::neighbor(&self.root, self.selection.current(), key).map(str::to_string);
        match target {
            Some(path) => self.select_outcome(path),
            None => Outcome::Unchanged,
        }
    }

    fn select_outcome(&mut self, path: String) -> Outcome {
        match self.select(&path) {
            Ok(()) => Outcome::Selected(path),
            Err(SelectError::NotFound(path)) => Outcome::NotFound(path),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.selection.current()
    }

    pub fn display(&self) -> DisplayTree {
        self.view.render(&self.root)
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn view(&self) -> &TreeView {
        &self.view
    }

    pub fn panel(&self) -> &ContentPanel {
        &self.panel
    }

    pub fn router(&self) -> &HashRouter<L> {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut HashRouter<L> {
        &mut self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileRecord;

    fn payload() -> Payload {
        Payload::new(vec![
            FileRecord::new("README.md", "hi"),
            FileRecord::new("src/main.go", "package main"),
        ])
    }

    #[test]
    fn test_activate_directory_toggles() {
        let mut gallery = Gallery::new(payload(), MemoryLocation::new());
        assert_eq!(
            gallery.dispatch(Message::Activate("src".to_string())),
            Outcome::Toggled {
                path: "src".to_string(),
                collapsed: true
            }
        );
        assert!(gallery.display().find("src").unwrap().collapsed);
        assert_eq!(gallery.current(), Some("README.md"));
    }

    #[test]
    fn test_activate_file_selects() {
        let mut gallery = Gallery::new(payload(), MemoryLocation::new());
        assert_eq!(
            gallery.dispatch(Message::Activate("src/main.go".to_string())),
            Outcome::Selected("src/main.go".to_string())
        );
        assert_eq!(gallery.panel().content(), Some("package main"));
    }

    #[test]
    fn test_activate_unknown_path() {
        let mut gallery = Gallery::new(payload(), MemoryLocation::new());
        assert_eq!(
            gallery.dispatch(Message::Activate("nope".to_string())),
            Outcome::NotFound("nope".to_string())
        );
        assert_eq!(gallery.current(), Some("README.md"));
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut gallery = Gallery::new(payload(), MemoryLocation::new());
        assert_eq!(gallery.dispatch(Message::Key("Enter".to_string())), Outcome::Unchanged);
    }

    #[test]
    fn test_sidebar_toggle_leaves_selection() {
        let mut gallery = Gallery::new(payload(), MemoryLocation::new());
        assert_eq!(gallery.dispatch(Message::ToggleSidebar), Outcome::SidebarToggled(true));
        assert!(gallery.display().sidebar_collapsed);
        assert_eq!(gallery.current(), Some("README.md"));
    }

    #[test]
    fn test_malformed_json_initializes_empty() {
        let mut gallery = Gallery::from_json("{", MemoryLocation::new(), GalleryOptions::default());
        assert!(gallery.display().is_empty());
        assert_eq!(gallery.current(), None);
        assert!(gallery.panel().is_empty());
        assert_eq!(gallery.dispatch(Message::Key("j".to_string())), Outcome::Unchanged);
        assert_eq!(gallery.dispatch(Message::HashChanged), Outcome::Unchanged);
        assert_eq!(gallery.router().location().hash(), "");
    }

    #[test]
    fn test_empty_path_selection_survives_reload_and_history() {
        let records = Payload::new(vec![FileRecord::new("", "x"), FileRecord::new("b", "y")]);
        let mut gallery = Gallery::new(records.clone(), MemoryLocation::new());
        assert_eq!(gallery.current(), Some(""));
        assert_eq!(gallery.router().location().hash(), "#file=");

        let reloaded = Gallery::new(records, MemoryLocation::with_hash("#file="));
        assert_eq!(reloaded.current(), Some(""));

        gallery.router_mut().location_mut().push_hash("#file=b");
        assert_eq!(gallery.dispatch(Message::HashChanged), Outcome::Selected("b".to_string()));
        assert!(gallery.router_mut().location_mut().back());
        assert_eq!(gallery.dispatch(Message::HashChanged), Outcome::Selected(String::new()));
        assert_eq!(gallery.panel().content(), Some("x"));
    }

    #[test]
    fn test_configured_default_file() {
        let options = GalleryOptions {
            default_file: DefaultFilePolicy::new("main.go"),
            ..GalleryOptions::default()
        };
        let gallery = Gallery::with_options(payload(), MemoryLocation::new(), options);
        assert_eq!(gallery.current(), Some("src/main.go"));
    }
}
