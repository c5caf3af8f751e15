use codegallery::gallery::{Gallery, Message, Outcome};
use codegallery::keyboard::NavKey;
use codegallery::router::{Location, MemoryLocation};
use codegallery::{FileRecord, Payload};

fn sample_payload() -> Payload {
    Payload::new(vec![
        FileRecord::new("README.md", "hi"),
        FileRecord::new("src/main.go", "package main"),
    ])
}

fn open(hash: &str) -> Gallery {
    Gallery::new(sample_payload(), MemoryLocation::with_hash(hash))
}

#[test]
fn no_hash_selects_readme() {
    let gallery = open("");
    assert_eq!(gallery.current(), Some("README.md"));
    assert_eq!(gallery.panel().title(), Some("README.md"));
    assert_eq!(gallery.panel().content(), Some("hi"));
    assert_eq!(gallery.router().location().hash(), "#file=README.md");
}

#[test]
fn hash_selects_nested_file_and_expands_parent() {
    let gallery = open("#file=src%2Fmain.go");
    assert_eq!(gallery.current(), Some("src/main.go"));

    let display = gallery.display();
    let src = display.find("src").unwrap();
    assert!(src.is_directory());
    assert!(!src.collapsed);
    assert_eq!(display.active_paths(), vec!["src/main.go"]);
    assert_eq!(gallery.panel().title(), Some("main.go"));
}

#[test]
fn collapsed_parent_reopens_when_hash_selects_child() {
    let mut gallery = open("");
    assert_eq!(
        gallery.dispatch(Message::Activate("src".to_string())),
        Outcome::Toggled {
            path: "src".to_string(),
            collapsed: true
        }
    );
    gallery
        .router_mut()
        .location_mut()
        .push_hash("#file=src%2Fmain.go");
    assert_eq!(
        gallery.dispatch(Message::HashChanged),
        Outcome::Selected("src/main.go".to_string())
    );
    assert!(!gallery.display().find("src").unwrap().collapsed);
}

#[test]
fn unknown_hash_falls_back_to_default_file() {
    let gallery = open("#file=missing.txt");
    assert_eq!(gallery.current(), Some("README.md"));
}

#[test]
fn previous_clamps_at_first_file() {
    let mut gallery = open("");
    gallery.select("src/main.go").unwrap();

    assert_eq!(
        gallery.dispatch(Message::Navigate(NavKey::Previous)),
        Outcome::Selected("README.md".to_string())
    );
    assert_eq!(
        gallery.dispatch(Message::Navigate(NavKey::Previous)),
        Outcome::Unchanged
    );
    assert_eq!(gallery.current(), Some("README.md"));
}

#[test]
fn external_change_to_unknown_path_keeps_selection_and_hash() {
    let mut gallery = open("");
    gallery.router_mut().location_mut().push_hash("#file=nope");
    assert_eq!(gallery.dispatch(Message::HashChanged), Outcome::Unchanged);
    assert_eq!(gallery.current(), Some("README.md"));
    assert_eq!(gallery.router().location().hash(), "#file=nope");
}

#[test]
fn back_and_forward_reselect_files() {
    let mut gallery = open("");
    gallery
        .router_mut()
        .location_mut()
        .push_hash("#file=src%2Fmain.go");
    gallery.dispatch(Message::HashChanged);
    assert_eq!(gallery.current(), Some("src/main.go"));

    assert!(gallery.router_mut().location_mut().back());
    gallery.dispatch(Message::HashChanged);
    assert_eq!(gallery.current(), Some("README.md"));

    assert!(gallery.router_mut().location_mut().forward());
    gallery.dispatch(Message::HashChanged);
    assert_eq!(gallery.current(), Some("src/main.go"));
    assert_eq!(gallery.router().location().history_len(), 2);
}

#[test]
fn clicking_files_does_not_grow_history() {
    let mut gallery = open("");
    gallery.dispatch(Message::Activate("src/main.go".to_string()));
    gallery.dispatch(Message::Activate("README.md".to_string()));
    assert_eq!(gallery.router().location().history_len(), 1);
    assert_eq!(gallery.router().location().hash(), "#file=README.md");
}

#[test]
fn empty_payload_leaves_panel_empty() {
    let mut gallery = Gallery::new(Payload::default(), MemoryLocation::new());
    assert_eq!(gallery.current(), None);
    assert!(gallery.panel().is_empty());
    assert!(gallery.display().is_empty());
    assert_eq!(
        gallery.dispatch(Message::Key("ArrowDown".to_string())),
        Outcome::Unchanged
    );
}

#[test]
fn directory_collision_keeps_directory_and_reports_it() {
    let gallery = Gallery::new(
        Payload::new(vec![
            FileRecord::new("a", "shadowed"),
            FileRecord::new("a/b.txt", "visible"),
        ]),
        MemoryLocation::with_hash("#file=a"),
    );
    assert_eq!(gallery.current(), Some("a/b.txt"));
    assert_eq!(gallery.report().collisions, vec!["a".to_string()]);
    assert!(gallery.root().find("a").unwrap().is_directory);
}
