use std::collections::BTreeSet;

use codegallery::gallery::{Gallery, Message};
use codegallery::keyboard::NavKey;
use codegallery::router::{encode_fragment, parse_fragment, MemoryLocation};
use codegallery::tree::{build, TreeNode};
use codegallery::views::order::files_in_display_order;
use codegallery::views::{render, DisplayNode, TreeView};
use codegallery::{FileRecord, Payload};
use proptest::prelude::*;

fn records(paths: &BTreeSet<String>) -> Vec<FileRecord> {
    paths
        .iter()
        .map(|p| FileRecord::new(p.clone(), format!("content of {}", p)))
        .collect()
}

fn leaf_paths(node: &TreeNode, out: &mut BTreeSet<String>) {
    for child in node.children() {
        if child.is_file() {
            out.insert(child.full_path.clone());
        } else {
            leaf_paths(child, out);
        }
    }
}

fn directories_first(nodes: &[DisplayNode]) -> bool {
    let first_file = nodes
        .iter()
        .position(|n| !n.is_directory())
        .unwrap_or(nodes.len());
    nodes[first_file..].iter().all(|n| !n.is_directory())
        && nodes.iter().all(|n| directories_first(&n.children))
}

fn path_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("([a-c]{1,2}/){0,3}[a-c]{1,3}\\.txt", 1..24)
}

proptest! {
    #[test]
    fn every_record_becomes_one_leaf(paths in path_set()) {
        let root = build(&records(&paths));
        let mut leaves = BTreeSet::new();
        leaf_paths(&root, &mut leaves);
        prop_assert_eq!(root.file_count(), paths.len());
        prop_assert_eq!(leaves, paths);
    }

    #[test]
    fn rendering_is_deterministic_and_directories_lead(paths in path_set()) {
        let root = build(&records(&paths));
        let view = TreeView::new();
        let first = render(&root, &view);
        let second = render(&root, &view);
        prop_assert!(directories_first(&first.nodes));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn current_tracks_last_successful_select(
        paths in path_set(),
        picks in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 1..32),
    ) {
        let known: Vec<String> = paths.iter().cloned().collect();
        let mut gallery = Gallery::new(Payload::new(records(&paths)), MemoryLocation::new());
        let mut expected = gallery.current().map(str::to_string);
        for (exists, index) in picks {
            let target = if exists {
                known[index.index(known.len())].clone()
            } else {
                format!("missing/{}", index.index(100))
            };
            let result = gallery.select(&target);
            prop_assert_eq!(result.is_ok(), exists);
            if exists {
                expected = Some(target);
            }
            prop_assert_eq!(gallery.current().map(str::to_string), expected.clone());
        }
    }

    #[test]
    fn fragment_round_trips_paths_with_spaces_and_unicode(
        path in "[a-z]{1,4}/[a-z ]{0,4} [a-z\u{e9}\u{4e2d}]{0,3}[\u{e9}\u{fc}\u{4e2d}][a-z./]{0,4}",
    ) {
        let fragment = encode_fragment(&path);
        prop_assert!(fragment.is_ascii());
        prop_assert_eq!(parse_fragment(&fragment), Some(path));
    }

    #[test]
    fn fragment_round_trips_any_string(path in ".{0,24}") {
        prop_assert_eq!(parse_fragment(&encode_fragment(&path)), Some(path));
    }

    #[test]
    fn next_clamps_at_last_file(paths in path_set()) {
        let mut gallery = Gallery::new(Payload::new(records(&paths)), MemoryLocation::new());
        let order: Vec<String> = files_in_display_order(gallery.root())
            .iter()
            .map(|n| n.full_path.clone())
            .collect();
        gallery.select(&order[0]).unwrap();
        for _ in 1..order.len() {
            gallery.dispatch(Message::Navigate(NavKey::Next));
        }
        prop_assert_eq!(gallery.current(), order.last().map(String::as_str));
        gallery.dispatch(Message::Navigate(NavKey::Next));
        prop_assert_eq!(gallery.current(), order.last().map(String::as_str));
    }
}
