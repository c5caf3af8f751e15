//! Terminal projection of the display tree.

use crate::views::{DisplayTree, NodeKind};
use owo_colors::OwoColorize;

/// Render visible rows, one per line, indented by depth.
///
/// The active file is prefixed with `>`; collapsed directories show `+` and
/// expanded ones `-`.
pub fn render_text(tree: &DisplayTree, color: bool) -> String {
    if tree.is_empty() {
        return "(no files)\n".to_string();
    }

    let mut out = String::new();
    for row in tree.visible_rows() {
        let indent = "  ".repeat(row.depth);
        let line = match row.kind {
            NodeKind::Directory => {
                let marker = if row.collapsed { "+" } else { "-" };
                let name = format!("{}/", row.name);
                if color {
                    format!("  {}{} {}", indent, marker, name.blue().bold())
                } else {
                    format!("  {}{} {}", indent, marker, name)
                }
            }
            NodeKind::File => {
                let label = match &row.icon {
                    crate::views::Icon::File { language, .. } => language.label(),
                    crate::views::Icon::Directory => "",
                };
                let prefix = if row.active { ">" } else { " " };
                if color && row.active {
                    format!(
                        "{} {}  {} {}",
                        prefix.cyan(),
                        indent,
                        row.name.cyan().bold(),
                        format!("[{}]", label).dimmed()
                    )
                } else if color {
                    format!("{} {}  {} {}", prefix, indent, row.name, format!("[{}]", label).dimmed())
                } else {
                    format!("{} {}  {} [{}]", prefix, indent, row.name, label)
                }
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
