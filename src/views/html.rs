//! HTML projection of the display tree and the static gallery page.
//!
//! Markup mirrors the hooks the host page stylesheet and scripts expect:
//! `.file-tree-item` rows carrying `data-path`, `.folder-contents` wrappers,
//! and the `#file-tree`, `#code-panel-title`, `#code-viewer` and
//! `#gallery-data` elements.

use crate::error::ApiError;
use crate::panel::ContentPanel;
use crate::types::Payload;
use crate::views::{DisplayNode, DisplayTree, NodeKind};

/// Escape text for element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the tree as nested lists. Empty trees render as an empty string.
pub fn render_tree_html(tree: &DisplayTree) -> String {
    let mut out = String::new();
    render_nodes(&tree.nodes, &mut out);
    out
}

fn render_nodes(nodes: &[DisplayNode], out: &mut String) {
    if nodes.is_empty() {
        return;
    }
    out.push_str("<ul>");
    for node in nodes {
        let item_class = match node.kind {
            NodeKind::Directory => "folder",
            NodeKind::File => "file",
        };
        let active = if node.active { " active" } else { "" };
        let collapsed = if node.collapsed { " collapsed" } else { "" };

        out.push_str("<li>");
        out.push_str(&format!(
            "<div class=\"file-tree-item {}{}\" data-path=\"{}\">",
            item_class,
            active,
            escape_html(&node.full_path)
        ));
        if node.kind == NodeKind::Directory {
            out.push_str(&format!("<span class=\"folder-toggle{}\"></span>", collapsed));
        }
        out.push_str(&format!(
            "<span class=\"file-icon {}\"></span><span class=\"file-name\">{}</span></div>",
            node.icon.css_class(),
            escape_html(&node.name)
        ));
        if node.kind == NodeKind::Directory {
            out.push_str(&format!("<div class=\"folder-contents{}\">", collapsed));
            render_nodes(&node.children, out);
            out.push_str("</div>");
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

/// Serialize the payload for embedding inside a `<script>` element.
///
/// Every `<`, `>` and `&` is written as a `\u` escape, so no file content
/// can open a comment, start a nested `<script>` or close the element.
/// The result is still plain JSON.
pub fn embed_payload(payload: &Payload) -> Result<String, ApiError> {
    let json = serde_json::to_string(payload)
        .map_err(|e| ApiError::PayloadError(format!("Failed to serialize payload: {}", e)))?;
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(ch),
        }
    }
    Ok(out)
}

/// Render a complete static gallery page.
pub fn render_page(
    page_title: &str,
    tree: &DisplayTree,
    panel: &ContentPanel,
    payload: &Payload,
) -> Result<String, ApiError> {
    let sidebar_class = if tree.sidebar_collapsed {
        "gallery-sidebar collapsed"
    } else {
        "gallery-sidebar"
    };
    let title = panel.title().unwrap_or("");
    let body = panel.content().unwrap_or("");

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(page_title)));
    out.push_str("</head>\n<body>\n<div class=\"gallery\">\n");
    out.push_str(&format!(
        "<aside class=\"{}\"><button class=\"panel-toggle\"></button>\n<nav id=\"file-tree\">{}</nav>\n</aside>\n",
        sidebar_class,
        render_tree_html(tree)
    ));
    out.push_str(&format!(
        "<main class=\"code-panel\">\n<h2 id=\"code-panel-title\">{}</h2>\n<pre><code id=\"code-viewer\" class=\"language-{}\">{}</code></pre>\n</main>\n",
        escape_html(title),
        panel.language().highlighter_id(),
        escape_html(body)
    ));
    out.push_str(&format!(
        "</div>\n<script id=\"gallery-data\" type=\"application/json\">{}</script>\n</body>\n</html>\n",
        embed_payload(payload)?
    ));
    Ok(out)
}
