//! Format gallery status and panel content as text.

use crate::gallery::Gallery;
use crate::panel::ContentPanel;
use crate::router::Location;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Gallery summary for the status command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryStatus {
    pub files: usize,
    pub directories: usize,
    pub records: usize,
    pub collisions: Vec<String>,
    pub duplicates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    pub location: String,
}

impl GalleryStatus {
    pub fn from_gallery<L: Location>(gallery: &Gallery<L>) -> Self {
        Self {
            files: gallery.root().file_count(),
            directories: gallery.root().directory_count(),
            records: gallery.payload().files.len(),
            collisions: gallery.report().collisions.clone(),
            duplicates: gallery.report().duplicates.clone(),
            selected: gallery.current().map(str::to_string),
            location: gallery.router().location().hash(),
        }
    }
}

/// Format a section heading, bold and underlined when `color` is set.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

pub fn format_status_text(status: &GalleryStatus, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Gallery Status", color)));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Records".to_string(), status.records.to_string()]);
    table.add_row(vec!["Files".to_string(), status.files.to_string()]);
    table.add_row(vec!["Directories".to_string(), status.directories.to_string()]);
    table.add_row(vec![
        "Selected".to_string(),
        status.selected.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "Location".to_string(),
        if status.location.is_empty() {
            "-".to_string()
        } else {
            status.location.clone()
        },
    ]);
    out.push_str(&format!("{}\n", table));

    if !status.collisions.is_empty() || !status.duplicates.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n\n", format_section_heading("Ambiguous paths", color)));
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Path", "Issue", "Resolution"]);
        for path in &status.collisions {
            table.add_row(vec![
                path.clone(),
                "file and directory".to_string(),
                "directory wins".to_string(),
            ]);
        }
        for path in &status.duplicates {
            table.add_row(vec![
                path.clone(),
                "duplicate".to_string(),
                "last record wins".to_string(),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }
    out
}

/// Title heading followed by the content, or a notice when nothing is selected.
pub fn format_panel_text(panel: &ContentPanel, color: bool) -> String {
    match (panel.title(), panel.content()) {
        (Some(title), Some(content)) => {
            let heading = format!("{} ({})", title, panel.language().label());
            let mut out = format!("{}\n\n{}", format_section_heading(&heading, color), content);
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out
        }
        _ => "No file selected.\n".to_string(),
    }
}
