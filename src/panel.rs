//! Content panel: the selected file's title and content.
//!
//! Syntax highlighting is delegated to an external [`Highlighter`], invoked
//! after each content swap. The panel never waits on it.

use crate::views::Language;

/// External syntax highlighter.
pub trait Highlighter {
    fn highlight(&mut self, language: Language, content: &str);
}

/// Highlighter that does nothing.
#[derive(Debug, Default)]
pub struct NoHighlight;

impl Highlighter for NoHighlight {
    fn highlight(&mut self, _language: Language, _content: &str) {}
}

/// Displays one file at a time.
pub struct ContentPanel {
    path: Option<String>,
    title: Option<String>,
    content: Option<String>,
    language: Language,
    highlighter: Box<dyn Highlighter>,
}

impl Default for ContentPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentPanel {
    pub fn new() -> Self {
        Self::with_highlighter(Box::new(NoHighlight))
    }

    pub fn with_highlighter(highlighter: Box<dyn Highlighter>) -> Self {
        Self {
            path: None,
            title: None,
            content: None,
            language: Language::Plaintext,
            highlighter,
        }
    }

    /// Swap in a file. The title is the final path segment.
    pub fn show(&mut self, path: &str, content: &str) {
        let title = path.rsplit('/').next().unwrap_or(path);
        self.language = Language::for_file_name(title);
        self.title = Some(title.to_string());
        self.path = Some(path.to_string());
        self.content = Some(content.to_string());
        self.highlighter.highlight(self.language, content);
    }

    pub fn clear(&mut self) {
        self.path = None;
        self.title = None;
        self.content = None;
        self.language = Language::Plaintext;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn language(&self) -> Language {
        self.language
    }
}
