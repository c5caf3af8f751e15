//! Extension to language classification and node icons.

use serde::{Deserialize, Serialize};

/// Language or category tag for a file, used for icons and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    CSharp,
    Xml,
    Java,
    Python,
    TypeScript,
    JavaScript,
    Go,
    Json,
    Yaml,
    ProtocolBuffers,
    Markdown,
    Html,
    Css,
    Shell,
    Batch,
    PowerShell,
    Toml,
    GoModule,
    Plaintext,
}

impl Language {
    /// Classify a lowercase extension. Unknown or empty extensions are plaintext.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "cs" => Language::CSharp,
            "csproj" | "xml" => Language::Xml,
            "java" => Language::Java,
            "py" => Language::Python,
            "ts" => Language::TypeScript,
            "js" => Language::JavaScript,
            "go" => Language::Go,
            "json" | "avsc" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "proto" => Language::ProtocolBuffers,
            "md" => Language::Markdown,
            "html" => Language::Html,
            "css" => Language::Css,
            "sh" => Language::Shell,
            "bat" => Language::Batch,
            "ps1" => Language::PowerShell,
            "toml" => Language::Toml,
            "mod" => Language::GoModule,
            _ => Language::Plaintext,
        }
    }

    pub fn for_file_name(name: &str) -> Self {
        Self::from_extension(&extension_of(name))
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Language::CSharp => "C#",
            Language::Xml => "XML",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
            Language::Go => "Go",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::ProtocolBuffers => "Protocol Buffers",
            Language::Markdown => "Markdown",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Shell => "Shell",
            Language::Batch => "Batch",
            Language::PowerShell => "PowerShell",
            Language::Toml => "TOML",
            Language::GoModule => "Go-module",
            Language::Plaintext => "plaintext",
        }
    }

    /// Identifier handed to the syntax highlighter (`language-<id>` class).
    pub fn highlighter_id(&self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
            Language::Xml => "xml",
            Language::Java => "java",
            Language::Python => "python",
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Go | Language::GoModule => "go",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::ProtocolBuffers => "protobuf",
            Language::Markdown => "markdown",
            Language::Html => "html",
            Language::Css => "css",
            Language::Shell => "bash",
            Language::Batch => "batch",
            Language::PowerShell => "powershell",
            Language::Toml => "toml",
            Language::Plaintext => "plaintext",
        }
    }
}

/// Final dot-delimited segment of `name`, lowercased; empty when there is no dot.
pub fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Icon shown next to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Icon {
    Directory,
    File { extension: String, language: Language },
}

impl Icon {
    pub fn for_file(name: &str) -> Self {
        let extension = extension_of(name);
        let language = Language::from_extension(&extension);
        Icon::File {
            extension,
            language,
        }
    }

    /// CSS class used by the host page stylesheet.
    pub fn css_class(&self) -> String {
        match self {
            Icon::Directory => "folder-icon".to_string(),
            Icon::File { extension, .. } => format!("file-icon-{}", extension),
        }
    }
}
