//! CLI Tooling
//!
//! Command-line host for the gallery viewer. Every command loads a payload,
//! builds a [`Gallery`] over an in-memory location seeded from `--hash`, and
//! renders from the gallery's accessors.

use crate::config::{ConfigLoader, GalleryConfig};
use crate::error::ApiError;
use crate::gallery::{Gallery, GalleryOptions};
use crate::payload;
use crate::router::MemoryLocation;
use crate::tooling::format::{format_panel_text, format_status_text, GalleryStatus};
use crate::tooling::session::Session;
use crate::views::html::render_page;
use crate::views::text::render_text;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Code Gallery - browse a file payload as a collapsible tree
#[derive(Parser)]
#[command(name = "codegallery")]
#[command(about = "Browse a JSON file payload as a collapsible tree with deep links")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Payload source shared by the viewing commands.
#[derive(Args, Debug, Clone)]
pub struct PayloadArgs {
    /// Payload JSON file ({"files": [{"path": ..., "content": ...}]})
    #[arg(long)]
    pub payload: PathBuf,

    /// Location fragment to open, e.g. "#file=src%2Fmain.go"
    #[arg(long)]
    pub hash: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the file tree with the active file marked
    Tree {
        #[command(flatten)]
        source: PayloadArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the selected file's title and content
    Show {
        #[command(flatten)]
        source: PayloadArgs,
    },
    /// Summarize the payload, tree shape and selection
    Status {
        #[command(flatten)]
        source: PayloadArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Render a static HTML gallery page
    Html {
        #[command(flatten)]
        source: PayloadArgs,
        /// Write the page here instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Collect a directory into a payload
    Collect {
        /// Directory to collect
        dir: PathBuf,
        /// Write the payload here instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Browse the gallery interactively, or replay a command script
    Browse {
        #[command(flatten)]
        source: PayloadArgs,
        /// Script of session commands, one per line
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

/// CLI context holding the effective configuration
pub struct CliContext {
    config: GalleryConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from `config_path`
    /// or the layered sources rooted at the current directory.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                ConfigLoader::load(&cwd)?
            }
        };
        Ok(Self { config })
    }

    pub fn with_config(config: GalleryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Tree { source, format } => {
                let (gallery, warning) = self.open_gallery(source)?;
                let display = gallery.display();
                let body = match format.as_str() {
                    "json" => to_pretty_json(&display)?,
                    "text" => render_text(&display, self.config.viewer.color),
                    other => return Err(invalid_format(other)),
                };
                Ok(with_warning(warning, body))
            }
            Commands::Show { source } => {
                let (gallery, warning) = self.open_gallery(source)?;
                Ok(with_warning(
                    warning,
                    format_panel_text(gallery.panel(), self.config.viewer.color),
                ))
            }
            Commands::Status { source, format } => {
                let (gallery, warning) = self.open_gallery(source)?;
                let status = GalleryStatus::from_gallery(&gallery);
                let body = match format.as_str() {
                    "json" => to_pretty_json(&status)?,
                    "text" => format_status_text(&status, self.config.viewer.color),
                    other => return Err(invalid_format(other)),
                };
                Ok(with_warning(warning, body))
            }
            Commands::Html { source, output } => {
                let (gallery, warning) = self.open_gallery(source)?;
                let page = render_page(
                    &self.config.viewer.page_title,
                    &gallery.display(),
                    gallery.panel(),
                    gallery.payload(),
                )?;
                match output {
                    Some(path) => {
                        write_output(path, &page)?;
                        Ok(with_warning(
                            warning,
                            format!("Wrote {}\n", path.display()),
                        ))
                    }
                    None => Ok(page),
                }
            }
            Commands::Collect { dir, output } => {
                let collected = payload::collect_dir(dir)?;
                match output {
                    Some(path) => {
                        payload::write(&collected, path)?;
                        Ok(format!(
                            "Collected {} files into {}\n",
                            collected.files.len(),
                            path.display()
                        ))
                    }
                    None => payload::to_json(&collected),
                }
            }
            Commands::Browse { source, script } => {
                let (gallery, warning) = self.open_gallery(source)?;
                if let Some(w) = &warning {
                    eprintln!("{}", w.trim_end());
                }
                let mut session = Session::new(gallery, self.config.viewer.color);
                match script {
                    Some(path) => {
                        let text = std::fs::read_to_string(path)?;
                        session.run_script(text.lines())
                    }
                    None => session.run_interactive(),
                }
            }
            Commands::Config => self.config.to_toml(),
        }
    }

    /// Load the payload and build a gallery. A malformed payload degrades to
    /// an empty gallery with a warning line; a missing file is an error.
    fn open_gallery(
        &self,
        source: &PayloadArgs,
    ) -> Result<(Gallery<MemoryLocation>, Option<String>), ApiError> {
        let json = std::fs::read_to_string(&source.payload)?;
        let (loaded, warning) = match payload::parse(&json) {
            Ok(loaded) => (loaded, None),
            Err(e) => {
                warn!(path = %source.payload.display(), "Malformed payload: {}", e);
                (
                    Default::default(),
                    Some(format!("Warning: {}; showing an empty gallery\n", e)),
                )
            }
        };
        let location = MemoryLocation::with_hash(source.hash.as_deref().unwrap_or(""));
        let options = GalleryOptions::from_config(&self.config.viewer);
        Ok((Gallery::with_options(loaded, location, options), warning))
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tree { .. } => "tree",
        Commands::Show { .. } => "show",
        Commands::Status { .. } => "status",
        Commands::Html { .. } => "html",
        Commands::Collect { .. } => "collect",
        Commands::Browse { .. } => "browse",
        Commands::Config => "config",
    }
}

fn invalid_format(format: &str) -> ApiError {
    ApiError::InvalidCommand(format!(
        "Unknown format '{}' (expected text or json)",
        format
    ))
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::PayloadError(e.to_string()))
}

fn with_warning(warning: Option<String>, body: String) -> String {
    match warning {
        Some(mut w) => {
            w.push_str(&body);
            w
        }
        None => body,
    }
}

fn write_output(path: &Path, contents: &str) -> Result<(), ApiError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
