//! Browse session: a line-oriented host for the gallery.
//!
//! Each input line becomes one gallery message (or a history operation on the
//! in-memory location followed by a location-change message).

use crate::error::ApiError;
use crate::gallery::{Gallery, Message, Outcome};
use crate::router::{Location, MemoryLocation};
use crate::tooling::format::format_panel_text;
use crate::views::text::render_text;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// A key press by DOM key name.
    Key(String),
    /// Click a node by path.
    Open(String),
    /// Navigate the location to a new fragment.
    Hash(String),
    Back,
    Forward,
    Sidebar,
    Tree,
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, ApiError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word {
            "j" | "k" | "ArrowDown" | "ArrowUp" => SessionCommand::Key(word.to_string()),
            "down" | "next" => SessionCommand::Key("ArrowDown".to_string()),
            "up" | "prev" | "previous" => SessionCommand::Key("ArrowUp".to_string()),
            "open" if !rest.is_empty() => SessionCommand::Open(rest.to_string()),
            "hash" if !rest.is_empty() => SessionCommand::Hash(rest.to_string()),
            "back" => SessionCommand::Back,
            "forward" => SessionCommand::Forward,
            "sidebar" => SessionCommand::Sidebar,
            "tree" => SessionCommand::Tree,
            "show" => SessionCommand::Show,
            "help" | "?" => SessionCommand::Help,
            "quit" | "q" | "exit" => SessionCommand::Quit,
            _ => return Err(ApiError::InvalidCommand(line.to_string())),
        };
        Ok(command)
    }
}

const HELP: &str = "Commands: j/k (or down/up), open <path>, hash <fragment>, back, forward, sidebar, tree, show, quit\n";

pub struct Session {
    gallery: Gallery<MemoryLocation>,
    color: bool,
}

impl Session {
    pub fn new(gallery: Gallery<MemoryLocation>, color: bool) -> Self {
        Self { gallery, color }
    }

    pub fn gallery(&self) -> &Gallery<MemoryLocation> {
        &self.gallery
    }

    /// Apply one command and describe the result.
    pub fn apply(&mut self, command: SessionCommand) -> String {
        debug!(command = ?command, "Session command");
        match command {
            SessionCommand::Key(name) => describe(self.gallery.dispatch(Message::Key(name))),
            SessionCommand::Open(path) => describe(self.gallery.dispatch(Message::Activate(path))),
            SessionCommand::Hash(fragment) => {
                let fragment = if fragment.starts_with('#') {
                    fragment
                } else {
                    format!("#{}", fragment)
                };
                self.gallery
                    .router_mut()
                    .location_mut()
                    .push_hash(&fragment);
                describe(self.gallery.dispatch(Message::HashChanged))
            }
            SessionCommand::Back => {
                if self.gallery.router_mut().location_mut().back() {
                    describe(self.gallery.dispatch(Message::HashChanged))
                } else {
                    "At start of history\n".to_string()
                }
            }
            SessionCommand::Forward => {
                if self.gallery.router_mut().location_mut().forward() {
                    describe(self.gallery.dispatch(Message::HashChanged))
                } else {
                    "At end of history\n".to_string()
                }
            }
            SessionCommand::Sidebar => describe(self.gallery.dispatch(Message::ToggleSidebar)),
            SessionCommand::Tree => render_text(&self.gallery.display(), self.color),
            SessionCommand::Show => format_panel_text(self.gallery.panel(), self.color),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => String::new(),
        }
    }

    /// Replay script lines. Blank lines and `#` comments are skipped; a
    /// malformed line fails the whole run.
    pub fn run_script<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> Result<String, ApiError> {
        let mut out = String::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let command = SessionCommand::parse(line)?;
            if command == SessionCommand::Quit {
                break;
            }
            out.push_str(&format!("> {}\n", line));
            out.push_str(&self.apply(command));
        }
        Ok(out)
    }

    /// Prompt for commands until `quit` or end of input.
    pub fn run_interactive(&mut self) -> Result<String, ApiError> {
        println!("{}", render_text(&self.gallery.display(), self.color));
        println!("{}", format_panel_text(self.gallery.panel(), self.color));
        loop {
            let prompt = match self.gallery.current() {
                Some(path) => format!("[{}]", path),
                None => "[no file]".to_string(),
            };
            let line: String = match dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => line,
                Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                Err(dialoguer::Error::IO(e)) => return Err(ApiError::Io(e)),
            };
            if line.trim().is_empty() {
                continue;
            }
            match SessionCommand::parse(&line) {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => {
                    let output = self.apply(command);
                    print!("{}", output);
                    if output.starts_with("Selected") {
                        print!("{}", format_panel_text(self.gallery.panel(), self.color));
                    }
                }
                Err(e) => println!("{}\n{}", e, HELP.trim_end()),
            }
        }
        Ok(format!(
            "Session ended at {}",
            self.gallery.current().unwrap_or("no file")
        ))
    }
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Selected(path) => format!("Selected {}\n", path),
        Outcome::Toggled { path, collapsed: true } => format!("Collapsed {}\n", path),
        Outcome::Toggled { path, collapsed: false } => format!("Expanded {}\n", path),
        Outcome::SidebarToggled(true) => "Sidebar hidden\n".to_string(),
        Outcome::SidebarToggled(false) => "Sidebar shown\n".to_string(),
        Outcome::Unchanged => "No change\n".to_string(),
        Outcome::NotFound(path) => format!("Not found: {}\n", path),
    }
}
