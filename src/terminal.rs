//! Terminal rendering of view updates and parsing of interactive input.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tabled::Tabled;

use linkroom_view::render::EMPTY_ROOM_TEXT;
use linkroom_view::{ListRow, View, ViewUpdate};

use crate::output::{self, OutputFormat};

/// Shown in local mode.
pub const LOCAL_MODE_BANNER: &str =
    "Remote store not configured: links are kept on this device only.";

const LANDING_HELP: &str = "Commands: create | join <code> | name <display name> | help | quit";
const ROOM_HELP: &str = "Commands: send <url> (or paste a URL) | refresh | copy | open <n> | \
                         name <display name> | join <code> | create | help | quit";

/// One row of the link table.
#[derive(Debug, Serialize, Tabled)]
pub struct LinkLine {
    /// Position, used by `open <n>`.
    #[tabled(rename = "#")]
    pub index: usize,
    /// Link target.
    #[tabled(rename = "Link")]
    pub url: String,
    /// Sender and age.
    #[tabled(rename = "Sent")]
    pub meta: String,
}

/// View that prints to the terminal.
///
/// Poll refreshes only print when the list of URLs changed, so the table is
/// not repeated every few seconds; [`TerminalView::force_next_render`]
/// makes the next list print regardless.
#[derive(Debug, Default)]
pub struct TerminalView {
    shown: Mutex<Option<Vec<String>>>,
    force: AtomicBool,
    on_landing: AtomicBool,
}

impl TerminalView {
    /// Create a terminal view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the next link list even if nothing changed.
    pub fn force_next_render(&self) {
        self.force.store(true, Ordering::SeqCst);
    }

    /// Print the help line for the current screen.
    pub fn print_help(&self) {
        if self.on_landing.load(Ordering::SeqCst) {
            println!("{}", LANDING_HELP);
        } else {
            println!("{}", ROOM_HELP);
        }
    }

    fn render_links(&self, rows: Vec<ListRow>) {
        let urls: Vec<String> = rows
            .iter()
            .filter_map(ListRow::as_link)
            .map(|row| row.url.clone())
            .collect();
        {
            let mut shown = self.shown.lock().unwrap_or_else(|e| e.into_inner());
            let forced = self.force.swap(false, Ordering::SeqCst);
            if !forced && shown.as_ref() == Some(&urls) {
                return;
            }
            *shown = Some(urls);
        }

        let lines = link_lines(&rows);
        output::print_list(&lines, OutputFormat::Table, EMPTY_ROOM_TEXT);
    }
}

impl View for TerminalView {
    fn apply(&self, update: ViewUpdate) {
        match update {
            ViewUpdate::ConfigWarning => output::print_warning(LOCAL_MODE_BANNER),
            ViewUpdate::DisplayName(name) => output::print_kv("Display name", &name),
            ViewUpdate::Landing => {
                self.on_landing.store(true, Ordering::SeqCst);
                println!("Create a room or join one by code.");
                println!("{}", LANDING_HELP);
            }
            ViewUpdate::Room { room, share_url } => {
                self.on_landing.store(false, Ordering::SeqCst);
                *self.shown.lock().unwrap_or_else(|e| e.into_inner()) = None;
                println!("Room {}", room);
                output::print_kv("Share link", &share_url);
                println!("{}", ROOM_HELP);
            }
            ViewUpdate::Error(Some(message)) => output::print_error(&message),
            ViewUpdate::Error(None) => {}
            ViewUpdate::SendEnabled(_) | ViewUpdate::ClearUrlInput => {}
            ViewUpdate::Links(rows) => self.render_links(rows),
            ViewUpdate::Toast(message) => output::print_success(&message),
            ViewUpdate::ManualCopy { prompt, text } => println!("{} {}", prompt, text),
        }
    }
}

/// Table rows for the rendered list. The placeholder row yields none.
pub fn link_lines(rows: &[ListRow]) -> Vec<LinkLine> {
    rows.iter()
        .filter_map(ListRow::as_link)
        .enumerate()
        .map(|(i, row)| LinkLine {
            index: i + 1,
            url: row.url.clone(),
            meta: row.meta.clone(),
        })
        .collect()
}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing typed.
    Blank,
    /// Generate a room and open it.
    Create,
    /// Open the room with this code.
    Join(String),
    /// Send a URL; a line that is not a command counts as one.
    Send(String),
    /// Re-list the room.
    Refresh,
    /// Copy the room link.
    Copy,
    /// Save a display name.
    Name(String),
    /// Open the n-th listed link (1-based).
    Open(usize),
    /// Show commands.
    Help,
    /// Leave.
    Quit,
    /// A command word with bad arguments.
    Invalid(String),
}

/// Parse one line of interactive input.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Blank;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word.to_ascii_lowercase().as_str() {
        "create" | "new" => Input::Create,
        "join" => Input::Join(rest.to_string()),
        "send" => Input::Send(rest.to_string()),
        "refresh" | "r" => Input::Refresh,
        "copy" => Input::Copy,
        "name" => Input::Name(rest.to_string()),
        "open" => match rest.parse::<usize>() {
            Ok(n) if n > 0 => Input::Open(n),
            _ => Input::Invalid("Usage: open <n>".to_string()),
        },
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        _ => Input::Send(line.to_string()),
    }
}
