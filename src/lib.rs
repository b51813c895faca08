use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::Write;

pub mod app_core;
pub mod config;
pub mod domain;
pub mod key_handler;
pub mod library;
pub mod logging;
pub mod player;
pub mod tui;
pub mod ui_state;

pub use config::Config;
pub use library::Library;
pub use player::PlayerHandle;

// ~30fps
pub const REFRESH_RATE: u64 = 33;

pub const CONFIG_DIRECTORY: &str = "beatstream";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "beatstream.log";

pub fn overwrite_line(message: &str) {
    let mut stdout = std::io::stdout();
    let _ = stdout
        .execute(MoveToColumn(0))
        .and_then(|s| s.execute(Clear(ClearType::CurrentLine)))
        .and_then(|s| s.execute(Print(message)));
    let _ = stdout.flush();
}
