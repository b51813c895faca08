use super::{Action, C, Director, S, SCROLL_MID, X};
use crate::{REFRESH_RATE, ui_state::UiState};
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.popup.is_open() {
        true => handle_popup(&key_event),
        false => handle_beat_list(&key_event),
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Char('q')) => Some(Action::QUIT),
        (X, Esc) => Some(Action::SoftReset),
        _ => None,
    }
}

fn handle_popup(key: &KeyEvent) -> Option<Action> {
    match key.code {
        Enter | Char(' ') => Some(Action::SoftReset),
        _ => None,
    }
}

fn handle_beat_list(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) | (X, Char(' ')) => Some(Action::Toggle),

        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
        (X, Char('d')) | (X, PageDown) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, Char('u')) | (X, PageUp) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) | (X, Home) => Some(Action::Scroll(Director::Top)),
        (S, Char('G')) | (X, End) => Some(Action::Scroll(Director::Bottom)),

        (X, Char(c)) if c.is_ascii_digit() && c != '0' => {
            c.to_digit(10).map(|d| Action::ToggleAt(d as usize - 1))
        }

        _ => None,
    }
}

pub fn next_event() -> Result<Option<Event>> {
    match event::poll(Duration::from_millis(REFRESH_RATE))? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}
