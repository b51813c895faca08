use super::NOW_PLAYING_ICON;
use crate::{
    domain::BeatId,
    ui_state::{LABEL_LOADING, UiState},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const KEY_HINTS: &str = "⏎ play/pause  ↑↓ move  q quit ";

pub struct BufferLine;

impl StatefulWidget for BufferLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;

        let status = match (state.playback.active(), state.playback.loading()) {
            (Some(id), _) => describe(state, id).map(|(title, producer)| {
                Line::from_iter([
                    Span::from(format!(" {NOW_PLAYING_ICON} ")).fg(theme.accent),
                    Span::from(title).fg(theme.title),
                    Span::from(format!(" by {producer}")).fg(theme.meta),
                ])
            }),
            (None, Some(id)) => describe(state, id).map(|(title, _)| {
                Line::from_iter([
                    Span::from(format!(" {LABEL_LOADING} ")).fg(theme.meta),
                    Span::from(title).fg(theme.title),
                ])
            }),
            (None, None) => None,
        };

        let [left, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(KEY_HINTS.chars().count() as u16)])
            .areas(area);

        status.render(left, buf);
        Line::from(KEY_HINTS)
            .fg(theme.meta)
            .right_aligned()
            .render(right, buf);
    }
}

fn describe(state: &UiState, id: &BeatId) -> Option<(String, String)> {
    state
        .get_beat(id)
        .map(|b| (b.title().to_string(), b.producer().to_string()))
}
