use super::{AppLayout, BeatList, BufferLine, ErrorPopup, Header};
use crate::ui_state::UiState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area());

    Header.render(layout.header, f.buffer_mut(), state);
    BeatList.render(layout.beat_list, f.buffer_mut(), state);
    BufferLine.render(layout.buffer_line, f.buffer_mut(), state);

    if state.popup.is_open() {
        let popup_rect = centered_rect(50, 35, f.area());

        Clear.render(popup_rect, f.buffer_mut());
        ErrorPopup.render(popup_rect, f.buffer_mut(), state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
