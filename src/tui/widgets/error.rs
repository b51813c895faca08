use super::WARNING_ICON;
use crate::ui_state::UiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

/// Keys that close the popup, as mapped in `key_handler`.
pub const DISMISS_HINT: &str = " Enter/Esc to dismiss ";

const PADDING: Padding = Padding::new(3, 3, 1, 1);

pub struct ErrorPopup;

impl StatefulWidget for ErrorPopup {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let Some(message) = state.get_error() else {
            return;
        };

        let theme = &state.theme;
        let style = Style::new().fg(theme.error_text).bg(theme.error);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Line::from(format!(" {WARNING_ICON} Error ")).bold())
            .title_bottom(DISMISS_HINT)
            .title_alignment(Alignment::Center)
            .padding(PADDING)
            .style(style);

        Paragraph::new(message)
            .wrap(Wrap { trim: true })
            .centered()
            .block(block)
            .render(area, buf);
    }
}
