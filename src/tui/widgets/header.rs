use crate::{tui::SCREEN_TITLE, ui_state::UiState};
use ratatui::{
    style::Stylize,
    text::Line,
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

pub struct Header;
impl StatefulWidget for Header {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;

        Paragraph::new(Line::from(SCREEN_TITLE).bold().fg(theme.title))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Thick)
                    .fg(theme.accent),
            )
            .render(area, buf);
    }
}
