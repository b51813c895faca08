use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub beat_list: Rect,
    pub buffer_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [header, beat_list, buffer_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        AppLayout {
            header,
            beat_list,
            buffer_line,
        }
    }
}
