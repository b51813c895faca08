use super::WARNING_ICON;
use crate::{
    domain::Beat,
    ui_state::{Theme, UiState},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

const CARD_HEIGHT: u16 = 6;
const CARD_GAP: u16 = 1;

/// One card per beat, scrolled so the cursor stays in view.
pub struct BeatList;
impl StatefulWidget for BeatList {
    type State = UiState;
    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = area.inner(Margin {
            horizontal: 2,
            vertical: 0,
        });

        if state.beats().is_empty() {
            Paragraph::new("No beats available")
                .centered()
                .fg(state.theme.meta)
                .render(area, buf);
            return;
        }

        let slot = CARD_HEIGHT + CARD_GAP;
        let visible = (area.height / slot).max(1) as usize;
        state.display_state.clamp_offset(visible);

        let selected = state.display_state.selected();
        let offset = state.display_state.offset;

        for (row, (idx, beat)) in state
            .beats()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = area.y + row as u16 * slot;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }

            BeatCard {
                beat,
                label: state.playback.button_label(beat.id()),
                failure: state.playback.failure(beat.id()),
                focused: idx == selected,
                active: state.is_active(beat.id()),
                theme: &state.theme,
            }
            .render(Rect { y, height, ..area }, buf);
        }
    }
}

struct BeatCard<'a> {
    beat: &'a Beat,
    label: &'static str,
    failure: Option<&'a str>,
    focused: bool,
    active: bool,
    theme: &'a Theme,
}

impl Widget for BeatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let (bg, border) = match self.focused {
            true => (theme.surface_selected, theme.accent),
            false => (theme.surface, theme.meta),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(border))
            .bg(bg);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title, meta, button, failure] = Layout::vertical([Constraint::Length(1); 4])
            .areas(inner.inner(Margin {
                horizontal: 1,
                vertical: 0,
            }));

        Line::from(self.beat.title())
            .bold()
            .fg(theme.title)
            .render(title, buf);

        Line::from(self.beat.byline())
            .fg(theme.meta)
            .render(meta, buf);

        let button_bg = match self.active {
            true => theme.button_active,
            false => theme.button,
        };
        Paragraph::new(self.label)
            .centered()
            .bold()
            .fg(theme.button_text)
            .bg(button_bg)
            .render(button, buf);

        if let Some(reason) = self.failure {
            Line::from(format!("{WARNING_ICON} {reason}"))
                .fg(theme.error)
                .render(failure, buf);
        }
    }
}
