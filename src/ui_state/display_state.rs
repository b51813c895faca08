use super::UiState;
use crate::key_handler::Director;

/// Cursor over the beat cards plus the first card currently drawn.
#[derive(Default)]
pub struct DisplayState {
    selected: usize,
    pub(crate) offset: usize,
}

impl DisplayState {
    pub fn new() -> Self {
        DisplayState::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn scroll(&mut self, director: &Director, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }

        let last = len - 1;
        self.selected = match *director {
            Director::Up(n) => self.selected.saturating_sub(n),
            Director::Down(n) => self.selected.saturating_add(n).min(last),
            Director::Top => 0,
            Director::Bottom => last,
        };
    }

    /// Keep the cursor inside a window of `visible` cards.
    pub(crate) fn clamp_offset(&mut self, visible: usize) {
        let visible = visible.max(1);

        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}

impl UiState {
    pub fn scroll(&mut self, director: Director) {
        let len = self.beats().len();
        self.display_state.scroll(&director, len);
    }

    pub fn select_index(&mut self, idx: usize) {
        if idx < self.beats().len() {
            self.display_state.selected = idx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_is_clamped_to_the_list() {
        let mut display = DisplayState::new();

        display.scroll(&Director::Up(1), 4);
        assert_eq!(display.selected(), 0);

        display.scroll(&Director::Down(10), 4);
        assert_eq!(display.selected(), 3);

        display.scroll(&Director::Top, 4);
        assert_eq!(display.selected(), 0);

        display.scroll(&Director::Bottom, 0);
        assert_eq!(display.selected(), 0);
    }

    #[test]
    fn offset_follows_the_cursor() {
        let mut display = DisplayState::new();

        display.scroll(&Director::Down(5), 10);
        display.clamp_offset(3);
        assert_eq!(display.offset, 3);

        display.scroll(&Director::Up(4), 10);
        display.clamp_offset(3);
        assert_eq!(display.offset, 1);
    }
}
