use super::{DisplayState, Mode, PlaybackView, PopupState, PopupType, Theme};
use crate::{
    Library,
    domain::{Beat, BeatId},
};
use anyhow::{Error, Result, anyhow};

pub struct UiState {
    pub(super) library: Library,
    pub(crate) playback: PlaybackView,

    // Visual Elements
    pub(crate) theme: Theme,
    pub(crate) popup: PopupState,
    pub(crate) display_state: DisplayState,
    mode: Mode,
}

impl UiState {
    pub fn new(library: Library, theme: Theme) -> Self {
        UiState {
            library,
            playback: PlaybackView::default(),
            theme,
            popup: PopupState::new(),
            display_state: DisplayState::new(),
            mode: Mode::default(),
        }
    }
}

impl UiState {
    pub fn beats(&self) -> &[Beat] {
        self.library.beats()
    }

    pub fn get_beat(&self, id: &BeatId) -> Option<&Beat> {
        self.library.get_beat_by_id(id)
    }

    pub fn get_selected_beat(&self) -> Result<Beat> {
        self.beats()
            .get(self.display_state.selected())
            .cloned()
            .ok_or_else(|| anyhow!("No beat selected!"))
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode
    }

    pub fn set_error(&mut self, e: Error) {
        tracing::warn!("{e:#}");
        self.show_popup(PopupType::Error(format!("{e:#}")));
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.popup.current {
            PopupType::Error(e) => Some(e.as_str()),
            _ => None,
        }
    }

    pub fn soft_reset(&mut self) {
        if self.popup.is_open() {
            self.close_popup();
        }
    }
}
