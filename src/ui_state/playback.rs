use super::UiState;
use crate::{domain::BeatId, player::PlayerEvent};
use std::collections::HashMap;

pub const LABEL_PLAY: &str = "Play Preview";
pub const LABEL_PAUSE: &str = "Pause";
pub const LABEL_LOADING: &str = "Loading…";

/// The UI's copy of the player thread's session, rebuilt from player events.
#[derive(Default)]
pub struct PlaybackView {
    active: Option<BeatId>,
    loading: Option<BeatId>,
    failures: HashMap<BeatId, String>,
}

impl PlaybackView {
    pub fn active(&self) -> Option<&BeatId> {
        self.active.as_ref()
    }

    pub fn loading(&self) -> Option<&BeatId> {
        self.loading.as_ref()
    }

    pub fn failure(&self, id: &BeatId) -> Option<&str> {
        self.failures.get(id).map(String::as_str)
    }

    pub fn button_label(&self, id: &BeatId) -> &'static str {
        if self.loading.as_ref() == Some(id) {
            LABEL_LOADING
        } else if self.active.as_ref() == Some(id) {
            LABEL_PAUSE
        } else {
            LABEL_PLAY
        }
    }

    fn clear_if(slot: &mut Option<BeatId>, id: &BeatId) {
        if slot.as_ref() == Some(id) {
            *slot = None;
        }
    }

    /// Returns a message that deserves a popup, if any.
    pub fn apply(&mut self, event: PlayerEvent) -> Option<String> {
        match event {
            PlayerEvent::Loading(id) => {
                // The player releases the old preview before loading
                self.active = None;
                self.failures.remove(&id);
                self.loading = Some(id);
            }
            PlayerEvent::Started(id) => {
                Self::clear_if(&mut self.loading, &id);
                self.active = Some(id);
            }
            PlayerEvent::Stopped(id) | PlayerEvent::Finished(id) => {
                Self::clear_if(&mut self.active, &id);
                Self::clear_if(&mut self.loading, &id);
            }
            PlayerEvent::Failed { beat, message } => {
                Self::clear_if(&mut self.loading, &beat);
                self.active = None;
                self.failures.insert(beat, message);
            }
            PlayerEvent::BackendUnavailable(reason) => {
                self.active = None;
                self.loading = None;
                return Some(format!("Audio output unavailable!\n\n{reason}"));
            }
        }
        None
    }
}

impl UiState {
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        if let Some(msg) = self.playback.apply(event) {
            self.set_error(anyhow::anyhow!(msg));
        }
    }

    pub fn is_active(&self, id: &BeatId) -> bool {
        self.playback.active() == Some(id)
    }
}
