mod display_state;
mod mode;
mod playback;
mod popup;
mod theme;
mod ui_state;

pub use display_state::DisplayState;
pub use mode::Mode;
pub use playback::{LABEL_LOADING, LABEL_PAUSE, LABEL_PLAY, PlaybackView};
pub use popup::{PopupState, PopupType};
pub use theme::{Theme, ThemeImport};
pub use ui_state::UiState;
