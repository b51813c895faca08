mod layout;
mod renderer;
mod widgets;

pub use layout::AppLayout;
pub use renderer::render;
pub use widgets::{BeatList, BufferLine, DISMISS_HINT, ErrorPopup, Header};

/// Screen title shown in the header bar.
pub const SCREEN_TITLE: &str = "BeatStream";
