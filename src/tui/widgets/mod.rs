mod beat_list;
mod buffer_line;
mod error;
mod header;

pub use beat_list::BeatList;
pub use buffer_line::BufferLine;
pub use error::{DISMISS_HINT, ErrorPopup};
pub use header::Header;

const NOW_PLAYING_ICON: &str = "♪";
const WARNING_ICON: &str = "⚠";
