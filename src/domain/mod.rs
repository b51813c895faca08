mod beat;

pub use beat::{Beat, BeatId};
