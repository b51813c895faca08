mod backend;
mod backend_rodio;
mod completion_source;
mod coordinator;
mod core;
mod handle;
mod locator;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::{AudioBackend, AudioError, HandleId, SoundHandle};
pub use backend_rodio::RodioBackend;
pub use coordinator::{PlaybackCoordinator, PlaybackError, Selection};
pub use handle::PlayerHandle;
pub use locator::PreviewLocator;

use crate::domain::{Beat, BeatId};

pub enum PlayerCommand {
    Select(Beat),
    Shutdown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Work on this beat has begun; any previous preview is on its way out.
    Loading(BeatId),
    Started(BeatId),
    Stopped(BeatId),
    Finished(BeatId),
    Failed { beat: BeatId, message: String },
    BackendUnavailable(String),
}
