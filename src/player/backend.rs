use crossbeam_channel::Sender;
use std::{
    fmt::Display,
    sync::atomic::{AtomicU64, Ordering},
};
use thiserror::Error;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an acquired sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandleId(u64);

impl Display for HandleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An acquired, playable sound.
///
/// Not `Clone`: `AudioBackend::release` consumes it, so a handle is released
/// at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct SoundHandle {
    id: HandleId,
}

impl SoundHandle {
    /// Mint a handle with a fresh id. Backends call this from `acquire`.
    pub fn mint() -> Self {
        SoundHandle {
            id: HandleId(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed)),
        }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Unsupported preview location: {0}")]
    UnsupportedLocator(String),

    #[error("Could not fetch preview: {0}")]
    Http(#[from] ureq::Error),

    #[error("Could not read preview: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preview exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("Could not decode preview: {0}")]
    Decode(String),

    #[error("Audio output error: {0}")]
    Output(String),

    #[error("Unknown sound handle {0}")]
    UnknownHandle(HandleId),
}

/// Platform audio subsystem consumed by the playback coordinator.
///
/// Every call is made from the player thread. `on_complete` registers a
/// one-shot notification: the backend sends the handle's id on `notify` once
/// the sound reaches its natural end. A sound that is stopped or released
/// before that point must not notify.
pub trait AudioBackend {
    fn acquire(&mut self, locator: &str) -> Result<SoundHandle, AudioError>;
    fn play(&mut self, handle: &SoundHandle) -> Result<(), AudioError>;
    fn stop(&mut self, handle: &SoundHandle) -> Result<(), AudioError>;
    fn release(&mut self, handle: SoundHandle) -> Result<(), AudioError>;
    fn on_complete(&mut self, handle: &SoundHandle, notify: Sender<HandleId>);
}
