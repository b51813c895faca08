use super::{AudioBackend, AudioError, HandleId, SoundHandle};
use crate::domain::{Beat, BeatId};
use crossbeam_channel::{Receiver, Sender, unbounded};
use thiserror::Error;

/// Outcome of a `select_beat` call.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    /// Preview for this beat is now playing from the start.
    Started(BeatId),
    /// The beat was already active and has been stopped.
    Stopped(BeatId),
    /// The preview was acquired but not started because a newer intent was
    /// already waiting. It is the active session until that intent runs.
    Deferred(BeatId),
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Could not load preview for beat {beat}: {source}")]
    Acquire {
        beat: BeatId,
        #[source]
        source: AudioError,
    },

    #[error("Could not start preview for beat {beat}: {source}")]
    Start {
        beat: BeatId,
        #[source]
        source: AudioError,
    },
}

impl PlaybackError {
    pub fn beat(&self) -> &BeatId {
        match self {
            PlaybackError::Acquire { beat, .. } | PlaybackError::Start { beat, .. } => beat,
        }
    }
}

struct Session {
    beat_id: BeatId,
    handle: SoundHandle,
}

/// Owns the single playback session and keeps it in step with the backend.
///
/// At most one sound is alive at any time: the previous sound is stopped and
/// released before a new one is acquired. Completion notices are matched
/// against the current handle's id, so a notice from a sound that was already
/// replaced or released has no effect.
pub struct PlaybackCoordinator<B: AudioBackend> {
    backend: B,
    session: Option<Session>,
    completion_tx: Sender<HandleId>,
    completion_rx: Receiver<HandleId>,
}

impl<B: AudioBackend> PlaybackCoordinator<B> {
    pub fn new(backend: B) -> Self {
        let (completion_tx, completion_rx) = unbounded();

        PlaybackCoordinator {
            backend,
            session: None,
            completion_tx,
            completion_rx,
        }
    }

    pub fn active_beat(&self) -> Option<&BeatId> {
        self.session.as_ref().map(|s| &s.beat_id)
    }

    pub fn is_active(&self, id: &BeatId) -> bool {
        self.active_beat() == Some(id)
    }

    pub fn select_beat(&mut self, beat: &Beat) -> Result<Selection, PlaybackError> {
        self.select_beat_unless(beat, || false)
    }

    /// Like `select_beat`, but `superseded` is asked once the new preview has
    /// been acquired. When it answers `true` the preview is kept as the
    /// session without being started.
    pub fn select_beat_unless<F>(
        &mut self,
        beat: &Beat,
        superseded: F,
    ) -> Result<Selection, PlaybackError>
    where
        F: FnOnce() -> bool,
    {
        if self.is_active(beat.id()) {
            self.release_session();
            tracing::info!(beat = %beat.id(), "preview stopped");
            return Ok(Selection::Stopped(beat.id().clone()));
        }

        self.release_session();

        let handle = self
            .backend
            .acquire(beat.preview_url())
            .map_err(|source| PlaybackError::Acquire {
                beat: beat.id().clone(),
                source,
            })?;

        if superseded() {
            tracing::debug!(beat = %beat.id(), handle = %handle.id(), "acquired preview superseded");
            self.session = Some(Session {
                beat_id: beat.id().clone(),
                handle,
            });
            return Ok(Selection::Deferred(beat.id().clone()));
        }

        self.backend
            .on_complete(&handle, self.completion_tx.clone());

        if let Err(source) = self.backend.play(&handle) {
            self.discard(handle);
            return Err(PlaybackError::Start {
                beat: beat.id().clone(),
                source,
            });
        }

        tracing::info!(beat = %beat.id(), handle = %handle.id(), "preview started");
        self.session = Some(Session {
            beat_id: beat.id().clone(),
            handle,
        });

        Ok(Selection::Started(beat.id().clone()))
    }

    /// Drain pending completion notices. Returns the beat whose preview ran
    /// to its end, if that preview was still the active one.
    pub fn poll_completions(&mut self) -> Option<BeatId> {
        let mut finished = None;

        while let Ok(id) = self.completion_rx.try_recv() {
            if let Some(beat) = self.handle_completion(id) {
                finished = Some(beat);
            }
        }

        finished
    }

    pub fn handle_completion(&mut self, id: HandleId) -> Option<BeatId> {
        let is_current = self.session.as_ref().is_some_and(|s| s.handle.id() == id);

        if !is_current {
            tracing::trace!(handle = %id, "ignoring stale completion");
            return None;
        }

        let beat = self.release_session();
        tracing::info!(beat = ?beat, "preview finished");
        beat
    }

    /// Release whatever is playing. Safe to call repeatedly.
    pub fn teardown(&mut self) -> Option<BeatId> {
        self.release_session()
    }

    fn release_session(&mut self) -> Option<BeatId> {
        let session = self.session.take()?;
        self.discard(session.handle);
        Some(session.beat_id)
    }

    // Failures here never block forming a new session
    fn discard(&mut self, handle: SoundHandle) {
        let id = handle.id();

        if let Err(e) = self.backend.stop(&handle) {
            tracing::debug!(handle = %id, "stop failed: {e}");
        }
        if let Err(e) = self.backend.release(handle) {
            tracing::debug!(handle = %id, "release failed: {e}");
        }
    }
}

impl<B: AudioBackend> Drop for PlaybackCoordinator<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
