use super::{
    AudioBackend, AudioError, PlaybackCoordinator, PlayerCommand, PlayerEvent, Selection,
};
use crate::{REFRESH_RATE, domain::Beat};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

pub struct PlayerCore<B: AudioBackend> {
    coordinator: PlaybackCoordinator<B>,
    commands: Receiver<PlayerCommand>,
    events: Sender<PlayerEvent>,
}

impl<B: AudioBackend> PlayerCore<B> {
    /// Start the player thread. The backend is built on that thread since
    /// audio output streams cannot always move between threads.
    pub fn spawn<F>(
        make_backend: F,
        commands: Receiver<PlayerCommand>,
        events: Sender<PlayerEvent>,
    ) -> JoinHandle<()>
    where
        F: FnOnce() -> Result<B, AudioError> + Send + 'static,
        B: 'static,
    {
        thread::spawn(move || match make_backend() {
            Ok(backend) => {
                let mut core = PlayerCore {
                    coordinator: PlaybackCoordinator::new(backend),
                    commands,
                    events,
                };
                core.run();
            }
            Err(e) => {
                tracing::error!("audio backend unavailable: {e}");
                let _ = events.send(PlayerEvent::BackendUnavailable(e.to_string()));
                refuse_commands(&commands, &events, &e.to_string());
            }
        })
    }

    fn run(&mut self) {
        while self.process_commands() {
            if let Some(beat) = self.coordinator.poll_completions() {
                self.emit(PlayerEvent::Finished(beat));
            }
            thread::sleep(Duration::from_millis(REFRESH_RATE));
        }

        if let Some(beat) = self.coordinator.teardown() {
            self.emit(PlayerEvent::Stopped(beat));
        }
        tracing::debug!("player thread exiting");
    }

    /// Returns `false` once the player should shut down.
    fn process_commands(&mut self) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(PlayerCommand::Select(beat)) => self.select(beat),
                Ok(PlayerCommand::Shutdown) | Err(TryRecvError::Disconnected) => return false,
                Err(TryRecvError::Empty) => return true,
            }
        }
    }

    fn select(&mut self, beat: Beat) {
        if !self.coordinator.is_active(beat.id()) {
            self.emit(PlayerEvent::Loading(beat.id().clone()));
        }

        let commands = &self.commands;
        let outcome = self
            .coordinator
            .select_beat_unless(&beat, || !commands.is_empty());

        match outcome {
            Ok(Selection::Started(id)) => self.emit(PlayerEvent::Started(id)),
            // Never heard; the queued command reports what happens to it
            Ok(Selection::Deferred(_)) => (),
            Ok(Selection::Stopped(id)) => self.emit(PlayerEvent::Stopped(id)),
            Err(e) => {
                tracing::warn!("{e}");
                self.emit(PlayerEvent::Failed {
                    beat: e.beat().clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.events.send(event);
    }
}

fn refuse_commands(commands: &Receiver<PlayerCommand>, events: &Sender<PlayerEvent>, reason: &str) {
    while let Ok(cmd) = commands.recv() {
        match cmd {
            PlayerCommand::Select(beat) => {
                let _ = events.send(PlayerEvent::Failed {
                    beat: beat.id().clone(),
                    message: format!("No audio output: {reason}"),
                });
            }
            PlayerCommand::Shutdown => break,
        }
    }
}
