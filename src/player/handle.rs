use super::{AudioBackend, AudioError, PlayerCommand, PlayerEvent, RodioBackend, core::PlayerCore};
use crate::{config::Config, domain::Beat};
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::thread::JoinHandle;

/// UI-side end of the player thread.
pub struct PlayerHandle {
    commands: Sender<PlayerCommand>,
    events: Receiver<PlayerEvent>,
    thread: Option<JoinHandle<()>>,
}

impl PlayerHandle {
    pub fn spawn(config: &Config) -> Self {
        let timeout = config.fetch_timeout();
        let max_bytes = config.max_preview_bytes();

        Self::spawn_with(move || RodioBackend::new(timeout, max_bytes))
    }

    pub fn spawn_with<B, F>(make_backend: F) -> Self
    where
        B: AudioBackend + 'static,
        F: FnOnce() -> Result<B, AudioError> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();

        let thread = PlayerCore::spawn(make_backend, cmd_rx, evt_tx);

        Self {
            commands: cmd_tx,
            events: evt_rx,
            thread: Some(thread),
        }
    }

    /// Play `beat`, or stop it if it is the one already playing.
    pub fn select(&self, beat: Beat) -> Result<()> {
        self.commands.send(PlayerCommand::Select(beat))?;
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<PlayerEvent> {
        std::iter::from_fn(|| self.events.try_recv().ok()).collect()
    }

    /// Stop the player thread, releasing any sound still loaded. Blocks
    /// until the thread has exited.
    pub fn shutdown(&mut self) {
        let _ = self.commands.send(PlayerCommand::Shutdown);

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("player thread panicked");
            }
        }
    }
}

impl Drop for PlayerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::BeatId,
        player::mock::{Call, MockBackend},
    };
    use std::time::Duration;

    fn beat(id: &str) -> Beat {
        Beat::new(id, format!("Beat {id}"), "Producer", 120, format!("mem://{id}"))
    }

    fn spawn_mock() -> (PlayerHandle, MockBackend) {
        let mock = MockBackend::new();
        let backend = mock.clone();
        (PlayerHandle::spawn_with(move || Ok(backend)), mock)
    }

    fn plays(mock: &MockBackend) -> usize {
        mock.calls()
            .iter()
            .filter(|c| matches!(c, Call::Play(_)))
            .count()
    }

    fn next_event(player: &PlayerHandle) -> PlayerEvent {
        player
            .events
            .recv_timeout(Duration::from_secs(2))
            .expect("player event")
    }

    #[test]
    fn select_then_reselect_reports_start_and_stop() {
        let (player, mock) = spawn_mock();

        player.select(beat("1")).unwrap();
        assert_eq!(next_event(&player), PlayerEvent::Loading("1".into()));
        assert_eq!(next_event(&player), PlayerEvent::Started("1".into()));

        player.select(beat("1")).unwrap();
        assert_eq!(next_event(&player), PlayerEvent::Stopped("1".into()));

        assert_eq!(mock.releases(), 1);
        assert_eq!(mock.live_handles(), 0);
    }

    #[test]
    fn natural_end_is_reported_without_user_action() {
        let (player, mock) = spawn_mock();

        player.select(beat("1")).unwrap();
        next_event(&player);
        next_event(&player);

        assert!(mock.finish("mem://1"));
        assert_eq!(next_event(&player), PlayerEvent::Finished("1".into()));
        assert_eq!(mock.live_handles(), 0);
    }

    #[test]
    fn shutdown_releases_the_playing_sound() {
        let (mut player, mock) = spawn_mock();

        player.select(beat("1")).unwrap();
        next_event(&player);
        next_event(&player);

        player.shutdown();

        assert_eq!(player.poll_events(), [PlayerEvent::Stopped("1".into())]);
        assert_eq!(mock.releases(), 1);
        assert_eq!(mock.live_handles(), 0);

        // A second shutdown (and the drop after it) does nothing more
        player.shutdown();
        drop(player);
        assert_eq!(mock.releases(), 1);
    }

    #[test]
    fn failed_load_is_reported_per_beat() {
        let (player, mock) = spawn_mock();
        mock.fail_acquire("mem://2");

        player.select(beat("2")).unwrap();
        assert_eq!(next_event(&player), PlayerEvent::Loading("2".into()));

        match next_event(&player) {
            PlayerEvent::Failed { beat, message } => {
                assert_eq!(beat, BeatId::from("2"));
                assert!(message.contains("cannot decode"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn queued_selection_supersedes_pending_load() {
        let (player, mock) = spawn_mock();
        mock.delay_acquire(Duration::from_millis(150));

        player.select(beat("1")).unwrap();
        player.select(beat("2")).unwrap();

        let events = (0..3).map(|_| next_event(&player)).collect::<Vec<_>>();
        assert_eq!(
            events,
            [
                PlayerEvent::Loading("1".into()),
                PlayerEvent::Loading("2".into()),
                PlayerEvent::Started("2".into()),
            ]
        );

        assert_eq!(plays(&mock), 1);
        assert_eq!(mock.live_handles(), 1);
        assert!(mock.handle_for("mem://2").is_some());
    }

    #[test]
    fn shutdown_while_loading_releases_the_late_sound() {
        let (mut player, mock) = spawn_mock();
        mock.delay_acquire(Duration::from_millis(200));

        player.select(beat("1")).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        player.shutdown();

        assert_eq!(
            player.poll_events(),
            [
                PlayerEvent::Loading("1".into()),
                PlayerEvent::Stopped("1".into()),
            ]
        );
        let calls = mock.calls();
        let Some(Call::Release(id)) = calls.last().cloned() else {
            panic!("late sound was not released: {calls:?}");
        };
        assert_eq!(
            calls,
            [Call::Acquire("mem://1".to_string()), Call::Stop(id), Call::Release(id)]
        );
        assert_eq!(plays(&mock), 0);
        assert_eq!(mock.releases(), 1);
        assert_eq!(mock.live_handles(), 0);
    }

    #[test]
    fn double_tap_while_loading_leaves_nothing_playing() {
        let (mut player, mock) = spawn_mock();
        mock.delay_acquire(Duration::from_millis(150));

        player.select(beat("1")).unwrap();
        player.select(beat("1")).unwrap();

        assert_eq!(next_event(&player), PlayerEvent::Loading("1".into()));
        assert_eq!(next_event(&player), PlayerEvent::Stopped("1".into()));

        player.shutdown();
        assert!(player.poll_events().is_empty());
        assert_eq!(plays(&mock), 0);
        assert_eq!(mock.releases(), 1);
        assert_eq!(mock.live_handles(), 0);
    }

    #[test]
    fn missing_backend_fails_every_selection() {
        let mut player = PlayerHandle::spawn_with(|| -> Result<MockBackend, AudioError> {
            Err(AudioError::Output("no device".to_string()))
        });

        assert_eq!(
            next_event(&player),
            PlayerEvent::BackendUnavailable("Audio output error: no device".to_string())
        );

        player.select(beat("1")).unwrap();
        assert!(matches!(next_event(&player), PlayerEvent::Failed { .. }));

        player.shutdown();
    }
}
