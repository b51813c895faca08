//! Recording backend used by the player tests.

use super::{AudioBackend, AudioError, HandleId, SoundHandle};
use crossbeam_channel::Sender;
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Acquire(String),
    Play(HandleId),
    Stop(HandleId),
    Release(HandleId),
    OnComplete(HandleId),
}

#[derive(Default)]
struct MockState {
    calls: Vec<Call>,
    live: HashMap<HandleId, String>,
    notifiers: HashMap<HandleId, Sender<HandleId>>,
    last_notifier: Option<Sender<HandleId>>,
    failing_locators: HashSet<String>,
    failing_plays: HashSet<String>,
    fail_release: bool,
    acquire_delay: Option<Duration>,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn releases(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Release(_)))
            .count()
    }

    pub fn live_handles(&self) -> usize {
        self.state().live.len()
    }

    pub fn handle_for(&self, locator: &str) -> Option<HandleId> {
        self.state()
            .live
            .iter()
            .find(|(_, l)| l.as_str() == locator)
            .map(|(id, _)| *id)
    }

    pub fn fail_acquire(&self, locator: &str) {
        self.state().failing_locators.insert(locator.to_string());
    }

    pub fn fail_play(&self, locator: &str) {
        self.state().failing_plays.insert(locator.to_string());
    }

    pub fn fail_release(&self, fail: bool) {
        self.state().fail_release = fail;
    }

    pub fn delay_acquire(&self, delay: Duration) {
        self.state().acquire_delay = Some(delay);
    }

    /// Simulate the sound for `locator` reaching its natural end.
    pub fn finish(&self, locator: &str) -> bool {
        let mut state = self.state();
        let id = state
            .live
            .iter()
            .find(|(_, l)| l.as_str() == locator)
            .map(|(id, _)| *id);

        match id.and_then(|id| state.notifiers.remove(&id).map(|tx| (id, tx))) {
            Some((id, tx)) => tx.send(id).is_ok(),
            None => false,
        }
    }

    /// Deliver a completion for an arbitrary id, bypassing the one-shot rules.
    pub fn send_raw_completion(&self, id: HandleId) {
        if let Some(tx) = &self.state().last_notifier {
            let _ = tx.send(id);
        }
    }
}

impl AudioBackend for MockBackend {
    fn acquire(&mut self, locator: &str) -> Result<SoundHandle, AudioError> {
        let delay = self.state().acquire_delay;
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }

        let mut state = self.state();
        state.calls.push(Call::Acquire(locator.to_string()));

        if state.failing_locators.contains(locator) {
            return Err(AudioError::Decode(format!("cannot decode {locator}")));
        }

        let handle = SoundHandle::mint();
        state.live.insert(handle.id(), locator.to_string());
        Ok(handle)
    }

    fn play(&mut self, handle: &SoundHandle) -> Result<(), AudioError> {
        let mut state = self.state();
        state.calls.push(Call::Play(handle.id()));

        match state.live.get(&handle.id()) {
            Some(l) if state.failing_plays.contains(l) => {
                Err(AudioError::Output("device lost".to_string()))
            }
            Some(_) => Ok(()),
            None => Err(AudioError::UnknownHandle(handle.id())),
        }
    }

    fn stop(&mut self, handle: &SoundHandle) -> Result<(), AudioError> {
        let mut state = self.state();
        state.calls.push(Call::Stop(handle.id()));
        state.notifiers.remove(&handle.id());

        match state.fail_release {
            true => Err(AudioError::Output("stop failed".to_string())),
            false => Ok(()),
        }
    }

    fn release(&mut self, handle: SoundHandle) -> Result<(), AudioError> {
        let mut state = self.state();
        state.calls.push(Call::Release(handle.id()));
        state.notifiers.remove(&handle.id());

        if state.fail_release {
            return Err(AudioError::Output("unload failed".to_string()));
        }

        state
            .live
            .remove(&handle.id())
            .map(|_| ())
            .ok_or(AudioError::UnknownHandle(handle.id()))
    }

    fn on_complete(&mut self, handle: &SoundHandle, notify: Sender<HandleId>) {
        let mut state = self.state();
        state.calls.push(Call::OnComplete(handle.id()));
        state.last_notifier = Some(notify.clone());
        state.notifiers.insert(handle.id(), notify);
    }
}
