use super::{
    AudioBackend, AudioError, HandleId, PreviewLocator, SoundHandle,
    completion_source::{CompletionSlot, CompletionSource},
};
use crossbeam_channel::Sender;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::{
    collections::HashMap,
    io::Cursor,
    sync::{Arc, Mutex},
    time::Duration,
};

struct LoadedSound {
    sink: Sink,
    on_complete: CompletionSlot,
}

pub struct RodioBackend {
    sounds: HashMap<HandleId, LoadedSound>,
    agent: ureq::Agent,
    max_preview_bytes: u64,
    stream: OutputStream,
}

impl RodioBackend {
    pub fn new(fetch_timeout: Duration, max_preview_bytes: u64) -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Output(e.to_string()))?;

        let config = ureq::Agent::config_builder()
            .timeout_global(Some(fetch_timeout))
            .build();

        Ok(Self {
            sounds: HashMap::new(),
            agent: ureq::Agent::new_with_config(config),
            max_preview_bytes,
            stream,
        })
    }

    fn fetch(&self, locator: &PreviewLocator) -> Result<Vec<u8>, AudioError> {
        match locator {
            PreviewLocator::Remote(url) => {
                let mut resp = self.agent.get(url.as_str()).call()?;
                resp.body_mut()
                    .with_config()
                    .limit(self.max_preview_bytes)
                    .read_to_vec()
                    .map_err(|e| match e {
                        ureq::Error::BodyExceedsLimit(_) => AudioError::TooLarge {
                            limit: self.max_preview_bytes,
                        },
                        other => AudioError::Http(other),
                    })
            }
            PreviewLocator::Local(path) => {
                let len = std::fs::metadata(path)?.len();
                if len > self.max_preview_bytes {
                    return Err(AudioError::TooLarge {
                        limit: self.max_preview_bytes,
                    });
                }
                Ok(std::fs::read(path)?)
            }
        }
    }

    fn sound(&self, handle: &SoundHandle) -> Result<&LoadedSound, AudioError> {
        self.sounds
            .get(&handle.id())
            .ok_or(AudioError::UnknownHandle(handle.id()))
    }
}

impl AudioBackend for RodioBackend {
    fn acquire(&mut self, locator: &str) -> Result<SoundHandle, AudioError> {
        let locator = PreviewLocator::parse(locator)?;
        let bytes = self.fetch(&locator)?;
        let source = decode(bytes, locator.format_hint())?;

        let handle = SoundHandle::mint();
        let on_complete: CompletionSlot = Arc::new(Mutex::new(None));

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(CompletionSource::new(
            source,
            handle.id(),
            Arc::clone(&on_complete),
        ));

        tracing::debug!(handle = %handle.id(), ?locator, "preview loaded");
        self.sounds.insert(handle.id(), LoadedSound { sink, on_complete });

        Ok(handle)
    }

    fn play(&mut self, handle: &SoundHandle) -> Result<(), AudioError> {
        self.sound(handle)?.sink.play();
        Ok(())
    }

    fn stop(&mut self, handle: &SoundHandle) -> Result<(), AudioError> {
        let sound = self.sound(handle)?;

        // Stopping is not a natural end
        if let Ok(mut slot) = sound.on_complete.lock() {
            slot.take();
        }
        sound.sink.stop();
        Ok(())
    }

    fn release(&mut self, handle: SoundHandle) -> Result<(), AudioError> {
        let sound = self
            .sounds
            .remove(&handle.id())
            .ok_or(AudioError::UnknownHandle(handle.id()))?;

        if let Ok(mut slot) = sound.on_complete.lock() {
            slot.take();
        }
        drop(sound.sink);
        Ok(())
    }

    fn on_complete(&mut self, handle: &SoundHandle, notify: Sender<HandleId>) {
        match self.sounds.get(&handle.id()) {
            Some(sound) => {
                if let Ok(mut slot) = sound.on_complete.lock() {
                    *slot = Some(notify);
                }
            }
            None => tracing::warn!(handle = %handle.id(), "completion requested for unknown sound"),
        }
    }
}

fn decode(bytes: Vec<u8>, hint: Option<&str>) -> Result<Decoder<Cursor<Vec<u8>>>, AudioError> {
    let len = bytes.len() as u64;

    let mut builder = Decoder::builder()
        .with_data(Cursor::new(bytes))
        .with_byte_len(len)
        .with_seekable(true);

    if let Some(hint) = hint {
        builder = builder.with_hint(hint);
    }

    builder.build().map_err(|e| AudioError::Decode(e.to_string()))
}
