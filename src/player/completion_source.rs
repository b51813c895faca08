use super::HandleId;
use crossbeam_channel::Sender;
use rodio::{ChannelCount, SampleRate, Source};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

/// Slot filled by `AudioBackend::on_complete` and emptied on first use.
pub(crate) type CompletionSlot = Arc<Mutex<Option<Sender<HandleId>>>>;

/// Passes samples through untouched and reports the end of the stream once.
///
/// Dropping the source early (stop, release) never reports anything.
pub struct CompletionSource<I> {
    input: I,
    id: HandleId,
    slot: CompletionSlot,
}

impl<I> CompletionSource<I> {
    pub fn new(input: I, id: HandleId, slot: CompletionSlot) -> Self {
        CompletionSource { input, id, slot }
    }

    fn notify(&self) {
        let notify = self.slot.lock().ok().and_then(|mut s| s.take());
        if let Some(tx) = notify {
            let _ = tx.send(self.id);
        }
    }
}

impl<I> Iterator for CompletionSource<I>
where
    I: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        match self.input.next() {
            Some(sample) => Some(sample),
            None => {
                self.notify();
                None
            }
        }
    }
}

impl<I> Source for CompletionSource<I>
where
    I: Source<Item = f32>,
{
    fn current_span_len(&self) -> Option<usize> {
        self.input.current_span_len()
    }

    fn channels(&self) -> ChannelCount {
        self.input.channels()
    }

    fn sample_rate(&self) -> SampleRate {
        self.input.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.input.total_duration()
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), rodio::source::SeekError> {
        self.input.try_seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::SoundHandle;
    use crossbeam_channel::unbounded;
    use rodio::buffer::SamplesBuffer;

    #[test]
    fn reports_end_of_stream_once() {
        let id = SoundHandle::mint().id();
        let (tx, rx) = unbounded();
        let slot: CompletionSlot = Arc::new(Mutex::new(Some(tx)));

        let input = SamplesBuffer::new(1, 8_000, vec![0.1_f32, 0.2, 0.3]);
        let mut source = CompletionSource::new(input, id, Arc::clone(&slot));

        assert_eq!(source.by_ref().count(), 3);
        assert_eq!(source.next(), None);

        assert_eq!(rx.try_recv(), Ok(id));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn unregistered_source_stays_silent() {
        let id = SoundHandle::mint().id();
        let slot: CompletionSlot = Arc::new(Mutex::new(None));

        let input = SamplesBuffer::new(1, 8_000, vec![0.5_f32]);
        let source = CompletionSource::new(input, id, slot);

        assert_eq!(source.count(), 1);
    }
}
