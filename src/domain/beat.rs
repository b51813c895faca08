use std::{fmt::Display, sync::Arc};

/// Opaque catalog identifier of a beat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeatId(Arc<str>);

impl BeatId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        BeatId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BeatId {
    fn from(id: &str) -> Self {
        BeatId::new(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Beat {
    pub(crate) id: BeatId,
    pub(crate) title: String,
    pub(crate) producer: String,
    pub(crate) bpm: u32,
    pub(crate) preview_url: String,
}

impl Beat {
    pub fn new(
        id: impl Into<BeatId>,
        title: impl Into<String>,
        producer: impl Into<String>,
        bpm: u32,
        preview_url: impl Into<String>,
    ) -> Self {
        Beat {
            id: id.into(),
            title: title.into(),
            producer: producer.into(),
            bpm,
            preview_url: preview_url.into(),
        }
    }

    pub fn id(&self) -> &BeatId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    /// Secondary line shown under the title, e.g. `by DJ Nova • 140 BPM`
    pub fn byline(&self) -> String {
        format!("by {} • {} BPM", self.producer, self.bpm)
    }
}
