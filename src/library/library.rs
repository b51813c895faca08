use super::CatalogProvider;
use crate::domain::{Beat, BeatId};
use anyhow::{Result, bail};
use std::collections::HashSet;

pub struct Library {
    beats: Vec<Beat>,
}

impl Library {
    pub fn load(provider: &dyn CatalogProvider) -> Result<Self> {
        let beats = provider.beats()?;

        let mut seen = HashSet::with_capacity(beats.len());
        for beat in &beats {
            if !seen.insert(beat.id()) {
                bail!("Catalog contains duplicate beat id: {}", beat.id());
            }
        }

        tracing::debug!(count = beats.len(), "catalog loaded");
        Ok(Library { beats })
    }

    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    pub fn get_beat_by_id(&self, id: &BeatId) -> Option<&Beat> {
        self.beats.iter().find(|b| b.id() == id)
    }
}
