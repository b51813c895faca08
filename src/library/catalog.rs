use crate::domain::Beat;
use anyhow::Result;

/// Source of the beats shown on the home screen.
///
/// Anything able to produce an ordered list of beats can stand in here, a
/// remote catalog service included.
pub trait CatalogProvider {
    fn beats(&self) -> Result<Vec<Beat>>;
}

/// The fixed catalog bundled with the app.
pub struct SampleCatalog;

impl CatalogProvider for SampleCatalog {
    fn beats(&self) -> Result<Vec<Beat>> {
        Ok(vec![
            Beat::new(
                "1",
                "Midnight Drive",
                "DJ Nova",
                140,
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
            ),
            Beat::new(
                "2",
                "Trap Sky",
                "808 Kid",
                150,
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
            ),
        ])
    }
}
