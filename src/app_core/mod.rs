mod app;
pub use app::BeatStream;
