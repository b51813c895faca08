use beatstream::{Config, app_core::BeatStream, logging};

fn main() -> anyhow::Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Some(path) = logging::init(&config) {
        tracing::info!(log = %path.display(), "beatstream starting");
    }

    let mut app = BeatStream::new(&config)?;
    if let Some(e) = config_error {
        app.report(e.context("Using default settings"));
    }

    app.run()
}
