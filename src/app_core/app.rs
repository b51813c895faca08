use crate::{
    Library,
    config::Config,
    key_handler::{self, Action},
    library::{CatalogProvider, SampleCatalog},
    overwrite_line,
    player::PlayerHandle,
    tui,
    ui_state::{Mode, Theme, UiState},
};
use anyhow::{Error, Result};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event, KeyEventKind},
};

pub struct BeatStream {
    ui: UiState,
    player: PlayerHandle,
}

impl BeatStream {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_catalog(config, &SampleCatalog)
    }

    pub fn with_catalog(config: &Config, catalog: &dyn CatalogProvider) -> Result<Self> {
        let library = Library::load(catalog)?;

        let (theme, theme_error) = match Theme::try_from(&config.theme) {
            Ok(theme) => (theme, None),
            Err(e) => (Theme::default(), Some(e)),
        };

        let mut app = Self::from_parts(UiState::new(library, theme), PlayerHandle::spawn(config));
        if let Some(e) = theme_error {
            app.report(e.context("Falling back to the default theme"));
        }

        Ok(app)
    }

    pub(crate) fn from_parts(ui: UiState, player: PlayerHandle) -> Self {
        BeatStream { ui, player }
    }

    /// Show an error in the popup on the next frame.
    pub fn report(&mut self, e: Error) {
        self.ui.set_error(e);
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let result = self.main_loop(&mut terminal);

        overwrite_line("Stopping playback...");
        self.player.shutdown();
        ratatui::restore();
        overwrite_line("Thanks for listening!\n");

        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            self.sync_player();

            match key_handler::next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                _ => (),
            }

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::QUIT {
                break;
            }
        }
        Ok(())
    }

    fn sync_player(&mut self) {
        for event in self.player.poll_events() {
            self.ui.handle_player_event(event);
        }
    }
}

impl BeatStream {
    #[rustfmt::skip]
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Toggle          => self.toggle_selected()?,
            Action::ToggleAt(idx)   => self.toggle_at(idx)?,
            Action::Scroll(d)       => self.ui.scroll(d),
            Action::SoftReset       => self.ui.soft_reset(),
            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }
        Ok(())
    }

    fn toggle_selected(&mut self) -> Result<()> {
        let beat = self.ui.get_selected_beat()?;
        self.player.select(beat)
    }

    fn toggle_at(&mut self, idx: usize) -> Result<()> {
        if idx >= self.ui.beats().len() {
            return Ok(());
        }
        self.ui.select_index(idx);
        self.toggle_selected()
    }
}
