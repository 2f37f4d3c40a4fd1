//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance from stored configuration
//! - `with_config()` - Creates an instance from an explicit configuration
//! - `run()` - Main event loop

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::{HttpConfig, ParsePointClient};
use crate::domain::ChartData;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, NavigationState, StartupOptions, SummaryStore, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration from disk.
    ///
    /// # Errors
    /// Returns an error if initialization fails.
    pub fn new(startup_options: StartupOptions) -> Result<Self> {
        let config = AppConfig::load();
        let config_path = match AppConfig::config_path() {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!("theme changes will not be persisted: {err}");
                None
            }
        };
        Ok(Self::with_config(config, startup_options, config_path))
    }

    /// Creates an App from an explicit configuration.
    ///
    /// Startup options override `config` for this session. Theme toggles are
    /// written to `config_path` when present.
    #[must_use]
    pub fn with_config(
        config: AppConfig,
        startup_options: StartupOptions,
        config_path: Option<PathBuf>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let endpoint = startup_options.endpoint.unwrap_or(config.endpoint);
        let schema = startup_options.schema.unwrap_or(config.schema);
        let timeout_secs = startup_options.timeout_secs.unwrap_or(config.timeout_secs);
        let theme = startup_options.theme.unwrap_or(config.theme);

        let client = ParsePointClient::new(
            endpoint,
            schema,
            HttpConfig::with_timeout(Duration::from_secs(timeout_secs)),
        );

        let rng = match startup_options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::info!(
            endpoint = client.endpoint(),
            schema = client.schema().as_str(),
            timeout_secs,
            "app initialised"
        );

        Self {
            nav: NavigationState::new(),
            data: SummaryStore::new(),
            ui: UiState::new(theme),
            chart_data: ChartData::default(),
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            client,
            pending_request: None,
            next_request_id: 0,
            rng,
            config_path,
            startup_file: startup_options.file,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        if let Some(path) = self.startup_file.take() {
            self.select_path(&path);
            self.submit_upload();
        }

        let tick_rate = Duration::from_millis(100);
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Paste(text) => {
                        self.handle_paste(&text);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
