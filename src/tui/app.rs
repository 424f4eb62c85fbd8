//! Application state and logic for the TUI.

use crate::config::Config;
use crate::languages;
use crate::panel::{Panel, TranslateRequest};
use crate::theme::ThemeStore;
use crate::translate::{GoogleTranslator, TranslationEngine};
use crate::tui::event::Event;
use crate::tui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::warn;

/// Application result type.
pub type AppResult<T> = anyhow::Result<T>;

/// Which language selector an overlay is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangSide {
    Source,
    Target,
}

/// State of the language selector overlay.
#[derive(Debug, Clone, Copy)]
pub struct SelectorState {
    pub side: LangSide,
    pub index: usize,
}

/// Main application state.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Color palette derived from the persisted theme
    pub palette: Palette,
    /// The translation session
    pub panel: Panel,
    /// Open language selector overlay, if any
    pub selector: Option<SelectorState>,
    /// Show help overlay
    pub show_help: bool,
    store: ThemeStore,
    translator: Arc<GoogleTranslator>,
    handle: Handle,
    events: mpsc::Sender<Event>,
}

impl App {
    /// Create a new App instance.
    pub fn new(
        handle: Handle,
        events: mpsc::Sender<Event>,
        config: &Config,
        store: ThemeStore,
    ) -> Self {
        let translator = Arc::new(GoogleTranslator::new(
            &config.translator.endpoint,
            config.translator.timeout_secs,
        ));
        let panel = Panel::new(
            &config.panel.source_lang,
            &config.panel.target_lang,
            Duration::from_millis(config.panel.debounce_ms),
        );
        let palette = Palette::for_theme(store.theme());

        Self {
            running: true,
            palette,
            panel,
            selector: None,
            show_help: false,
            store,
            translator,
            handle,
            events,
        }
    }

    /// Check if the application is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Display name of the current theme.
    pub fn theme_name(&self) -> &'static str {
        self.store.theme().display_name()
    }

    /// Handle tick events: fire the debounce deadline when it is due.
    pub fn on_tick(&mut self) {
        if let Some(request) = self.panel.poll(Instant::now()) {
            self.dispatch(request);
        }
    }

    /// Handle a finished translation attempt.
    pub fn on_translated(&mut self, seq: u64, result: Result<String, String>) {
        self.panel.apply(seq, result);
    }

    /// Handle key events.
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        if self.selector.is_some() {
            self.on_selector_key(key);
            return;
        }

        let now = Instant::now();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
            }
            KeyCode::Esc => {
                self.quit();
            }
            KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::F(2) => {
                self.open_selector(LangSide::Source);
            }
            KeyCode::F(3) => {
                self.open_selector(LangSide::Target);
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.panel.swap(now);
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_theme();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.panel.set_source_text("", now);
            }
            KeyCode::Enter => {
                if let Some(request) = self.panel.translate_now() {
                    self.dispatch(request);
                }
            }
            KeyCode::Backspace => {
                self.panel.pop_char(now);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.panel.push_char(c, now);
            }
            _ => {}
        }
    }

    /// Key handling while a language selector overlay is open.
    fn on_selector_key(&mut self, key: KeyEvent) {
        let Some(mut selector) = self.selector else {
            return;
        };
        let count = languages::all().len();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selector.index = (selector.index + count - 1) % count;
                self.selector = Some(selector);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selector.index = (selector.index + 1) % count;
                self.selector = Some(selector);
            }
            KeyCode::Enter => {
                let code = languages::all()[selector.index].code;
                let now = Instant::now();
                match selector.side {
                    LangSide::Source => self.panel.set_source_lang(code, now),
                    LangSide::Target => self.panel.set_target_lang(code, now),
                }
                self.selector = None;
            }
            KeyCode::Esc => {
                self.selector = None;
            }
            _ => {}
        }
    }

    fn open_selector(&mut self, side: LangSide) {
        let current = match side {
            LangSide::Source => self.panel.source_lang(),
            LangSide::Target => self.panel.target_lang(),
        };
        let index = languages::position(current).unwrap_or(0);
        self.selector = Some(SelectorState { side, index });
    }

    /// Flip the theme, persist it, and switch palettes.
    fn toggle_theme(&mut self) {
        if let Err(e) = self.store.toggle() {
            warn!("failed to persist theme: {}", e);
        }
        self.palette = Palette::for_theme(self.store.theme());
    }

    /// Spawn the translation fetch; the completion comes back as an event.
    fn dispatch(&self, request: TranslateRequest) {
        let translator = Arc::clone(&self.translator);
        let events = self.events.clone();
        self.handle.spawn(async move {
            let result = translator
                .translate(&request.text, &request.from, &request.to)
                .await
                .map_err(|e| e.to_string());
            let _ = events.send(Event::Translated {
                seq: request.seq,
                result,
            });
        });
    }
}
