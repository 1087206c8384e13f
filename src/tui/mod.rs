//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (amount readout counting, amount field resizing): wakes up
//!   for every frame of the interpolator, at most one frame interval apart.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! Both animations are ticked from this loop; neither owns a thread.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{ResolvedConfig, StorageTarget};
use crate::core::input::Field;
use crate::core::state::App;
use crate::core::storage::{JsonFileStorage, LedgerStorage, MemoryStorage};
use crate::core::width::AdaptiveWidth;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BigDigitMeasure, ExpenseListState, FieldEvent, ListEvent, TextField,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);
/// Longest step fed to the width spring; a longer stall is not replayed.
const MAX_SPRING_STEP: Duration = Duration::from_millis(50);

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Amount,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Amount,
            Focus::Amount => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Amount => Focus::Title,
            Focus::List => Focus::Amount,
        }
    }

    /// The core action announcing this focus.
    fn action(self) -> Action {
        match self {
            Focus::Title => Action::Focus(Field::Title),
            Focus::Amount => Action::Focus(Field::Amount),
            Focus::List => Action::Blur,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub title_field: TextField,
    pub amount_field: TextField,
    pub list: ExpenseListState,
    pub amount_width: AdaptiveWidth<BigDigitMeasure>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            focus: Focus::Title,
            title_field: TextField::new(Field::Title),
            amount_field: TextField::new(Field::Amount),
            list: ExpenseListState::new(),
            amount_width: AdaptiveWidth::new(BigDigitMeasure, config.width),
        }
    }

    /// Copy core state into component props.
    pub fn sync_props(&mut self, app: &App) {
        self.title_field.text = app.input.title().to_string();
        self.title_field.placeholder = app.input.placeholder(Field::Title);
        self.title_field.focused = self.focus == Focus::Title;

        self.amount_field.text = app.input.raw_amount().to_string();
        self.amount_field.placeholder = app.input.placeholder(Field::Amount);
        self.amount_field.focused = self.focus == Focus::Amount;

        self.list.len = app.ledger.records().len();
        self.list.clamp_selection();
    }

    pub fn is_animating(&self, app: &App) -> bool {
        app.interpolator.is_animating() || self.amount_width.is_animating()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Tab and Esc arrive unambiguously;
        // terminals that don't support it ignore the request.
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

/// Build the storage backend named by the resolved config.
pub fn build_storage(config: &ResolvedConfig) -> Box<dyn LedgerStorage> {
    match &config.storage {
        StorageTarget::File(path) => {
            info!("Using ledger file {}", path.display());
            Box::new(JsonFileStorage::new(path.clone()))
        }
        StorageTarget::Ephemeral => {
            info!("Running ephemeral, expenses will not be saved");
            Box::new(MemoryStorage::new())
        }
    }
}

/// Apply one event. Returns `true` if the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> bool {
    let action = match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.focus = if matches!(event, TuiEvent::FocusNext) {
                tui.focus.next()
            } else {
                tui.focus.prev()
            };
            if tui.focus == Focus::List {
                tui.list.ensure_selection();
            }
            Some(tui.focus.action())
        }
        _ => match tui.focus {
            Focus::Title => tui.title_field.handle_event(event).map(|e| match e {
                FieldEvent::Changed(text) => Action::EditTitle(text),
                FieldEvent::Submit => Action::Submit,
            }),
            Focus::Amount => tui.amount_field.handle_event(event).map(|e| match e {
                FieldEvent::Changed(text) => Action::EditAmount(text),
                FieldEvent::Submit => Action::Submit,
            }),
            Focus::List => tui.list.handle_event(event).and_then(|e| match e {
                ListEvent::Delete(index) => app.ledger.records().get(index).map(|r| Action::Delete(r.id)),
            }),
        },
    };

    let Some(action) = action else {
        return false;
    };
    match update(app, action) {
        Effect::Quit => true,
        Effect::AmountTextChanged => {
            tui.amount_width.on_text_changed(app.input.raw_amount());
            false
        }
        Effect::None => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(build_storage(&config), &config);
    let mut tui = TuiState::new(&config);
    update(&mut app, tui.focus.action());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let frame_interval = config.animation.frame_interval();
    let mut last_tick = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let dt = now.saturating_duration_since(last_tick).min(MAX_SPRING_STEP);
        last_tick = now;
        if app.interpolator.tick(now) {
            needs_redraw = true;
        }
        if tui.amount_width.tick(dt) {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.sync_props(&app);
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Sleep until the next animation frame, or long when nothing moves
        let timeout = if tui.is_animating(&app) {
            app.interpolator
                .time_until_next_frame(Instant::now())
                .map_or(frame_interval, |d| d.min(frame_interval))
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            tui.sync_props(&app);
            if handle_event(&mut app, &mut tui, &event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            debug!("Quit requested");
            break;
        }
    }

    // Stop any in-flight animation before the terminal goes away
    app.interpolator.cancel();
    ratatui::restore();
    info!("Tally exiting with {} expenses", app.ledger.records().len());
    Ok(())
}
