//! TUI rendering and terminal management (impure shell).
//!
//! Everything below `state` is pure; this module owns the terminal, the
//! synchronous event loop, and the translation of raw key and mouse
//! events into domain actions.

pub mod constants;
mod form;
mod help;
mod helpers;
mod order_modal;
mod styles;

pub use form::render_form;
pub use help::render_help_overlay;
pub use order_modal::render_order_modal;
pub use styles::{ColorConfig, FormStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{format_order, KeyAction};
use crate::state::{handle_action, primary_action, AppState, HitRegistry};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Constraint,
    layout::Layout,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use tracing::debug;

/// Main TUI application.
///
/// Generic over the backend so tests can drive it with `TestBackend`.
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: FormStyles,
    hit_registry: HitRegistry,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a TUI application on the real terminal.
    ///
    /// Enables raw mode, the alternate screen, and mouse capture.
    pub fn new(config: &ResolvedConfig) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, config))
    }

    /// Run the event loop until the user quits, then restore the
    /// terminal. Restoration happens even when the loop errors so a
    /// failure never strands the terminal in raw mode.
    pub fn run(&mut self) -> io::Result<()> {
        let result = self.event_loop();
        restore_terminal();
        result
    }

    /// Synchronous event loop: draw, block on the next event, dispatch,
    /// repeat. Each event runs to completion before the next is read.
    fn event_loop(&mut self) -> io::Result<()> {
        self.draw()?;
        loop {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                // A resize is handled implicitly by the redraw below.
                Event::Resize(..) => {}
                _ => {}
            }
            if self.app_state.should_quit {
                return Ok(());
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create an application around an existing terminal, without
    /// touching terminal modes. Used directly by tests.
    pub fn with_terminal(terminal: Terminal<B>, config: &ResolvedConfig) -> Self {
        let styles =
            FormStyles::with_color_config(ColorConfig::from_env_and_config(config.color));
        let key_bindings = KeyBindings::with_overrides(&config.keybindings);
        Self {
            terminal,
            app_state: AppState::default(),
            key_bindings,
            styles,
            hit_registry: HitRegistry::new(),
        }
    }

    /// Render one frame, rebuilding the hit registry for the new layout.
    pub fn draw(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            app_state,
            styles,
            hit_registry,
            ..
        } = self;
        hit_registry.clear();
        terminal.draw(|frame| render(frame, app_state, styles, hit_registry))?;
        Ok(())
    }

    /// Translate a key event into a domain action and dispatch it.
    ///
    /// All keys, the dialog-only `y`/`n` confirm shortcuts included, go
    /// through [`KeyBindings`]; the dispatcher decides what an action
    /// means in the current modal state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.lookup_action(key) {
            debug!(?action, "dispatching key action");
            handle_action(&mut self.app_state, action);
        }
    }

    /// Route a mouse event. A left click on a registered row moves the
    /// cursor there and performs the row's primary action, the same as
    /// pressing Space on it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.order_visible || self.app_state.help_visible {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(coordinate) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                debug!(?coordinate, "mouse hit on form row");
                self.app_state.cursor = coordinate;
                primary_action(&mut self.app_state);
            }
        }
    }

    /// Current application state, for tests and callers that inspect it.
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// Mutable application state, for tests that set up scenarios.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// The terminal, so tests can inspect the rendered buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Bindings lookup with a fallback for shifted characters, which some
    /// terminals report with the SHIFT modifier set.
    fn lookup_action(&self, key: KeyEvent) -> Option<KeyAction> {
        self.key_bindings.get(key).or_else(|| {
            if let KeyCode::Char(c) = key.code {
                if key.modifiers == KeyModifiers::SHIFT {
                    return self
                        .key_bindings
                        .get(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
                }
            }
            None
        })
    }
}

/// Compose one frame: form, status bar, then any overlay on top.
fn render(frame: &mut Frame, state: &AppState, styles: &FormStyles, registry: &mut HitRegistry) {
    let [content, status] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(constants::STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    form::render_form(frame, content, state, styles, registry);
    render_status_bar(frame, status, styles);

    if state.help_visible {
        help::render_help_overlay(frame);
    }
    if state.order_visible {
        order_modal::render_order_modal(frame, &format_order(&state.form));
    }
}

/// One-line key hint bar at the bottom of the screen.
fn render_status_bar(frame: &mut Frame, area: Rect, styles: &FormStyles) {
    let hints = Paragraph::new(Line::styled(
        " j/k move \u{00b7} h/l adjust \u{00b7} space toggle \u{00b7} o order \u{00b7} ? help \u{00b7} q quit",
        styles.hint,
    ));
    frame.render_widget(hints, area);
}

/// Undo `new`'s terminal changes, best effort.
///
/// Failing to restore must not mask the error that ended the loop, so
/// results are ignored.
fn restore_terminal() {
    let _ = io::stdout().execute(event::DisableMouseCapture);
    let _ = io::stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}
