//! Domain-level keyboard actions independent of key bindings.

/// User intents the form understands.
///
/// These represent what the user means, not which key was pressed. The
/// mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`KeyBindings`](crate::config::KeyBindings) and is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the row cursor up. Default: k/↑
    CursorUp,
    /// Move the row cursor down. Default: j/↓
    CursorDown,
    /// Step the current row's value up: slider right, next sauce,
    /// switch on. Default: l/→
    Increase,
    /// Step the current row's value down: slider left, previous sauce,
    /// switch off. Default: h/←
    Decrease,
    /// Primary action on the current row: toggle a switch, cycle the
    /// picker, advance the slider. Default: Space/Enter
    ToggleValue,
    /// Open the order confirmation dialog. Default: o
    Order,
    /// Confirm the dialog currently shown; no effect otherwise.
    /// Default: y (Enter also confirms via ToggleValue)
    Confirm,
    /// Dismiss the dialog currently shown; no effect otherwise.
    /// Default: Esc/n
    Cancel,
    /// Show the keyboard shortcut overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
