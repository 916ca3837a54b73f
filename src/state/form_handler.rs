//! Value adjustment and action dispatch.
//!
//! Every user interaction funnels through [`handle_action`]: modal state
//! is consulted first, then the action is applied to the row under the
//! cursor. Each dispatch runs to completion before the next event is
//! read, so there is no interleaving to reason about.

use crate::model::{format_order, CellKind, Coordinate, FieldValue, KeyAction, RowId};
use crate::state::app_state::AppState;
use tracing::{debug, info};

/// Direction of a value adjustment on the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Slider right, next sauce, switch on.
    Up,
    /// Slider left, previous sauce, switch off.
    Down,
}

/// Slider increment per adjustment keypress, in raw slider units.
const SLIDER_STEP: f32 = 0.1;

/// Dispatch a domain action against the current state.
///
/// Open dialogs capture the action first: the order dialog only reacts to
/// confirm/dismiss, the help overlay closes on anything that means
/// "go away". Otherwise the action applies to the form.
pub fn handle_action(state: &mut AppState, action: KeyAction) {
    if state.order_visible {
        match action {
            KeyAction::Confirm | KeyAction::ToggleValue => {
                // Display-only order: the sentence is the whole deliverable.
                info!(order = %format_order(&state.form), "order confirmed");
                state.order_visible = false;
            }
            KeyAction::Cancel | KeyAction::Order | KeyAction::Quit => {
                state.order_visible = false;
            }
            _ => {}
        }
        return;
    }

    if state.help_visible {
        if matches!(
            action,
            KeyAction::Cancel | KeyAction::Help | KeyAction::Quit
        ) {
            state.help_visible = false;
        }
        return;
    }

    match action {
        KeyAction::CursorUp => state.cursor_up(),
        KeyAction::CursorDown => state.cursor_down(),
        KeyAction::Increase => adjust(state, Step::Up),
        KeyAction::Decrease => adjust(state, Step::Down),
        KeyAction::ToggleValue => primary_action(state),
        KeyAction::Order => state.order_visible = true,
        KeyAction::Help => state.help_visible = true,
        KeyAction::Quit => state.should_quit = true,
        KeyAction::Confirm | KeyAction::Cancel => {}
    }
}

/// Step the value of the row under the cursor.
pub fn adjust(state: &mut AppState, step: Step) {
    let Some(row) = state.selected_row() else {
        return;
    };
    let value = match (row.cell_kind(), row.current_value(&state.form)) {
        (CellKind::Slider, FieldValue::Slider(current)) => {
            let raw = match step {
                Step::Up => (current + SLIDER_STEP).min(1.0),
                Step::Down => (current - SLIDER_STEP).max(0.0),
            };
            FieldValue::Slider(raw)
        }
        (CellKind::Picker, FieldValue::Sauce(current)) => FieldValue::Sauce(match step {
            Step::Up => current.next(),
            Step::Down => current.prev(),
        }),
        (CellKind::Switch, FieldValue::Toggle(_)) => {
            FieldValue::Toggle(matches!(step, Step::Up))
        }
        (_, current) => current,
    };
    apply_value(state, state.cursor, value);
}

/// Primary action on the row under the cursor: toggle a switch, cycle
/// the picker forward, advance the slider (wrapping to thin past thick).
pub fn primary_action(state: &mut AppState) {
    let Some(row) = state.selected_row() else {
        return;
    };
    let value = match (row.cell_kind(), row.current_value(&state.form)) {
        (CellKind::Switch, FieldValue::Toggle(on)) => FieldValue::Toggle(!on),
        (CellKind::Picker, FieldValue::Sauce(current)) => FieldValue::Sauce(current.next()),
        (CellKind::Slider, FieldValue::Slider(current)) => {
            let raw = if current >= crate::model::form::THICKNESS_VALUE_THICK {
                0.0
            } else {
                current + SLIDER_STEP
            };
            FieldValue::Slider(raw)
        }
        (_, current) => current,
    };
    apply_value(state, state.cursor, value);
}

/// Route a control value to the row at a coordinate.
///
/// The generalized assignment path: resolve the coordinate to a row and
/// hand the value to its `assign_value`. An unresolvable coordinate is a
/// no-op, mirroring the "no matching row" decode policy.
pub fn apply_value(state: &mut AppState, coordinate: Coordinate, value: FieldValue) {
    match RowId::at(coordinate) {
        Some(row) => {
            debug!(?row, ?value, "assigning control value");
            row.assign_value(&mut state.form, value);
        }
        None => debug!(?coordinate, "no row at coordinate, ignoring value"),
    }
}
