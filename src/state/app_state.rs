//! Application state and cursor movement.
//!
//! `AppState` is the root state type: the form's field values plus the
//! UI state around them (cursor position, modal visibility, quit flag).
//! Transitions are plain methods mutating the state in place; all of them
//! run synchronously on the event thread.

use crate::model::{Coordinate, FormState, RowId, SectionId};

/// Root application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The user's current selections. Mutated only through a row's
    /// `assign_value`, never written directly by the view.
    pub form: FormState,

    /// The row the cursor is on.
    pub cursor: Coordinate,

    /// Whether the keyboard shortcut overlay is shown.
    pub help_visible: bool,

    /// Whether the order confirmation dialog is shown.
    pub order_visible: bool,

    /// Set when the user asked to exit; the event loop checks this after
    /// every dispatched action.
    pub should_quit: bool,
}

impl AppState {
    /// Create application state with the given initial form values,
    /// cursor on the first row.
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            cursor: Coordinate::new(0, 0),
            help_visible: false,
            order_visible: false,
            should_quit: false,
        }
    }

    /// The row under the cursor, if the cursor is valid.
    ///
    /// The cursor only ever moves along [`all_coordinates`], so this is
    /// `None` only for a hand-constructed out-of-range cursor.
    pub fn selected_row(&self) -> Option<RowId> {
        RowId::at(self.cursor)
    }

    /// Move the cursor to the previous row, crossing section boundaries,
    /// clamping at the first row.
    pub fn cursor_up(&mut self) {
        let coordinates = all_coordinates();
        if let Some(position) = coordinates.iter().position(|c| *c == self.cursor) {
            if position > 0 {
                self.cursor = coordinates[position - 1];
            }
        } else {
            self.cursor = Coordinate::new(0, 0);
        }
    }

    /// Move the cursor to the next row, crossing section boundaries,
    /// clamping at the last row.
    pub fn cursor_down(&mut self) {
        let coordinates = all_coordinates();
        match coordinates.iter().position(|c| *c == self.cursor) {
            Some(position) if position + 1 < coordinates.len() => {
                self.cursor = coordinates[position + 1];
            }
            Some(_) => {}
            None => self.cursor = Coordinate::new(0, 0),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}

/// Every valid coordinate of the form in display order.
pub fn all_coordinates() -> Vec<Coordinate> {
    SectionId::ALL
        .iter()
        .enumerate()
        .flat_map(|(section_index, section)| {
            (0..section.row_count()).map(move |row_index| Coordinate::new(section_index, row_index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowId;

    #[test]
    fn cursor_starts_on_first_row() {
        let state = AppState::default();
        assert_eq!(state.cursor, Coordinate::new(0, 0));
        assert_eq!(state.selected_row(), Some(RowId::Thickness));
    }

    #[test]
    fn all_coordinates_covers_every_row_once() {
        let coordinates = all_coordinates();
        assert_eq!(coordinates.len(), 7);
        assert_eq!(coordinates[0], Coordinate::new(0, 0));
        assert_eq!(coordinates[6], Coordinate::new(1, 4));
    }

    #[test]
    fn cursor_down_crosses_section_boundary() {
        let mut state = AppState::default();
        state.cursor = Coordinate::new(0, 1);
        state.cursor_down();
        assert_eq!(state.cursor, Coordinate::new(1, 0));
        assert_eq!(state.selected_row(), Some(RowId::Sauce));
    }

    #[test]
    fn cursor_up_crosses_section_boundary() {
        let mut state = AppState::default();
        state.cursor = Coordinate::new(1, 0);
        state.cursor_up();
        assert_eq!(state.cursor, Coordinate::new(0, 1));
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut state = AppState::default();
        state.cursor_up();
        assert_eq!(state.cursor, Coordinate::new(0, 0));

        state.cursor = Coordinate::new(1, 4);
        state.cursor_down();
        assert_eq!(state.cursor, Coordinate::new(1, 4));
    }

    #[test]
    fn invalid_cursor_resets_to_first_row() {
        let mut state = AppState::default();
        state.cursor = Coordinate::new(9, 9);
        state.cursor_down();
        assert_eq!(state.cursor, Coordinate::new(0, 0));
    }
}
