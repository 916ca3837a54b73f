//! Declarative section and row model for the order form.
//!
//! The form's structure is a closed set of enum variants: each section
//! knows its ordered rows, and each row knows its title, control kind,
//! display height, and how to read and write its field in [`FormState`].
//! The view walks this model instead of hardcoding the screen layout.

use crate::model::coordinate::Coordinate;
use crate::model::form::{DoughThickness, FormState, Sauce};
use tracing::debug;

/// Display height of a picker row in terminal lines.
///
/// Tall enough for the row title plus every sauce option.
pub const ROW_HEIGHT_PICKER: u16 = 6;

/// Display height of slider and switch rows in terminal lines.
pub const ROW_HEIGHT_REGULAR: u16 = 1;

/// Display height of a section header in terminal lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Which control renders a row's cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Multi-option picker list.
    Picker,
    /// Horizontal value slider.
    Slider,
    /// On/off switch.
    Switch,
}

/// A value exchanged between a control and the form model.
///
/// This is the closed alphabet of things controls can hand to
/// [`RowId::assign_value`]; a row receiving the wrong variant ignores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Switch position.
    Toggle(bool),
    /// Raw slider reading in [0.0, 1.0], quantized by the receiving row.
    Slider(f32),
    /// Picker selection.
    Sauce(Sauce),
}

/// One section of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    /// Dough settings: thickness slider and cheese-border switch.
    Dough,
    /// Ingredient settings: sauce picker and topping switches.
    Ingredients,
}

impl SectionId {
    /// All sections in display order.
    pub const ALL: [Self; 2] = [Self::Dough, Self::Ingredients];

    /// Section header title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dough => "Dough",
            Self::Ingredients => "Ingredients",
        }
    }

    /// Ordered rows belonging to this section.
    pub fn rows(self) -> &'static [RowId] {
        match self {
            Self::Dough => &[RowId::Thickness, RowId::CheeseBorder],
            Self::Ingredients => &[
                RowId::Sauce,
                RowId::Olives,
                RowId::Beef,
                RowId::Bacon,
                RowId::Anchovies,
            ],
        }
    }

    /// Number of rows in this section.
    pub fn row_count(self) -> usize {
        self.rows().len()
    }

    /// Resolve a row by index within this section, `None` if out of range.
    pub fn row(self, index: usize) -> Option<RowId> {
        self.rows().get(index).copied()
    }

    /// Header display height, the same fixed value for every section.
    pub fn header_height(self) -> u16 {
        HEADER_HEIGHT
    }
}

/// One row of the form.
///
/// Variants are partitioned by owning section; a row is only meaningful
/// paired with that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowId {
    /// Dough thickness slider.
    Thickness,
    /// Cheese-border switch.
    CheeseBorder,
    /// Sauce picker.
    Sauce,
    /// Olives topping switch.
    Olives,
    /// Beef topping switch.
    Beef,
    /// Bacon topping switch.
    Bacon,
    /// Anchovies topping switch.
    Anchovies,
}

impl RowId {
    /// Resolve the row at a coordinate, `None` when either index is out
    /// of range.
    pub fn at(coordinate: Coordinate) -> Option<Self> {
        SectionId::ALL
            .get(coordinate.section)
            .and_then(|section| section.row(coordinate.row))
    }

    /// The section this row belongs to.
    pub fn section(self) -> SectionId {
        match self {
            Self::Thickness | Self::CheeseBorder => SectionId::Dough,
            Self::Sauce | Self::Olives | Self::Beef | Self::Bacon | Self::Anchovies => {
                SectionId::Ingredients
            }
        }
    }

    /// Row title shown next to its control.
    pub fn title(self) -> &'static str {
        match self {
            Self::Thickness => "Thickness",
            Self::CheeseBorder => "Cheese border",
            Self::Sauce => "Sauce",
            Self::Olives => "Olives",
            Self::Beef => "Beef",
            Self::Bacon => "Bacon",
            Self::Anchovies => "Anchovies",
        }
    }

    /// Which control renders this row.
    pub fn cell_kind(self) -> CellKind {
        match self {
            Self::Sauce => CellKind::Picker,
            Self::Thickness => CellKind::Slider,
            Self::CheeseBorder | Self::Olives | Self::Beef | Self::Bacon | Self::Anchovies => {
                CellKind::Switch
            }
        }
    }

    /// Display height in terminal lines, fixed per cell kind.
    pub fn height(self) -> u16 {
        match self.cell_kind() {
            CellKind::Picker => ROW_HEIGHT_PICKER,
            CellKind::Slider | CellKind::Switch => ROW_HEIGHT_REGULAR,
        }
    }

    /// Read this row's current value from the form state.
    pub fn current_value(self, state: &FormState) -> FieldValue {
        match self {
            Self::Thickness => FieldValue::Slider(state.thickness.float_value()),
            Self::CheeseBorder => FieldValue::Toggle(state.cheese_border),
            Self::Sauce => FieldValue::Sauce(state.sauce),
            Self::Olives => FieldValue::Toggle(state.olives),
            Self::Beef => FieldValue::Toggle(state.beef),
            Self::Bacon => FieldValue::Toggle(state.bacon),
            Self::Anchovies => FieldValue::Toggle(state.anchovies),
        }
    }

    /// Write a control value into the form state.
    ///
    /// The thickness row quantizes its raw slider reading through
    /// [`DoughThickness::classify`]; every other row stores the value
    /// as-is. A value of the wrong kind for the row is silently dropped:
    /// controls are the only writers, so a mismatch is a wiring mistake
    /// worth a debug log but never a user-visible failure.
    pub fn assign_value(self, state: &mut FormState, value: FieldValue) {
        match (self, value) {
            (Self::Thickness, FieldValue::Slider(raw)) => {
                state.thickness = DoughThickness::classify(raw);
            }
            (Self::CheeseBorder, FieldValue::Toggle(on)) => state.cheese_border = on,
            (Self::Sauce, FieldValue::Sauce(sauce)) => state.sauce = sauce,
            (Self::Olives, FieldValue::Toggle(on)) => state.olives = on,
            (Self::Beef, FieldValue::Toggle(on)) => state.beef = on,
            (Self::Bacon, FieldValue::Toggle(on)) => state.bacon = on,
            (Self::Anchovies, FieldValue::Toggle(on)) => state.anchovies = on,
            (row, value) => {
                debug!(?row, ?value, "ignoring control value of the wrong kind");
            }
        }
    }
}
