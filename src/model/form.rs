//! The order form's mutable state and its value enums.
//!
//! `FormState` is the single record of the user's current selections. It is
//! owned by the application state and mutated only through a row's
//! `assign_value`, never directly by the view.

/// Slider reading at or below which the dough counts as thin.
pub const THICKNESS_VALUE_THIN: f32 = 0.0;
/// Upper slider bound (inclusive) of the regular-thickness bucket.
pub const THICKNESS_VALUE_REGULAR: f32 = 0.1;
/// Upper slider bound (inclusive) of the thick bucket; readings above it
/// also count as thick.
pub const THICKNESS_VALUE_THICK: f32 = 0.2;

/// Dough thickness choice, quantized from a raw slider reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoughThickness {
    /// Thin crust.
    Thin,
    /// Regular crust.
    Regular,
    /// Thick crust.
    Thick,
}

impl DoughThickness {
    /// Quantize a raw slider reading in [0.0, 1.0] into a thickness bucket.
    ///
    /// Buckets are closed on their upper bound: 0.0 is thin, 0.1 is still
    /// regular, 0.2 is thick. Readings above the top bucket fall into it.
    pub fn classify(value: f32) -> Self {
        if value <= THICKNESS_VALUE_THIN {
            Self::Thin
        } else if value <= THICKNESS_VALUE_REGULAR {
            Self::Regular
        } else {
            Self::Thick
        }
    }

    /// Representative slider position for this bucket, used to re-seed the
    /// slider control from stored state.
    ///
    /// This is intentionally not a faithful inverse of [`classify`]'s
    /// ranges; it is one fixed point inside (or on the edge of) each bucket.
    ///
    /// [`classify`]: DoughThickness::classify
    pub fn float_value(self) -> f32 {
        match self {
            Self::Thin => THICKNESS_VALUE_THIN,
            Self::Regular => THICKNESS_VALUE_REGULAR,
            Self::Thick => THICKNESS_VALUE_THICK,
        }
    }

    /// Display title for this thickness.
    pub fn title(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Regular => "Regular",
            Self::Thick => "Thick",
        }
    }
}

/// Sauce choice offered by the picker row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sauce {
    /// Classic tomato sauce.
    Tomato,
    /// Smoky barbecue sauce.
    Bbq,
    /// Spicy sauce.
    Spicy,
    /// Carbonara-style cream sauce.
    Carbonara,
}

impl Sauce {
    /// All sauces in picker display order.
    pub const ALL: [Self; 4] = [Self::Tomato, Self::Bbq, Self::Spicy, Self::Carbonara];

    /// Display title for this sauce.
    pub fn title(self) -> &'static str {
        match self {
            Self::Tomato => "Tomato",
            Self::Bbq => "BBQ",
            Self::Spicy => "Spicy",
            Self::Carbonara => "Carbonara",
        }
    }

    /// Position of this sauce within [`Sauce::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|sauce| *sauce == self)
            .unwrap_or(0)
    }

    /// Next sauce in display order, wrapping at the end.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous sauce in display order, wrapping at the start.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The user's current selections, one field per form row.
///
/// Mutated only through [`RowId::assign_value`](crate::model::RowId::assign_value).
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Dough thickness from the slider row.
    pub thickness: DoughThickness,
    /// Whether the crust gets a cheese border.
    pub cheese_border: bool,
    /// Sauce from the picker row.
    pub sauce: Sauce,
    /// Olives topping flag.
    pub olives: bool,
    /// Beef topping flag.
    pub beef: bool,
    /// Bacon topping flag.
    pub bacon: bool,
    /// Anchovies topping flag.
    pub anchovies: bool,
}

impl Default for FormState {
    fn default() -> Self {
        // Bacon starts on; everything else starts at its mildest setting.
        Self {
            thickness: DoughThickness::Thin,
            cheese_border: false,
            sauce: Sauce::Tomato,
            olives: false,
            beef: false,
            bacon: true,
            anchovies: false,
        }
    }
}
