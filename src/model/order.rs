//! Order summary formatting.
//!
//! Renders the current form state into the confirmation sentence shown
//! before "placing" the order. Formatting is total: every reachable state
//! produces a sentence, so there is no error path here.

use crate::model::form::FormState;
use crate::model::rows::RowId;

/// Clause used when no topping is selected.
const NO_INGREDIENTS: &str = "no ingredients";

/// Build the order confirmation sentence for the current selections.
///
/// Topping titles appear lower-cased, comma-joined, in declaration order
/// (olives, beef, bacon, anchovies) regardless of the order they were
/// toggled in. With no toppings selected the list is replaced by a fixed
/// "no ingredients" clause.
pub fn format_order(state: &FormState) -> String {
    let border = if state.cheese_border {
        "with cheese border"
    } else {
        "without cheese border"
    };

    let toppings: Vec<String> = [
        (RowId::Olives, state.olives),
        (RowId::Beef, state.beef),
        (RowId::Bacon, state.bacon),
        (RowId::Anchovies, state.anchovies),
    ]
    .into_iter()
    .filter(|(_, selected)| *selected)
    .map(|(row, _)| row.title().to_lowercase())
    .collect();

    let ingredients = if toppings.is_empty() {
        NO_INGREDIENTS.to_string()
    } else {
        format!("with {}", toppings.join(", "))
    };

    format!(
        "Are you sure you want a {} {} pizza with {} sauce and {}?",
        state.thickness.title().to_lowercase(),
        border,
        state.sauce.title(),
        ingredients
    )
}
