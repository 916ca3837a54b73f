//! Domain model: form structure, form state, coordinates, and actions.
//!
//! Everything in here is pure data and pure functions; terminal concerns
//! live in the `view` module and mutation flows through `state`.

pub mod coordinate;
pub mod error;
pub mod form;
pub mod key_action;
pub mod order;
pub mod rows;

pub use coordinate::{decode_tag, encode_tag, Coordinate, TAG_BASE};
pub use error::AppError;
pub use form::{DoughThickness, FormState, Sauce};
pub use key_action::KeyAction;
pub use order::format_order;
pub use rows::{CellKind, FieldValue, RowId, SectionId};
