//! UI state and transition handlers.

pub mod app_state;
pub mod form_handler;
pub mod hit_area;

pub use app_state::{all_coordinates, AppState};
pub use form_handler::{adjust, apply_value, handle_action, primary_action, Step};
pub use hit_area::HitRegistry;
