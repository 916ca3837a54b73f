//! pizzaform
//!
//! Terminal pizza-order configurator. A sectioned form (dough, then
//! ingredients) is declared as closed enums that map each row to its
//! title, control kind, display height, and accessors over the form
//! state; the view walks that model instead of hardcoding the screen.
//! Pure core, impure shell: `model` and `state` are side-effect free,
//! `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
