//! UI Components
//!
//! Reusable Leptos components.

mod attribute_dialog;
mod chip_input;

pub use attribute_dialog::{AttributeDialog, DialogTarget};
pub use chip_input::ChipInput;
