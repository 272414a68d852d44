//! egui rendering.  Widgets read `AppState` and call its event handlers;
//! no state lives here.

pub mod panels;
pub mod plot;
pub mod tables;
