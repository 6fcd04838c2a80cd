//! Egui-based interactive floorplanner (feature = "egui").
//!
//! The window is split into focused submodules:
//!
//! - [`view`] – model ↔ screen transform, fitting and zoom
//! - `state` – [`FloorplanApp`], loading and property-draft bookkeeping
//! - `canvas` – painting blocks/handles/connections and pointer routing
//! - `ui` – top controls, tabs and the modal message window

#![cfg(feature = "egui")]

mod canvas;
mod state;
mod ui;
pub mod view;

pub use canvas::show_canvas;
pub use state::{FloorplanApp, Message, MessageKind, Tab};
pub use ui::update;
pub use view::ViewTransform;
