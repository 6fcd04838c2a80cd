//! Hardmacro floorplanning from connectivity matrices.
//!
//! The [`importer`] turns a labeled square table into a [`model::Floorplan`]
//! (diagonal = block areas, upper triangle = connection weights). The
//! [`interaction`] model then moves and reshapes blocks from pointer input
//! while keeping each block's area constant.
//!
//! The binary `macroplan` prints an imported floorplan as JSON.

pub mod color;
pub mod error;
pub mod geometry;
pub mod importer;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod properties;

// Optional GUI/egui functionality lives behind the `egui` feature flag.
// It is used by the `macroplan-gui` binary.
#[cfg(feature = "egui")]
pub mod egui_app;

pub use error::{FloorplanError, Result};
pub use model::{Block, Connection, Floorplan, ShapeType};
