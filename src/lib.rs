//! datum-aspect: display configuration for 3D datum presentations.
//!
//! A datum is a drawn local coordinate system: origin marker, up to three
//! axis lines with arrow tips and labels, and plane indicators. This crate
//! holds the styles and toggles a presentation layer reads on every redraw;
//! it does not draw anything itself.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DatumAspect, DatumAspectConfig};
pub use crate::core::{DatumAttribute, DatumAxes, DatumMode, DatumPart};
pub use error::{DatumError, DatumResult};
