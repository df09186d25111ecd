//! Pin ruler crate root: re-exports and module wiring.
//!
//! The crate has two independent halves:
//! - the pin board (`data`, `board`, `events`, `search`) behind a small
//!   egui/eframe map application (`app`): drop pins, link pairs with a ruler
//!   and read the pairwise distance matrix;
//! - `headings`: hierarchical numbering of markdown headings, gated by a
//!   front matter flag.

pub mod app;
pub mod board;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod headings;
pub mod search;

pub use app::{run_pinruler, PinRulerApp};
pub use board::{DrawRequest, PinBoard, Placement};
pub use config::{BoardConfig, MapConfig, PinRulerConfig, RulerStyle};
pub use data::geo::{estimate_distance_m, interpolate, Bounds, LatLon};
pub use data::links::{LinkGraph, Selection, SelectionOutcome};
pub use data::matrix::{DistanceMatrix, MatrixCell};
pub use data::points::{Point, PointId, PointRegistry};
pub use error::PinError;
pub use events::{EventController, EventFilter, EventKind, PinEvent};
pub use headings::{number_headings, Document};
pub use search::{apply_places, LocalSearch, Place, PlaceSearch};
