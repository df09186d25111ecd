//! Board data: geometry, pins, links and the distance matrix.

pub mod export;
pub mod geo;
pub mod links;
pub mod matrix;
pub mod points;
