//! Pure math/data for pointer and layout coordinates in Tapkit
//!
//! This crate contains the geometry primitives shared by the pointer-input
//! data model and the layout-node fixtures: float-typed pointer coordinates,
//! integer-typed layout coordinates, and the conversions between them.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{IntPoint, IntSize, Point, Rect, Size};
}
