//! Common types shared across the inspection-overlay workspace.

pub mod color;
pub mod error;
pub mod geometry;
pub mod marking;
pub mod style;

pub use color::Color;
pub use error::{InspectError, InspectResult};
pub use geometry::Point2D;
pub use marking::{GreenMarking, GreenView, Marking, RedMarking, RedView, Region};
pub use style::OverlayStyle;
