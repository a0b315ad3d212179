//! Region overlay rendering for inspection results.
//!
//! Draws the outer boundary and vertex markers of detected regions onto a
//! raster canvas, and handles loading/saving that canvas from/to image files.

pub mod canvas;
pub mod draw;

pub use canvas::{load_canvas, save_canvas};
pub use draw::draw_outer;
