//! Result types produced by an inspection engine.
//!
//! A `Marking` is what the engine hands back after a sample is processed
//! through a tool. The kind is carried as an explicit tag rather than a
//! runtime downcast: red (detection) markings hold scored views with
//! drawable region boundaries, green (classification) markings hold scored
//! tags with no geometry.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

/// A detected area within a view.
///
/// `outer` is ordered around the boundary and not necessarily closed
/// (the last point does not repeat the first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub outer: Vec<Point2D>,
    pub score: f64,
}

/// One scored view of a red (detection) marking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedView {
    pub score: f64,
    pub regions: Vec<Region>,
}

/// Detection result: scored views, each with zero or more regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedMarking {
    pub views: Vec<RedView>,
    /// Engine-reported processing time, when the engine provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

/// One scored view of a green (classification) marking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenView {
    pub score: f64,
    pub best_tag: String,
}

/// Classification result: scored tags, no drawable geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenMarking {
    pub views: Vec<GreenView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

/// Tool output, tagged by tool kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marking {
    Red(RedMarking),
    Green(GreenMarking),
}

impl Marking {
    /// Engine-reported duration in milliseconds, if any.
    pub fn duration_ms(&self) -> Option<f64> {
        match self {
            Marking::Red(m) => m.duration_ms,
            Marking::Green(m) => m.duration_ms,
        }
    }
}
