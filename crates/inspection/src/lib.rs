//! The inspection-engine boundary.
//!
//! The production engine (deep-learning inference, GPU scheduling, workspace
//! file format) is an external SDK and out of scope here. This crate pins
//! down the contract at that boundary: a `Sample` processed through a named
//! tool yields a `Marking`. `ReplayWorkspace` is a file-backed stand-in that
//! replays pre-recorded markings so the console flow runs end to end.

pub mod engine;
pub mod replay;

pub use engine::{Engine, Sample};
pub use replay::{ReplayStream, ReplayWorkspace};
