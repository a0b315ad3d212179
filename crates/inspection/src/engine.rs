//! Engine contract.

use std::path::{Path, PathBuf};

use inspect_common::{InspectResult, Marking};

/// A unit of input submitted to an engine for processing.
#[derive(Debug, Clone)]
pub struct Sample {
    image: PathBuf,
}

impl Sample {
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
        }
    }

    /// Path of the image under inspection.
    pub fn image(&self) -> &Path {
        &self.image
    }
}

/// Anything that can process a sample through a named tool.
///
/// All upstream tools of the named tool are processed implicitly; the
/// returned marking is the named tool's result.
pub trait Engine {
    fn process(&self, sample: &Sample, tool: &str) -> InspectResult<Marking>;
}
