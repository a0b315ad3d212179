//! File-backed replay of pre-recorded markings.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use inspect_common::{InspectError, InspectResult, Marking};

use crate::engine::{Engine, Sample};

/// Markings captured from a real engine run, keyed by stream and tool name.
///
/// JSON layout:
///
/// ```json
/// {
///   "streams": {
///     "default": {
///       "tools": {
///         "Analyze": { "kind": "red", "views": [ ... ] }
///       }
///     }
///   }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct ReplayWorkspace {
    streams: HashMap<String, ReplayStream>,
}

/// One stream of a replay workspace; processes samples by lookup.
#[derive(Debug, Deserialize)]
pub struct ReplayStream {
    tools: HashMap<String, Marking>,
}

impl ReplayWorkspace {
    /// Load a replay workspace from a JSON file.
    pub fn open(path: &Path) -> InspectResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            InspectError::WorkspaceError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let workspace = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            streams = workspace.streams.len(),
            "replay workspace loaded"
        );
        Ok(workspace)
    }

    /// Parse a replay workspace from a JSON string.
    pub fn from_json(json: &str) -> InspectResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a stream by name.
    pub fn stream(&self, name: &str) -> InspectResult<&ReplayStream> {
        self.streams
            .get(name)
            .ok_or_else(|| InspectError::StreamNotFound(name.to_string()))
    }
}

impl ReplayStream {
    /// Names of the tools this stream has markings for.
    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|name| name.as_str())
    }
}

impl Engine for ReplayStream {
    fn process(&self, _sample: &Sample, tool: &str) -> InspectResult<Marking> {
        self.tools
            .get(tool)
            .cloned()
            .ok_or_else(|| InspectError::ToolNotFound(tool.to_string()))
    }
}
