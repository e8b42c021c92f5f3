//! Upload file payloads and display naming.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Longest file name shown untruncated in the panel.
pub const MAX_NAME_CHARS: usize = 14;

/// Channel A: one completed native file drop per event.
pub const DROP_FILES_EVENT: &str = "drop-files";

/// Channel B: live pointer positions during an in-progress native drag.
pub const DRAG_OVER_EVENT: &str = "drag-over";

/// Wire payload of the native `drop-files` channel. Field names match the
/// JSON the backend emits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedFile {
    pub path: String,
    pub x: f64,
    pub y: f64,
    pub buffer: Vec<u8>,
}

impl DroppedFile {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// A payload missing its path or content is unusable; the coordinator
    /// drops it without queueing a partial file.
    pub fn is_malformed(&self) -> bool {
        self.path.is_empty() || self.buffer.is_empty()
    }
}

/// A logical uploadable unit, from either drag bridge or the file picker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadFile {
    pub fn from_dropped(payload: DroppedFile) -> Self {
        Self {
            name: display_name(&payload.path),
            content: payload.buffer,
        }
    }

    /// Name as rendered in the panel: at most [`MAX_NAME_CHARS`] characters,
    /// with a trailing ellipsis marker when truncated.
    pub fn display_label(&self) -> String {
        if self.name.chars().count() > MAX_NAME_CHARS {
            let head: String = self.name.chars().take(MAX_NAME_CHARS).collect();
            format!("{head}...")
        } else {
            self.name.clone()
        }
    }
}

/// Extract a display name from a host path. Backslashes are normalized to
/// forward slashes first; a path with no separator is its own name.
pub fn display_name(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.rsplit_once('/') {
        Some((_, name)) => name.to_string(),
        None => normalized,
    }
}
