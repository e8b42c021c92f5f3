//! Dropzone Core
//!
//! The drag/drop reconciliation state machine behind the Dropdock panel:
//! geometry and hit testing, native file payloads, the drop coordinator,
//! and scoped ownership of native channel subscriptions.
//!
//! Framework-free so the same code serves the WASM frontend, the Tauri
//! backend (wire payload types), and host-target tests.

mod bridge;
mod coordinator;
mod file;
mod geometry;

pub use bridge::Subscription;
pub use coordinator::{derive_status, DropCoordinator, DropDisposition, DropZoneStatus};
pub use file::{
    display_name, DroppedFile, UploadFile, DRAG_OVER_EVENT, DROP_FILES_EVENT, MAX_NAME_CHARS,
};
pub use geometry::{BoundingBox, Point};
