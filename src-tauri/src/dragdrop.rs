//! Forwards window-manager drag/drop onto the two native channels the panel
//! subscribes to.
//!
//! Channel A (`drop-files`) carries one completed file per event; a
//! multi-file drop becomes separate sequential events. Channel B
//! (`drag-over`) carries live pointer positions while a native drag is in
//! progress. Positions are window-relative; the panel hit-tests them
//! against the drop target's current box.

use std::path::Path;

use dropzone_core::{DroppedFile, Point, DRAG_OVER_EVENT, DROP_FILES_EVENT};
use tauri::{Emitter, Manager, PhysicalPosition, Window};

pub fn forward(window: &Window, event: &tauri::DragDropEvent) {
    match event {
        tauri::DragDropEvent::Over { position } => emit_drag_over(window, position),
        tauri::DragDropEvent::Drop { paths, position } => {
            for path in paths {
                emit_drop(window, path, position);
            }
        }
        _ => {}
    }
}

fn emit_drag_over(window: &Window, position: &PhysicalPosition<f64>) {
    log::debug!("drag-over at ({}, {})", position.x, position.y);
    let point = Point::new(position.x, position.y);
    if let Err(e) = window.app_handle().emit(DRAG_OVER_EVENT, point) {
        let _ = rolling_logger::error(&format!("failed to emit drag-over: {e}"));
    }
}

fn emit_drop(window: &Window, path: &Path, position: &PhysicalPosition<f64>) {
    let payload = match read_payload(path, position) {
        Ok(payload) => payload,
        Err(e) => {
            // Unreadable file: skip it rather than emit a partial payload.
            let _ = rolling_logger::warn(&format!(
                "skipping dropped file {}: {e}",
                path.display()
            ));
            return;
        }
    };
    if let Err(e) = window.app_handle().emit(DROP_FILES_EVENT, payload) {
        let _ = rolling_logger::error(&format!("failed to emit drop-files: {e}"));
    }
}

fn read_payload(path: &Path, position: &PhysicalPosition<f64>) -> Result<DroppedFile, String> {
    let buffer = std::fs::read(path).map_err(|e| e.to_string())?;
    Ok(DroppedFile {
        path: path.to_string_lossy().into_owned(),
        x: position.x,
        y: position.y,
        buffer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_payload_includes_contents_and_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, b"pdf bytes").unwrap();

        let payload = read_payload(&path, &PhysicalPosition { x: 12.0, y: 34.0 }).unwrap();
        assert_eq!(payload.buffer, b"pdf bytes");
        assert_eq!(payload.x, 12.0);
        assert_eq!(payload.y, 34.0);
        assert!(payload.path.ends_with("report.pdf"));
        assert!(!payload.is_malformed());
    }

    #[test]
    fn test_read_payload_missing_file_errors() {
        let missing = Path::new("/nonexistent/definitely-not-here.bin");
        assert!(read_payload(missing, &PhysicalPosition { x: 0.0, y: 0.0 }).is_err());
    }
}
