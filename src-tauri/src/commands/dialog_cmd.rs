//! File Picker Command
//!
//! Surfaces the native file chooser and returns the picked files with their
//! contents already read, so the frontend gets usable upload units directly.

use serde::Serialize;
use tauri::{command, AppHandle, Runtime};

#[cfg(not(any(target_os = "android", target_os = "ios")))]
use tauri_plugin_dialog::DialogExt;

/// One selection from the native file chooser.
#[derive(Serialize)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

/// A cancelled dialog yields an empty list, not an error.
#[command]
pub async fn pick_files<R: Runtime>(app: AppHandle<R>) -> Result<Vec<SelectedFile>, String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let Some(paths) = app.dialog().file().blocking_pick_files() else {
            return Ok(Vec::new());
        };

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.into_path().map_err(|e| e.to_string())?;
            let content = std::fs::read(&path).map_err(|e| e.to_string())?;
            files.push(SelectedFile {
                name: dropzone_core::display_name(&path.to_string_lossy()),
                content,
            });
        }
        let _ = rolling_logger::info(&format!("picker selected {} file(s)", files.len()));
        Ok(files)
    }
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        let _ = app;
        Ok(Vec::new())
    }
}
