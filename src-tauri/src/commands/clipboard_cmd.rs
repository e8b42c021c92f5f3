//! Clipboard Commands
//!
//! The clipboard upload menu action is reachable; the transport behind it
//! is not wired up yet.

#[tauri::command]
pub async fn upload_clipboard() -> Result<(), String> {
    let _ = rolling_logger::info("upload_clipboard invoked (no transport wired)");
    Ok(())
}
