//! Application lifecycle commands.

use tauri::AppHandle;

/// Quit the application. Fire-and-forget from the panel menu.
#[tauri::command]
pub fn quit_app(app: AppHandle) {
    let _ = rolling_logger::info("quit requested from panel");
    app.exit(0);
}
