//! Tray icon behavior: clicking the tray toggles the panel window,
//! positioned at tray center.

use tauri::{tray, AppHandle, Manager};
use tauri_plugin_positioner::{Position, WindowExt};

pub fn handle_tray_event(app: &AppHandle, event: &tray::TrayIconEvent) {
    let tray::TrayIconEvent::Click { button_state, .. } = event else {
        return;
    };
    if button_state != &tray::MouseButtonState::Down {
        return;
    }
    toggle_panel(app);
}

fn toggle_panel(app: &AppHandle) {
    let Some(window) = app.get_webview_window("main") else {
        let _ = rolling_logger::error("tray click with no main window");
        return;
    };
    if let Err(e) = window.move_window(Position::TrayCenter) {
        let _ = rolling_logger::error(&format!("failed to position panel: {e}"));
    }
    match window.is_visible() {
        Ok(true) => {
            let _ = window.hide();
        }
        Ok(false) | Err(_) => {
            let _ = window.show();
            let _ = window.set_focus();
        }
    }
}
