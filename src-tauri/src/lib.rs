//! Dropdock Backend
//!
//! Layered architecture:
//! - dragdrop: window-manager drag/drop forwarded onto the two native channels
//! - tray: tray icon behavior (toggle the panel at tray center)
//! - commands: Tauri command handlers

use tauri::Manager;
use tauri_plugin_autostart::MacosLauncher;

#[cfg(target_os = "windows")]
use window_vibrancy::apply_blur;
#[cfg(target_os = "macos")]
use window_vibrancy::{apply_vibrancy, NSVisualEffectMaterial, NSVisualEffectState};

mod commands;
mod dragdrop;
mod tray;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_positioner::init())
        .plugin(tauri_plugin_autostart::init(
            MacosLauncher::LaunchAgent,
            None,
        ))
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            let app_handle = app.handle().clone();

            eprintln!(
                "[{}] Dropdock setup starting",
                chrono::Local::now().format("%H:%M:%S%.3f")
            );

            rolling_logger::init_logger(
                app_handle.path().app_log_dir().expect("failed to get log dir"),
                "Dropdock",
            )
            .expect("failed to init rolling logger");

            app.on_tray_icon_event(|app, event| {
                tauri_plugin_positioner::on_tray_event(app, &event);
                tray::handle_tray_event(app, &event);
            });

            for window in app.webview_windows().values() {
                #[cfg(target_os = "macos")]
                apply_vibrancy(
                    window,
                    NSVisualEffectMaterial::Menu,
                    Some(NSVisualEffectState::Active),
                    None,
                )
                .expect("Unsupported platform! 'apply_vibrancy' is only supported on MacOS");

                #[cfg(target_os = "windows")]
                apply_blur(window, Some((120, 120, 120, 20)))
                    .expect("Unsupported platform! 'apply_blur' is only supported on Windows");

                #[cfg(not(any(target_os = "macos", target_os = "windows")))]
                let _ = window;
            }

            let _ = rolling_logger::info("Dropdock setup complete");
            Ok(())
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::DragDrop(drag_drop) = event {
                dragdrop::forward(window, drag_drop);
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::quit_app,
            commands::pick_files,
            commands::upload_clipboard,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
