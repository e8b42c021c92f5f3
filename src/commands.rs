//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

use wasm_bindgen::prelude::*;

use dropzone_core::UploadFile;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

/// Terminate the application. Fire-and-forget; no return value consumed.
pub async fn quit_app() -> Result<(), String> {
    let _ = invoke("quit_app", JsValue::NULL).await;
    Ok(())
}

/// Surface the native file chooser; resolves to the picked files with their
/// contents. Cancelling yields an empty list.
pub async fn pick_files() -> Result<Vec<UploadFile>, String> {
    let result = invoke("pick_files", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Clipboard upload menu action; backend stub for now.
pub async fn upload_clipboard() -> Result<(), String> {
    let _ = invoke("upload_clipboard", JsValue::NULL).await;
    Ok(())
}
