//! Commands Layer
//!
//! Tauri command handlers that bridge the panel frontend to the backend.

mod app_cmd;
mod clipboard_cmd;
mod dialog_cmd;

pub use app_cmd::*;
pub use clipboard_cmd::*;
pub use dialog_cmd::*;
