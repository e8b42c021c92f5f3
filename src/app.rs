//! Dropdock Frontend App
//!
//! The panel: drop target above a small action menu, wired to the drop
//! coordinator.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dropzone_core::DropCoordinator;

use crate::commands;
use crate::components::{DropZone, MenuItem};
use crate::store::{sync_store, PanelState, PanelStateStoreFields, PanelStore};

#[component]
pub fn App() -> impl IntoView {
    let store = PanelStore::new(PanelState::new());
    provide_context(store);

    let coordinator = StoredValue::new(DropCoordinator::new());

    let select_files = move |_: ()| {
        spawn_local(async move {
            match commands::pick_files().await {
                Ok(files) if !files.is_empty() => {
                    coordinator.update_value(|c| c.files_selected(files));
                    sync_store(&store, coordinator);
                }
                Ok(_) => {}
                Err(e) => {
                    web_sys::console::warn_1(&format!("pick_files failed: {e}").into());
                }
            }
        });
    };

    let upload_clipboard = move |_: ()| {
        spawn_local(async move {
            if let Err(e) = commands::upload_clipboard().await {
                web_sys::console::warn_1(&format!("upload_clipboard failed: {e}").into());
            }
        });
    };

    let quit = move |_: ()| {
        spawn_local(async move {
            let _ = commands::quit_app().await;
        });
    };

    view! {
        <div class="panel">
            <DropZone coordinator=coordinator />

            <Show when=move || !store.native_bridge_ok().get()>
                <p class="bridge-note">"Browser drag-and-drop only"</p>
            </Show>

            <div class="separator" />

            <nav class="menu">
                <MenuItem hotkey="mod+o" on_select=select_files>
                    "Select file"
                </MenuItem>
                <MenuItem hotkey="mod+shift+v" on_select=upload_clipboard>
                    "Upload from clipboard"
                </MenuItem>
                <div class="separator" />
                <MenuItem hotkey="mod+q" on_select=quit>
                    "Quit"
                </MenuItem>
            </nav>
        </div>
    }
}
