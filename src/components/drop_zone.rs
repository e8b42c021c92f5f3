//! Drop Zone Component
//!
//! The drop target: native drag bridge and DOM drag bridge reconciled
//! through the drop coordinator. Clicks are not intercepted; the file
//! picker is reachable only through the menu.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::DragEvent;

use dropzone_core::{DropCoordinator, DropZoneStatus, UploadFile};

use crate::components::ProgressBar;
use crate::events::{self, NativeDragBridge};
use crate::store::{panel_status, sync_store, use_panel_store, PanelStateStoreFields};

/// Placeholder progress; real transport is not wired up.
const PLACEHOLDER_PROGRESS: u32 = 40;

#[component]
pub fn DropZone(coordinator: StoredValue<DropCoordinator>) -> impl IntoView {
    let store = use_panel_store();
    let target: NodeRef<Div> = NodeRef::new();

    // The native bridge lives until unmount. Attach failure (no native
    // host) degrades to DOM-only drag-and-drop plus the picker.
    let bridge: Rc<RefCell<NativeDragBridge>> = Rc::default();
    {
        let bridge = Rc::clone(&bridge);
        Effect::new(move |_| {
            if target.get().is_none() {
                return;
            }
            let bridge = Rc::clone(&bridge);
            spawn_local(async move {
                match events::attach(target, coordinator, store).await {
                    Ok(attached) => bridge.borrow_mut().replace(attached),
                    Err(e) => {
                        store.native_bridge_ok().set(false);
                        web_sys::console::warn_1(
                            &format!("native drag bridge unavailable: {e}").into(),
                        );
                    }
                }
            });
        });
    }
    {
        let bridge = send_wrapper::SendWrapper::new(Rc::clone(&bridge));
        on_cleanup(move || bridge.borrow_mut().release());
    }

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !store.is_drag_active().get_untracked() {
            store.is_drag_active().set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        if store.is_drag_active().get_untracked() {
            store.is_drag_active().set(false);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        store.is_drag_active().set(false);

        let Some(transfer) = ev.data_transfer() else {
            return;
        };
        let Some(list) = transfer.files() else {
            return;
        };
        let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        if files.is_empty() {
            return;
        }

        spawn_local(async move {
            let mut accepted = Vec::with_capacity(files.len());
            for file in files {
                match read_browser_file(&file).await {
                    Ok(upload) => accepted.push(upload),
                    Err(e) => web_sys::console::warn_1(
                        &format!("failed to read {}: {e}", file.name()).into(),
                    ),
                }
            }
            if accepted.is_empty() {
                return;
            }
            coordinator.update_value(|c| c.files_selected(accepted));
            sync_store(&store, coordinator);
        });
    };

    let cancel = move |_| {
        coordinator.update_value(|c| c.cancel_upload());
        sync_store(&store, coordinator);
    };

    let upload_label = move || {
        let queue = store.upload_queue().read();
        if queue.len() > 1 {
            format!("Uploading {} file(s)...", queue.len())
        } else {
            match queue.first() {
                Some(file) => format!("Uploading {}", file.display_label()),
                None => String::new(),
            }
        }
    };

    view! {
        <div
            node_ref=target
            class="drop-target"
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            {move || match panel_status(&store) {
                DropZoneStatus::Pending => view! {
                    <p class="drop-hint">"Drag files here..."</p>
                }.into_any(),
                DropZoneStatus::Active => view! {
                    <p class="drop-hint">"Start upload..."</p>
                }.into_any(),
                DropZoneStatus::Accepting => view! {
                    <div class="upload-summary">
                        <div class="upload-row">
                            <p class="upload-label">{upload_label}</p>
                            <button
                                class="cancel-upload"
                                title="Cancel upload"
                                on:click=cancel
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                        <ProgressBar progress=PLACEHOLDER_PROGRESS />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// Read a browser `File` into an upload unit. The browser already gives a
/// proper name; no path normalization needed.
async fn read_browser_file(file: &web_sys::File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(UploadFile {
        name: file.name(),
        content: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
