//! Panel State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The drop
//! coordinator is the single writer; views only read.

use leptos::prelude::*;
use reactive_stores::Store;

use dropzone_core::{derive_status, DropCoordinator, DropZoneStatus, UploadFile};

/// Reactive mirror of the coordinator plus the DOM bridge's flag.
#[derive(Clone, Debug, Default, Store)]
pub struct PanelState {
    /// Files accepted for upload, in arrival order
    pub upload_queue: Vec<UploadFile>,
    /// Native bridge says the pointer is over the drop target
    pub over_drop_zone: bool,
    /// DOM bridge says a drag is hovering the drop target
    pub is_drag_active: bool,
    /// False when the native channels could not be subscribed
    /// (browser-only mode: DOM drag-and-drop and picker still work)
    pub native_bridge_ok: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            native_bridge_ok: true,
            ..Default::default()
        }
    }
}

pub type PanelStore = Store<PanelState>;

pub fn use_panel_store() -> PanelStore {
    expect_context::<PanelStore>()
}

/// Pure status projection; recomputed on every reactive read, never cached.
pub fn panel_status(store: &PanelStore) -> DropZoneStatus {
    derive_status(
        store.upload_queue().read().len(),
        store.is_drag_active().get(),
        store.over_drop_zone().get(),
    )
}

/// Mirror coordinator state into the store, writing only on change so a
/// stream of redundant drag-over events never re-renders the panel.
pub fn sync_store(store: &PanelStore, coordinator: StoredValue<DropCoordinator>) {
    let over = coordinator.with_value(|c| c.over_drop_zone());
    if store.over_drop_zone().get_untracked() != over {
        store.over_drop_zone().set(over);
    }

    let queue_len = coordinator.with_value(|c| c.queue().len());
    if store.upload_queue().read_untracked().len() != queue_len {
        store
            .upload_queue()
            .set(coordinator.with_value(|c| c.queue().to_vec()));
    }
}
