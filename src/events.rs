//! Native Drag Bridge
//!
//! Subscribes to the two window-manager channels the backend republishes
//! (`drop-files`, `drag-over`) and runs one coordinator step per delivered
//! event. The drop target is re-measured at every step, so hit tests never
//! see a stale box.

use js_sys::Function;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use dropzone_core::{
    BoundingBox, DropCoordinator, DropDisposition, DroppedFile, Point, Subscription,
    DRAG_OVER_EVENT, DROP_FILES_EVENT,
};

use crate::store::{sync_store, PanelStore};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Function) -> Result<JsValue, JsValue>;
}

/// Measure the drop target as laid out right now. A detached target yields
/// a box that classifies every point outside.
pub fn measure(target: NodeRef<Div>) -> BoundingBox {
    match target.get_untracked() {
        Some(el) => {
            let rect = el.get_bounding_client_rect();
            BoundingBox::new(rect.top(), rect.left(), rect.right(), rect.bottom())
        }
        None => BoundingBox::DETACHED,
    }
}

/// Both channel subscriptions, released together on unmount.
#[derive(Default)]
pub struct NativeDragBridge {
    drop_files: Subscription,
    drag_over: Subscription,
}

impl NativeDragBridge {
    /// Swap in freshly attached subscriptions, releasing the old handlers
    /// first so a later single drop is never delivered twice.
    pub fn replace(&mut self, next: NativeDragBridge) {
        self.drop_files.replace(next.drop_files);
        self.drag_over.replace(next.drag_over);
    }

    pub fn release(&mut self) {
        self.drop_files.cancel();
        self.drag_over.cancel();
    }
}

/// Subscribe both channels. Fails once, at mount, if the native host is
/// unavailable; the panel then runs on the DOM bridge alone.
pub async fn attach(
    target: NodeRef<Div>,
    coordinator: StoredValue<DropCoordinator>,
    store: PanelStore,
) -> Result<NativeDragBridge, String> {
    let drop_files = subscribe(DROP_FILES_EVENT, move |event: JsValue| {
        let Some(payload) = event_payload::<DroppedFile>(&event, DROP_FILES_EVENT) else {
            return;
        };
        let bounds = measure(target);
        let mut disposition = DropDisposition::Malformed;
        coordinator.update_value(|c| disposition = c.file_dropped(payload, &bounds));
        if disposition == DropDisposition::Malformed {
            web_sys::console::warn_1(&"dropping malformed file payload".into());
        }
        sync_store(&store, coordinator);
    })
    .await?;

    let drag_over = subscribe(DRAG_OVER_EVENT, move |event: JsValue| {
        let Some(point) = event_payload::<Point>(&event, DRAG_OVER_EVENT) else {
            return;
        };
        let bounds = measure(target);
        let mut changed = false;
        coordinator.update_value(|c| changed = c.pointer_drag_over(point, &bounds));
        if changed {
            sync_store(&store, coordinator);
        }
    })
    .await?;

    Ok(NativeDragBridge {
        drop_files,
        drag_over,
    })
}

async fn subscribe(
    channel: &'static str,
    handler: impl FnMut(JsValue) + 'static,
) -> Result<Subscription, String> {
    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    let unlisten = listen(channel, closure.as_ref().unchecked_ref())
        .await
        .map_err(|e| format!("failed to subscribe {channel}: {e:?}"))?;
    let unlisten: Function = unlisten
        .dyn_into()
        .map_err(|_| format!("{channel}: unlisten is not a function"))?;

    // The handler closure lives exactly as long as the subscription.
    Ok(Subscription::new(move || {
        let _ = unlisten.call0(&JsValue::NULL);
        drop(closure);
    }))
}

fn event_payload<T: serde::de::DeserializeOwned>(event: &JsValue, channel: &str) -> Option<T> {
    let payload = js_sys::Reflect::get(event, &JsValue::from_str("payload")).ok()?;
    match serde_wasm_bindgen::from_value(payload) {
        Ok(value) => Some(value),
        Err(e) => {
            web_sys::console::warn_1(&format!("malformed {channel} payload: {e}").into());
            None
        }
    }
}
