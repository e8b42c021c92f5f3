//! Menu Item Component
//!
//! Panel menu row with an optional keyboard shortcut, shown with platform
//! modifier symbols.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::hotkeys::{self, Modifiers};

#[component]
pub fn MenuItem(
    /// Shortcut in `"mod+shift+v"` form; empty for none
    #[prop(optional, into)]
    hotkey: String,
    #[prop(into)] on_select: Callback<()>,
    children: Children,
) -> impl IntoView {
    let combo = hotkeys::parse(&hotkey);
    let mac = hotkeys::is_macos();

    if let Some(combo) = combo.clone() {
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            let pressed = Modifiers {
                ctrl: ev.ctrl_key(),
                shift: ev.shift_key(),
                alt: ev.alt_key(),
                meta: ev.meta_key(),
            };
            if combo.matches(&ev.key(), pressed, mac) {
                ev.prevent_default();
                on_select.run(());
            }
        });
        if let Some(win) = web_sys::window() {
            let _ = win
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
        // Menu items live for the panel's lifetime; so does the handler.
        on_keydown.forget();
    }

    let symbols = combo.map(|c| c.symbols(mac)).unwrap_or_default();

    view! {
        <button class="menu-item" on:click=move |_| on_select.run(())>
            <div class="menu-item-label">{children()}</div>
            <div class="menu-item-hotkey">{symbols}</div>
        </button>
    }
}
