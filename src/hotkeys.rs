//! Keyboard shortcut parsing and display.
//!
//! Combos use the `"mod+shift+v"` form. `mod` is the platform's primary
//! modifier: ⌘ on macOS, Ctrl elsewhere.

/// Modifier keys held during a keydown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hotkey {
    mod_key: bool,
    ctrl: bool,
    shift: bool,
    alt: bool,
    meta: bool,
    key: String,
}

/// Parse a combo spec. Empty input or a spec with no non-modifier key
/// means no hotkey.
pub fn parse(spec: &str) -> Option<Hotkey> {
    if spec.is_empty() {
        return None;
    }
    let mut hotkey = Hotkey::default();
    for part in spec.split('+') {
        match part {
            "mod" => hotkey.mod_key = true,
            "ctrl" => hotkey.ctrl = true,
            "shift" => hotkey.shift = true,
            "alt" => hotkey.alt = true,
            "meta" => hotkey.meta = true,
            key => hotkey.key = key.to_lowercase(),
        }
    }
    if hotkey.key.is_empty() {
        None
    } else {
        Some(hotkey)
    }
}

impl Hotkey {
    /// Modifier set this combo requires on the given platform.
    fn required(&self, mac: bool) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl || (self.mod_key && !mac),
            meta: self.meta || (self.mod_key && mac),
            shift: self.shift,
            alt: self.alt,
        }
    }

    pub fn matches(&self, key: &str, pressed: Modifiers, mac: bool) -> bool {
        key.to_lowercase() == self.key && pressed == self.required(mac)
    }

    /// Display form, e.g. `⌘⇧V` on macOS and `^⇧V` elsewhere.
    pub fn symbols(&self, mac: bool) -> String {
        let required = self.required(mac);
        let mut out = String::new();
        if required.ctrl {
            out.push('^');
        }
        if required.alt {
            out.push('⌥');
        }
        if required.shift {
            out.push('⇧');
        }
        if required.meta {
            out.push('⌘');
        }
        out.push_str(&self.key.to_uppercase());
        out
    }
}

pub fn is_macos() -> bool {
    web_sys::window()
        .map(|w| {
            w.navigator()
                .user_agent()
                .unwrap_or_default()
                .to_uppercase()
                .contains("MAC")
        })
        .unwrap_or(false)
}
