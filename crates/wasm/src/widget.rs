//! Color input widgets and picker synchronization.
//!
//! The core session only says "move the picker to this hex". Delivery lives
//! here, and skips any widget already showing that hex so a picker that
//! echoes its own change back as input does not loop.

use js_sys::Function;
use tonal_core::Notification;
use wasm_bindgen::JsValue;

/// A control that displays and edits one color.
pub trait ColorInputWidget {
    /// Hex currently shown, if the widget has one.
    fn current_hex(&self) -> Option<String>;
    /// Displays `hex` without raising a change of its own.
    fn show_hex(&mut self, hex: &str);
}

/// A widget implemented in JS as a getter/setter pair.
pub struct JsColorWidget {
    get: Function,
    set: Function,
}

impl JsColorWidget {
    pub fn new(get: Function, set: Function) -> Self {
        Self { get, set }
    }
}

impl ColorInputWidget for JsColorWidget {
    fn current_hex(&self) -> Option<String> {
        match self.get.call0(&JsValue::NULL) {
            Ok(value) => value.as_string(),
            Err(e) => {
                log::warn!("color widget getter threw: {e:?}");
                None
            }
        }
    }

    fn show_hex(&mut self, hex: &str) {
        if let Err(e) = self.set.call1(&JsValue::NULL, &JsValue::from_str(hex)) {
            log::warn!("color widget setter threw: {e:?}");
        }
    }
}

/// Delivers a `SyncPicker` notification to `widgets`.
///
/// Returns how many widgets were updated. Other notifications and widgets
/// already showing the hex (case-insensitive) are skipped.
pub fn deliver(notification: &Notification, widgets: &mut [&mut dyn ColorInputWidget]) -> usize {
    let Notification::SyncPicker(hex) = notification else {
        return 0;
    };

    let mut delivered = 0;
    for widget in widgets.iter_mut() {
        let unchanged = widget
            .current_hex()
            .is_some_and(|current| current.eq_ignore_ascii_case(hex));
        if unchanged {
            continue;
        }
        widget.show_hex(hex);
        delivered += 1;
    }
    delivered
}
