#![deny(unsafe_code)]
//! WASM bindings for the tonal palette engine.
//!
//! [`PaletteApp`] owns the UI state and feeds it events from the page; each
//! event returns JSON with the new state and the notifications the page
//! still has to apply. Picker syncs are delivered here, through
//! [`widget::deliver`], when a picker widget is attached.

pub mod widget;

use js_sys::Function;
use serde::Serialize;
use serde_json::Value;
use tonal_core::export::{self, ExportFormat};
use tonal_core::{
    update, AppState, CurveSeries, Notification, Palette, PaletteError, ShapingParams, UiEvent,
    Update,
};
use wasm_bindgen::prelude::*;
use widget::{deliver, ColorInputWidget, JsColorWidget};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // Already initialized by an earlier start.
        log::debug!("console logger already installed");
    }
}

#[derive(Serialize)]
struct EventResponse<'a> {
    state: &'a AppState,
    notifications: Vec<Notification>,
}

/// Stateful palette UI driven from JS.
#[wasm_bindgen]
pub struct PaletteApp {
    state: AppState,
    picker: Option<JsColorWidget>,
}

impl Default for PaletteApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PaletteApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: AppState::initial(),
            picker: None,
        }
    }

    /// Attaches the visual picker as a getter/setter pair of JS functions.
    #[wasm_bindgen(js_name = attachPicker)]
    pub fn attach_picker(&mut self, get: Function, set: Function) {
        self.picker = Some(JsColorWidget::new(get, set));
    }

    #[wasm_bindgen(js_name = hexInput)]
    pub fn hex_input(&mut self, value: String) -> Result<String, JsError> {
        Ok(self.apply(UiEvent::HexInput(value))?)
    }

    #[wasm_bindgen(js_name = rgbInput)]
    pub fn rgb_input(&mut self, value: String) -> Result<String, JsError> {
        Ok(self.apply(UiEvent::RgbInput(value))?)
    }

    #[wasm_bindgen(js_name = pickerChanged)]
    pub fn picker_changed(&mut self, hex: String) -> Result<String, JsError> {
        Ok(self.apply(UiEvent::PickerChanged(hex))?)
    }

    #[wasm_bindgen(js_name = setCount)]
    pub fn set_count(&mut self, count: u32) -> Result<String, JsError> {
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        Ok(self.apply(UiEvent::CountChanged(count))?)
    }

    #[wasm_bindgen(js_name = setSteepness)]
    pub fn set_steepness(&mut self, steepness: f64) -> Result<String, JsError> {
        Ok(self.apply(UiEvent::SteepnessChanged(steepness))?)
    }

    #[wasm_bindgen(js_name = setChromaHeight)]
    pub fn set_chroma_height(&mut self, chroma_height: f64) -> Result<String, JsError> {
        Ok(self.apply(UiEvent::ChromaHeightChanged(chroma_height))?)
    }

    /// Current state as JSON.
    pub fn state(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Curve series for the current parameters as JSON.
    pub fn chart(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.state.chart())?)
    }

    /// Exports the displayed palette as `"css"` or `"json"`.
    pub fn export(&self, format: &str) -> Result<String, JsError> {
        self.export_displayed(format).map_err(|e| {
            log::error!("export failed: {e}");
            JsError::from(e)
        })
    }
}

impl PaletteApp {
    fn apply(&mut self, event: UiEvent) -> Result<String, PaletteError> {
        let Update {
            state,
            notifications,
        } = update(&self.state, event);
        self.state = state;

        // Picker syncs are delivered here when a picker is attached; the page
        // applies everything else.
        let mut pending = Vec::with_capacity(notifications.len());
        for notification in notifications {
            if let (Some(picker), Notification::SyncPicker(_)) =
                (self.picker.as_mut(), &notification)
            {
                deliver(&notification, &mut [picker as &mut dyn ColorInputWidget]);
                continue;
            }
            pending.push(notification);
        }

        let response = EventResponse {
            state: &self.state,
            notifications: pending,
        };
        Ok(serde_json::to_string(&response)?)
    }

    fn export_displayed(&self, format: &str) -> Result<String, PaletteError> {
        let format = ExportFormat::from_name(format)?;
        match &self.state.palette {
            Some(palette) => export::export(palette, format),
            None => Err(PaletteError::InvalidColor(format!(
                "no palette for {:?}",
                self.state.current_color()
            ))),
        }
    }
}

fn params_from_str(params: &str) -> Result<ShapingParams, PaletteError> {
    if params.trim().is_empty() {
        return Ok(ShapingParams::default());
    }
    let value: Value = serde_json::from_str(params)?;
    Ok(ShapingParams::from_json(&value))
}

fn generate_json(color: &str, params: &str) -> Result<String, PaletteError> {
    let palette = Palette::generate(color, &params_from_str(params)?)?;
    Ok(serde_json::to_string(&palette)?)
}

fn curves_json(params: &str) -> Result<String, PaletteError> {
    Ok(serde_json::to_string(&CurveSeries::sample(&params_from_str(params)?))?)
}

fn export_json(color: &str, params: &str, format: &str) -> Result<String, PaletteError> {
    let format = ExportFormat::from_name(format)?;
    let palette = Palette::generate(color, &params_from_str(params)?)?;
    export::export(&palette, format)
}

/// Generates a palette for `color`; `params` is a JSON object (may be empty).
#[wasm_bindgen(js_name = generatePalette)]
pub fn generate_palette(color: &str, params: &str) -> Result<String, JsError> {
    Ok(generate_json(color, params)?)
}

/// Lightness and chroma curve series for the chart.
#[wasm_bindgen]
pub fn curves(params: &str) -> Result<String, JsError> {
    Ok(curves_json(params)?)
}

/// Exports the palette for `color` in `format` (`"css"` or `"json"`).
#[wasm_bindgen(js_name = exportPalette)]
pub fn export_palette(color: &str, params: &str, format: &str) -> Result<String, JsError> {
    export_json(color, params, format).map_err(|e| {
        log::error!("export failed: {e}");
        JsError::from(e)
    })
}

/// Suggested file name and MIME type for `format`, as JSON.
#[wasm_bindgen(js_name = exportTarget)]
pub fn export_target(format: &str) -> Result<String, JsError> {
    let format = ExportFormat::from_name(format)?;
    Ok(serde_json::json!({
        "fileName": format.file_name(),
        "contentType": format.content_type(),
    })
    .to_string())
}

/// Parameter schema as JSON.
#[wasm_bindgen(js_name = paramSchema)]
pub fn param_schema() -> String {
    ShapingParams::param_schema().to_string()
}
