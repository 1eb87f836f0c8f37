//! Explicit UI state: input fields, shaping parameters and the displayed
//! palette, advanced one event at a time.
//!
//! [`update`] is a pure transition. It never touches widgets; instead it
//! returns [`Notification`]s the host delivers to the picker, the chart and
//! the palette view. Input that does not parse is not an error here: the
//! palette is simply hidden until the user types something valid.

use crate::chart::CurveSeries;
use crate::color::{is_valid_hex, parse, to_rgb_string};
use crate::palette::Palette;
use crate::params::ShapingParams;
use serde::Serialize;

/// Color shown before the user picks anything.
pub const DEFAULT_COLOR: &str = "#ff0000";

/// One user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The hex text field changed.
    HexInput(String),
    /// The RGB text field changed.
    RgbInput(String),
    /// The visual picker settled on a `#rrggbb` value.
    PickerChanged(String),
    CountChanged(usize),
    SteepnessChanged(f64),
    ChromaHeightChanged(f64),
}

/// Side effect the host must apply after a transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Notification {
    /// Move the visual picker to this hex.
    SyncPicker(String),
    /// Shaping parameters changed; redraw the curve chart.
    RedrawChart(CurveSeries),
    /// A palette was (re)generated and should be displayed.
    PaletteShown,
    /// The current color did not parse; hide the palette.
    PaletteHidden,
}

/// Everything the UI displays, as a plain value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub hex_input: String,
    pub rgb_input: String,
    pub params: ShapingParams,
    pub palette: Option<Palette>,
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub state: AppState,
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// State after loading the page: [`DEFAULT_COLOR`] picked with default
    /// parameters and its palette displayed.
    pub fn initial() -> Self {
        update(
            &AppState::default(),
            UiEvent::PickerChanged(DEFAULT_COLOR.to_string()),
        )
        .state
    }

    /// The color regeneration works from: hex field, else RGB field, else
    /// [`DEFAULT_COLOR`].
    pub fn current_color(&self) -> &str {
        let hex = self.hex_input.trim();
        if !hex.is_empty() {
            return hex;
        }
        let rgb = self.rgb_input.trim();
        if !rgb.is_empty() {
            return rgb;
        }
        DEFAULT_COLOR
    }

    /// True while a palette is displayed.
    pub fn palette_visible(&self) -> bool {
        self.palette.is_some()
    }

    /// Curve series for the current parameters.
    pub fn chart(&self) -> CurveSeries {
        CurveSeries::sample(&self.params)
    }
}

/// Applies `event` to `state`, returning the next state and the
/// notifications for the host.
pub fn update(state: &AppState, event: UiEvent) -> Update {
    let mut next = state.clone();
    let mut notifications = Vec::new();

    match event {
        UiEvent::HexInput(value) => {
            if is_valid_hex(&value) {
                notifications.push(Notification::SyncPicker(value.to_ascii_lowercase()));
            }
            next.rgb_input.clear();
            let regenerate = !value.trim().is_empty();
            next.hex_input = value;
            if regenerate {
                let color = next.hex_input.trim().to_string();
                regenerate_into(&mut next, &color, &mut notifications);
            }
        }
        UiEvent::RgbInput(value) => {
            next.hex_input.clear();
            match parse(&value) {
                Ok(color) => {
                    notifications.push(Notification::SyncPicker(color.hex().to_string()));
                    next.rgb_input = value;
                    let color = next.rgb_input.trim().to_string();
                    regenerate_into(&mut next, &color, &mut notifications);
                }
                Err(e) => {
                    log::debug!("rgb input not applied: {e}");
                    next.rgb_input = value;
                }
            }
        }
        UiEvent::PickerChanged(hex) if hex.trim().is_empty() => {
            log::debug!("ignoring blank picker value");
        }
        UiEvent::PickerChanged(hex) => {
            match parse(&hex) {
                Ok(color) => next.rgb_input = to_rgb_string(&color),
                Err(e) => log::debug!("picker value not converted to rgb: {e}"),
            }
            next.hex_input = hex;
            let color = next.hex_input.trim().to_string();
            regenerate_into(&mut next, &color, &mut notifications);
        }
        UiEvent::CountChanged(count) => {
            next.params = ShapingParams { count, ..next.params }.clamped();
            params_changed(&mut next, &mut notifications);
        }
        UiEvent::SteepnessChanged(steepness) => {
            next.params.steepness = steepness;
            params_changed(&mut next, &mut notifications);
        }
        UiEvent::ChromaHeightChanged(chroma_height) => {
            next.params.chroma_height = chroma_height;
            params_changed(&mut next, &mut notifications);
        }
    }

    Update {
        state: next,
        notifications,
    }
}

fn params_changed(state: &mut AppState, notifications: &mut Vec<Notification>) {
    if state.palette_visible() {
        let color = state.current_color().to_string();
        regenerate_into(state, &color, notifications);
    }
    notifications.push(Notification::RedrawChart(state.chart()));
}

fn regenerate_into(state: &mut AppState, color: &str, notifications: &mut Vec<Notification>) {
    match Palette::generate(color, &state.params) {
        Ok(palette) => {
            state.palette = Some(palette);
            notifications.push(Notification::PaletteShown);
        }
        Err(e) => {
            log::debug!("palette hidden: {e}");
            state.palette = None;
            notifications.push(Notification::PaletteHidden);
        }
    }
}
