#![deny(unsafe_code)]
//! Core palette engine for tonal.
//!
//! Turns one base color into a lightness ramp in OKLCh: a sigmoid spaces the
//! shades from dark to light, a mountain curve tapers chroma toward both
//! ends, and the original color is slotted into the sorted result. Also
//! provides the chart curve series, CSS/JSON export, and the explicit UI
//! state machine the bindings drive.

pub mod chart;
pub mod chroma;
pub mod color;
pub mod curve;
pub mod error;
pub mod export;
pub mod lightness;
pub mod palette;
pub mod params;
pub mod session;

pub use chart::CurveSeries;
pub use color::{parse, BaseColor, OkLch};
pub use error::PaletteError;
pub use export::ExportFormat;
pub use palette::{assemble_palette, ColorSample, Palette};
pub use params::ShapingParams;
pub use session::{update, AppState, Notification, UiEvent, Update};
