//! Export formatting: CSS custom properties and a JSON document.
//!
//! Shades are labelled by rounded lightness percentage (`--color-42`,
//! `shade-42`); the original color is always `primary`.

use crate::error::PaletteError;
use crate::palette::{ColorSample, Palette};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Output formats a palette can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Css,
    Json,
}

impl ExportFormat {
    /// Looks up a format by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, PaletteError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            _ => Err(PaletteError::UnknownFormat(name.to_string())),
        }
    }

    /// Suggested download file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Css => "color-palette.css",
            Self::Json => "color-palette.json",
        }
    }

    /// MIME type of the exported content.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Css => "text/css",
            Self::Json => "application/json",
        }
    }
}

fn variable_name(sample: &ColorSample) -> String {
    if sample.is_original() {
        "--color-primary".to_string()
    } else {
        format!("--color-{}", sample.lightness_percent())
    }
}

/// Formats the palette as a `:root` block of custom properties followed by
/// example utility classes.
pub fn to_css(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for sample in palette {
        out.push_str(&format!("  {}: {};\n", variable_name(sample), sample.hex()));
    }
    out.push_str("}\n\n/* Usage */\n");
    out.push_str(".primary { color: var(--color-primary); }\n");
    for sample in palette.iter().filter(|s| !s.is_original()) {
        let pct = sample.lightness_percent();
        out.push_str(&format!(".text-{pct} {{ color: var(--color-{pct}); }}\n"));
    }
    out
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportEntry<'a> {
    name: String,
    hex: &'a str,
    lightness: i64,
    chroma: i64,
    is_original: bool,
}

impl<'a> From<&'a ColorSample> for ExportEntry<'a> {
    fn from(sample: &'a ColorSample) -> Self {
        let name = if sample.is_original() {
            "primary".to_string()
        } else {
            format!("shade-{}", sample.lightness_percent())
        };
        Self {
            name,
            hex: sample.hex(),
            lightness: sample.lightness_percent(),
            chroma: sample.chroma_percent(),
            is_original: sample.is_original(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    palette: Vec<ExportEntry<'a>>,
    generated: String,
    total: usize,
}

/// Formats the palette as pretty-printed JSON stamped with the current time.
pub fn to_json(palette: &Palette) -> Result<String, PaletteError> {
    to_json_at(palette, Utc::now())
}

/// Formats the palette as pretty-printed JSON stamped with `generated`.
pub fn to_json_at(palette: &Palette, generated: DateTime<Utc>) -> Result<String, PaletteError> {
    let document = ExportDocument {
        palette: palette.iter().map(ExportEntry::from).collect(),
        generated: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
        total: palette.len(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Exports the palette in `format`.
pub fn export(palette: &Palette, format: ExportFormat) -> Result<String, PaletteError> {
    let content = match format {
        ExportFormat::Css => to_css(palette),
        ExportFormat::Json => to_json(palette)?,
    };
    log::debug!(
        "exported {} swatches as {} ({} bytes)",
        palette.len(),
        format.file_name(),
        content.len()
    );
    Ok(content)
}
