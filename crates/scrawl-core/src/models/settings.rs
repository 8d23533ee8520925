//! Application settings model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Smallest selectable base font size in pixels
pub const FONT_SIZE_MIN: u32 = 12;
/// Largest selectable base font size in pixels
pub const FONT_SIZE_MAX: u32 = 24;
/// Increment used by the bigger/smaller font controls
pub const FONT_SIZE_STEP: i32 = 2;
/// Base font size used until the user changes it
pub const DEFAULT_FONT_SIZE: u32 = 16;
/// Font stack used until the user changes it
pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";

/// Font stacks offered to users.
///
/// Not enforced when a family is set; any string is accepted.
pub const FONT_FAMILIES: &[&str] = &[
    "Arial, sans-serif",
    "'Times New Roman', serif",
    "'Courier New', monospace",
    "Georgia, serif",
    "Verdana, sans-serif",
];

/// Size label derived from the pixel font size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Label for a pixel size: small up to 14, medium up to 18, large above
    #[must_use]
    pub const fn for_value(px: u32) -> Self {
        if px <= 14 {
            Self::Small
        } else if px <= 18 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Dark theme enabled
    pub dark_mode: bool,
    /// Derived from `font_size_value`; never set on its own
    pub font_size: FontSize,
    /// Base font size in pixels, within [`FONT_SIZE_MIN`, `FONT_SIZE_MAX`]
    pub font_size_value: u32,
    /// CSS font stack for note text
    pub font_family: String,
    /// Save the open note after a pause in typing
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: FontSize::for_value(DEFAULT_FONT_SIZE),
            font_size_value: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            auto_save: false,
        }
    }
}

impl Settings {
    /// Overlay a persisted record onto these settings.
    ///
    /// Only fields that are present and well-typed are taken. `fontSize` is
    /// always recomputed from `fontSizeValue`, whatever the record says.
    #[must_use]
    pub fn merged_with(mut self, persisted: &Value) -> Self {
        let Some(fields) = persisted.as_object() else {
            tracing::warn!("Persisted settings are not an object; keeping defaults");
            return self;
        };

        if let Some(value) = fields.get("darkMode") {
            match value.as_bool() {
                Some(dark_mode) => self.dark_mode = dark_mode,
                None => tracing::warn!("Ignoring ill-typed darkMode setting: {value}"),
            }
        }

        if let Some(value) = fields.get("fontSizeValue") {
            match value.as_i64() {
                Some(px) => self.set_font_size_value(clamp_font_size(px)),
                None => tracing::warn!("Ignoring ill-typed fontSizeValue setting: {value}"),
            }
        }

        if let Some(value) = fields.get("fontFamily") {
            match value.as_str() {
                Some(family) => self.font_family = family.to_string(),
                None => tracing::warn!("Ignoring ill-typed fontFamily setting: {value}"),
            }
        }

        if let Some(value) = fields.get("autoSave") {
            match value.as_bool() {
                Some(auto_save) => self.auto_save = auto_save,
                None => tracing::warn!("Ignoring ill-typed autoSave setting: {value}"),
            }
        }

        self
    }

    /// Set the pixel size and keep the derived label in step
    pub(crate) fn set_font_size_value(&mut self, px: u32) {
        self.font_size_value = px;
        self.font_size = FontSize::for_value(px);
    }

    /// First entry of the font stack without quotes, e.g. `Times New Roman`
    #[must_use]
    pub fn font_family_label(&self) -> &str {
        self.font_family
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
    }
}

/// Clamp any integer into the selectable font size range and round it to the
/// nearest step above [`FONT_SIZE_MIN`]; halfway values round up
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clamp_font_size(px: i64) -> u32 {
    let min = i64::from(FONT_SIZE_MIN);
    let max = i64::from(FONT_SIZE_MAX);
    let step = i64::from(FONT_SIZE_STEP);

    let offset = px.clamp(min, max) - min;
    let snapped = min + (offset + step / 2) / step * step;
    snapped.min(max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.dark_mode);
        assert_eq!(settings.font_size_value, 16);
        assert_eq!(settings.font_size, FontSize::Medium);
        assert_eq!(settings.font_family, "Arial, sans-serif");
        assert!(!settings.auto_save);
    }

    #[test]
    fn test_font_size_labels() {
        assert_eq!(FontSize::for_value(12), FontSize::Small);
        assert_eq!(FontSize::for_value(14), FontSize::Small);
        assert_eq!(FontSize::for_value(16), FontSize::Medium);
        assert_eq!(FontSize::for_value(18), FontSize::Medium);
        assert_eq!(FontSize::for_value(20), FontSize::Large);
        assert_eq!(FontSize::for_value(24), FontSize::Large);
    }

    #[test]
    fn test_settings_serialize_with_storage_field_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            json,
            json!({
                "darkMode": true,
                "fontSize": "medium",
                "fontSizeValue": 16,
                "fontFamily": "Arial, sans-serif",
                "autoSave": false
            })
        );
    }

    #[test]
    fn test_merge_takes_present_fields() {
        let merged = Settings::default().merged_with(&json!({
            "darkMode": false,
            "fontSizeValue": 20,
            "autoSave": true
        }));
        assert!(!merged.dark_mode);
        assert_eq!(merged.font_size_value, 20);
        assert_eq!(merged.font_size, FontSize::Large);
        assert_eq!(merged.font_family, DEFAULT_FONT_FAMILY);
        assert!(merged.auto_save);
    }

    #[test]
    fn test_merge_ignores_ill_typed_fields() {
        let merged = Settings::default().merged_with(&json!({
            "darkMode": "no",
            "fontSizeValue": "huge",
            "fontFamily": 7,
            "autoSave": null
        }));
        assert_eq!(merged, Settings::default());
    }

    #[test]
    fn test_merge_recomputes_font_size_label() {
        let merged = Settings::default().merged_with(&json!({
            "fontSize": "large",
            "fontSizeValue": 12
        }));
        assert_eq!(merged.font_size, FontSize::Small);
    }

    #[test]
    fn test_merge_clamps_out_of_range_font_size() {
        let merged = Settings::default().merged_with(&json!({ "fontSizeValue": 90 }));
        assert_eq!(merged.font_size_value, FONT_SIZE_MAX);
        let merged = Settings::default().merged_with(&json!({ "fontSizeValue": -3 }));
        assert_eq!(merged.font_size_value, FONT_SIZE_MIN);
    }

    #[test]
    fn test_merge_rounds_off_step_font_size() {
        let merged = Settings::default().merged_with(&json!({ "fontSizeValue": 15 }));
        assert_eq!(merged.font_size_value, 16);
        let merged = Settings::default().merged_with(&json!({ "fontSizeValue": 13 }));
        assert_eq!(merged.font_size_value, 14);
        let merged = Settings::default().merged_with(&json!({ "fontSizeValue": 23 }));
        assert_eq!(merged.font_size_value, FONT_SIZE_MAX);
    }

    #[test]
    fn test_merge_with_non_object_keeps_defaults() {
        assert_eq!(Settings::default().merged_with(&json!([1, 2])), Settings::default());
    }

    #[test]
    fn test_font_family_label() {
        let mut settings = Settings::default();
        assert_eq!(settings.font_family_label(), "Arial");
        settings.font_family = "'Times New Roman', serif".to_string();
        assert_eq!(settings.font_family_label(), "Times New Roman");
    }
}
