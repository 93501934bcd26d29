//! JSON configuration for shape items.

use quire_core::EdgeInsets;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::preset::PresetTable;

/// Settings shared by the shape items of an application.
///
/// ```json
/// {
///   "margins": { "top": 4, "bottom": 4, "leading": 4, "trailing": 4 },
///   "presets": { "dawn": [ { "position": 0, "color": "#FF0000" } ] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Margins applied to new items, between their geometry and content.
    pub margins: EdgeInsets,
    /// Named gradients available to [`ShapeItem::set_fill_preset`](crate::ShapeItem::set_fill_preset).
    pub presets: PresetTable,
}

impl ShapeConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the JSON is malformed or a
    /// color string is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use quire_core::Color;

    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_fields_use_defaults() {
        let config = ShapeConfig::from_json(r#"{ "margins": { "top": 2 } }"#).unwrap();
        assert_eq!(config.margins, EdgeInsets::new(2.0, 0.0, 0.0, 0.0));
        assert!(config.presets.is_empty());
    }

    #[test]
    fn reads_presets() {
        let config = ShapeConfig::from_json(
            r##"{ "presets": { "sea": [
                { "position": 0.0, "color": "#2196F3" },
                { "position": 1.0, "color": "#4CAF50" }
            ] } }"##,
        )
        .unwrap();
        assert_eq!(
            config.presets.two_color("sea").unwrap().colors(),
            (Color::BLUE, Color::GREEN)
        );
    }

    #[test]
    fn bad_color_is_a_config_error() {
        let result = ShapeConfig::from_json(
            r##"{ "presets": { "x": [ { "position": 0.0, "color": "#12" } ] } }"##,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
