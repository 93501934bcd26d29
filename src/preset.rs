//! Named gradient presets.
//!
//! A [`PresetTable`] maps names to ordered gradient stops. Shape items only
//! draw two-color gradients, so a preset is reduced to its first and last
//! stop when applied.

use std::collections::BTreeMap;

use quire_core::{Color, FillStyle};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One stop of a named gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, from 0 to 1.
    pub position: f32,
    /// Color at this position.
    pub color: Color,
}

impl GradientStop {
    /// Creates a stop.
    #[must_use]
    pub const fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

/// Table of named gradients, keyed by name.
///
/// Serializes as a JSON object whose values are stop lists:
///
/// ```
/// use quire::PresetTable;
///
/// let table: PresetTable = serde_json::from_str(
///     r##"{ "sunset": [
///         { "position": 0.0, "color": "#FF5E62" },
///         { "position": 0.5, "color": "#FF7F50" },
///         { "position": 1.0, "color": "#FF9966" }
///     ] }"##,
/// )
/// .unwrap();
///
/// assert_eq!(table.get("sunset").map(<[_]>::len), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetTable {
    presets: BTreeMap<String, Vec<GradientStop>>,
}

impl PresetTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a preset. Stops are kept in the order given.
    pub fn insert(&mut self, name: impl Into<String>, stops: Vec<GradientStop>) {
        self.presets.insert(name.into(), stops);
    }

    /// Returns the stops of a preset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[GradientStop]> {
        self.presets.get(name).map(Vec::as_slice)
    }

    /// Iterates over the preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Returns `true` if the table holds no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Reduces a preset to a two-color fill from its first and last stop.
    ///
    /// A single-stop preset yields a solid fill.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPreset`] if `name` is not in the table and
    /// [`Error::EmptyPreset`] if the preset has no stops.
    pub fn two_color(&self, name: &str) -> Result<FillStyle> {
        let stops = self
            .get(name)
            .ok_or_else(|| Error::UnknownPreset(name.to_owned()))?;
        match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => Ok(FillStyle::from_colors(first.color, last.color)),
            _ => Err(Error::EmptyPreset(name.to_owned())),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<GradientStop>)> for PresetTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<GradientStop>)>>(iter: I) -> Self {
        Self {
            presets: iter
                .into_iter()
                .map(|(name, stops)| (name.into(), stops))
                .collect(),
        }
    }
}
