//! Errors raised while configuring shape items.

use quire_color::HexColorError;
use thiserror::Error;

/// Errors produced at the configuration edge.
///
/// Per-frame updates never fail; these only come from building items out of
/// names, strings or JSON.
#[derive(Debug, Error)]
pub enum Error {
    /// No preset with this name exists in the table.
    #[error("unknown gradient preset `{0}`")]
    UnknownPreset(String),
    /// The preset exists but lists no stops.
    #[error("gradient preset `{0}` has no stops")]
    EmptyPreset(String),
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    Color(#[from] HexColorError),
    /// SVG path data could not be parsed.
    #[error("invalid path data: {0}")]
    Path(#[from] kurbo::SvgParseError),
    /// A configuration document could not be read.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used by the configuration APIs.
pub type Result<T, E = Error> = core::result::Result<T, E>;
