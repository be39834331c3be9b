use std::collections::HashMap;

#[cfg(feature = "node")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A theme palette passed in from the host: a computed-style snapshot of
/// custom properties plus the colors to normalize against it.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    #[serde(default)]
    pub variables: HashMap<String, String>,
    pub entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    pub name: String,
    /// Hex, `rgb()` or `var(--name)`.
    pub color: String,
    /// None = fully opaque.
    pub opacity: Option<f64>,
}

/// One palette entry after normalization, returned from Rust to JS.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEntry {
    pub name: String,
    /// `rgba(...);` or `black;`
    pub rgba: String,
}

/// Spinner request from JS. Missing fields take the crate defaults.
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinnerOptions {
    /// "border" | "grow"
    pub kind: Option<String>,
    pub diameter: Option<f64>,
    pub thickness: Option<f64>,
    pub color: String,
    pub opacity: Option<f64>,
    pub variables: Option<HashMap<String, String>>,
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinnerMarkup {
    pub class_name: String,
    pub style: String,
}
