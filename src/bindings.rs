use std::collections::HashMap;

use napi::{Error, Result, Status};

use crate::color::{normalize, resolve_with};
use crate::style::{button_class as compose_button_class, ButtonSize, ButtonStyle, ToastLevel};
use crate::types::{NormalizedEntry, Palette, SpinnerMarkup, SpinnerOptions};

fn invalid_arg(err: impl std::fmt::Display) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

#[napi]
pub fn health_check() -> String {
    "colorshell-native ok".to_string()
}

/// `null`/`undefined` expressions are unparseable, not errors.
#[napi]
pub fn normalize_color(expression: Option<String>, opacity: f64) -> String {
    normalize(expression.as_deref().unwrap_or_default(), opacity)
}

#[napi]
pub fn resolve_color(
    expression: Option<String>,
    opacity: f64,
    variables: Option<HashMap<String, String>>,
) -> String {
    resolve_with(
        expression.as_deref().unwrap_or_default(),
        opacity,
        &variables.unwrap_or_default(),
    )
}

#[napi]
pub fn normalize_palette(palette: Palette) -> Vec<NormalizedEntry> {
    crate::engine::normalize_palette(&palette)
}

#[napi]
pub fn button_class(style: String, size: Option<String>, outline: Option<bool>) -> Result<String> {
    let style: ButtonStyle = style.parse().map_err(invalid_arg)?;
    let size = match size {
        Some(size) => size.parse::<ButtonSize>().map_err(invalid_arg)?,
        None => ButtonSize::default(),
    };
    Ok(compose_button_class(style, size, outline.unwrap_or(false)))
}

#[napi]
pub fn toast_class(level: String) -> Result<String> {
    let level: ToastLevel = level.parse().map_err(invalid_arg)?;
    Ok(level.css_class().to_string())
}

#[napi]
pub fn spinner_markup(options: SpinnerOptions) -> Result<SpinnerMarkup> {
    crate::engine::spinner_markup(&options).map_err(invalid_arg)
}

#[napi]
pub fn init_logging(filter: Option<String>) -> bool {
    crate::logging::init(filter.as_deref())
}
