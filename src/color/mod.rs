pub mod hex;
pub mod opacity;
pub mod rgb;
pub mod variable;

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::error::ColorError;
use opacity::{clamp_opacity, format_decimal};
use variable::{ColorExpression, VariableResolver};

/// Fixed fallback for upstream failures (variables, malformed hex).
pub const BLACK_FALLBACK: &str = "black;";

/// A normalized color: integer channels plus an already clamped alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }
}

/// Renders `rgba(R, G, B, A);`. The trailing semicolon is part of the value.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {});",
            self.r,
            self.g,
            self.b,
            format_decimal(self.alpha)
        )
    }
}

impl ColorError {
    /// The string a failure of this kind degrades to.
    ///
    /// Only an unparseable color keeps the requested opacity; the other kinds
    /// collapse to the fixed `black;`.
    pub fn fallback(&self, alpha: f64) -> String {
        match self {
            ColorError::UnparseableColor(_) => Rgba::new(0, 0, 0, alpha).to_string(),
            ColorError::UnresolvableVariable(_) | ColorError::MalformedHex { .. } => {
                BLACK_FALLBACK.to_string()
            }
        }
    }
}

/// Parse a literal (non-`var`) color expression into channels.
///
/// Whitespace anywhere in the expression is removed first. Only the hex and
/// `rgb(r,g,b)` shapes are recognized, so a previously normalized `rgba(...)`
/// string is reported as unparseable.
pub fn try_normalize(expression: &str, opacity: f64) -> Result<Rgba, ColorError> {
    let alpha = clamp_opacity(opacity);
    let cleaned: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    // A lone `#` is not attempted as hex.
    if cleaned.starts_with('#') && cleaned.len() > 1 {
        let (r, g, b) = hex::parse_hex_channels(&cleaned)?;
        return Ok(Rgba::new(r, g, b, alpha));
    }

    if cleaned.starts_with("rgb(") {
        if let Some((r, g, b)) = rgb::match_rgb(&cleaned) {
            return Ok(Rgba::new(r, g, b, alpha));
        }
    }

    Err(ColorError::UnparseableColor(expression.to_string()))
}

/// Normalize a literal color expression. Never fails; see [`ColorError::fallback`].
///
/// `var(...)` references are not resolved here and land in the
/// `rgba(0, 0, 0, A);` fallback.
pub fn normalize(expression: &str, opacity: f64) -> String {
    match try_normalize(expression, opacity) {
        Ok(rgba) => rgba.to_string(),
        Err(err) => recover(err, opacity),
    }
}

/// Resolve `var(...)` through `resolver` (the only await point), then normalize.
pub async fn resolve<R>(expression: &str, opacity: f64, resolver: &R) -> String
where
    R: VariableResolver + ?Sized,
{
    match ColorExpression::parse(expression) {
        Ok(ColorExpression::Literal(literal)) => normalize(literal, opacity),
        Ok(ColorExpression::Variable(name)) => {
            let value = resolver.resolve(name).await;
            normalize_resolved(name, value, opacity)
        }
        Err(err) => recover(err, opacity),
    }
}

/// Synchronous [`resolve`] against a computed-style snapshot.
pub fn resolve_with(expression: &str, opacity: f64, variables: &HashMap<String, String>) -> String {
    match ColorExpression::parse(expression) {
        Ok(ColorExpression::Literal(literal)) => normalize(literal, opacity),
        Ok(ColorExpression::Variable(name)) => {
            normalize_resolved(name, variables.get(name).cloned(), opacity)
        }
        Err(err) => recover(err, opacity),
    }
}

fn normalize_resolved(name: &str, value: Option<String>, opacity: f64) -> String {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => {
            trace!(name, value = %value, "resolved color variable");
            normalize(&value, opacity)
        }
        None => recover(ColorError::UnresolvableVariable(name.to_string()), opacity),
    }
}

fn recover(err: ColorError, opacity: f64) -> String {
    let fallback = err.fallback(clamp_opacity(opacity));
    debug!(error = %err, fallback = %fallback, "color normalization fell back");
    fallback
}
