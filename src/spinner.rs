use std::collections::HashMap;

use crate::color::opacity::format_decimal;
use crate::color::resolve_with;

pub const MIN_DIAMETER: f64 = 12.0;
pub const MAX_DIAMETER: f64 = 256.0;
pub const DEFAULT_DIAMETER: f64 = 32.0;
pub const MIN_THICKNESS: f64 = 1.0;

/// Spinner dimensions in CSS pixels, always within renderable bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerSize {
    diameter: f64,
    thickness: f64,
}

impl SpinnerSize {
    /// Clamp the requested diameter to `[MIN_DIAMETER, MAX_DIAMETER]` and the
    /// ring thickness to `[MIN_THICKNESS, diameter / 4]`.
    ///
    /// A missing (or NaN) thickness defaults to an eighth of the diameter.
    pub fn new(diameter: f64, thickness: Option<f64>) -> Self {
        let diameter = if diameter.is_nan() {
            DEFAULT_DIAMETER
        } else {
            diameter.clamp(MIN_DIAMETER, MAX_DIAMETER)
        };
        let thickness = thickness
            .filter(|t| !t.is_nan())
            .unwrap_or(diameter / 8.0)
            .clamp(MIN_THICKNESS, diameter / 4.0);
        Self {
            diameter,
            thickness,
        }
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Inline style declarations for the spinner element.
    ///
    /// The color goes through the normalizer; its trailing `;` closes the
    /// `color` declaration, including the `black;` fallback.
    pub fn inline_style(
        &self,
        color: &str,
        opacity: f64,
        variables: &HashMap<String, String>,
    ) -> String {
        let d = format_decimal(self.diameter);
        format!(
            "width: {d}px; height: {d}px; border-width: {}px; color: {}",
            format_decimal(self.thickness),
            resolve_with(color, opacity, variables)
        )
    }
}

impl Default for SpinnerSize {
    fn default() -> Self {
        Self::new(DEFAULT_DIAMETER, None)
    }
}
