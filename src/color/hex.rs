use csscolorparser::Color;

use crate::error::ColorError;

/// Extract R, G, B (0-255) from a `#`-prefixed CSS hex color.
/// Accepts the 3, 4, 6 and 8 digit forms; alpha digits of the 4/8 forms are ignored.
pub fn parse_hex_channels(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let malformed = |reason: String| ColorError::MalformedHex {
        input: hex.to_string(),
        reason,
    };

    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| malformed("missing `#` prefix".to_string()))?;
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(malformed(format!(
            "expected 3, 4, 6 or 8 hex digits, got {}",
            digits.len()
        )));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed("invalid hex digits".to_string()));
    }

    let color = hex.parse::<Color>().map_err(|err| malformed(format!("{err}")))?;
    let [r, g, b, _] = color.to_rgba8();
    Ok((r, g, b))
}
