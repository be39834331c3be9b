use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace is stripped before matching, so the pattern allows none.
static RGB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgb\(([0-9]{1,3}),([0-9]{1,3}),([0-9]{1,3})\)").expect("valid rgb() pattern")
});

/// Match a whitespace-free `rgb(r,g,b)` literal and return its channels.
///
/// Each channel is 1-3 decimal digits; values above 255 are clamped.
/// Anything after the closing paren is ignored.
pub fn match_rgb(cleaned: &str) -> Option<(u8, u8, u8)> {
    let caps = RGB_PATTERN.captures(cleaned)?;
    let channel = |i: usize| -> Option<u8> {
        let value: u16 = caps.get(i)?.as_str().parse().ok()?;
        Some(value.min(255) as u8)
    };
    Some((channel(1)?, channel(2)?, channel(3)?))
}
