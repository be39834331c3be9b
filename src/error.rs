use thiserror::Error;

/// Why a color expression could not be normalized.
///
/// These never reach callers of `resolve`/`normalize`; each kind maps onto one
/// of the two fallback strings. `try_normalize` exposes them for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// `var(` without a closing paren, or a name the resolver doesn't know.
    #[error("unresolvable variable reference `{0}`")]
    UnresolvableVariable(String),
    /// Matches neither the hex nor the `rgb()` shape.
    #[error("unparseable color `{0}`")]
    UnparseableColor(String),
    /// `#`-prefixed but not a valid 3/4/6/8 digit hex color.
    #[error("malformed hex color `{input}`: {reason}")]
    MalformedHex { input: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown {kind} `{value}`")]
    UnknownVariant { kind: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid palette json: {0}")]
    Json(#[from] serde_json::Error),
}
