#[cfg(feature = "node")]
#[macro_use]
extern crate napi_derive;

pub mod color;
pub mod engine;
pub mod error;
pub mod logging;
pub mod spinner;
pub mod style;
pub mod types;

#[cfg(feature = "node")]
mod bindings;

pub use color::variable::{FnResolver, NoVariables, VariableResolver};
pub use color::{normalize, resolve, resolve_with, try_normalize, Rgba, BLACK_FALLBACK};
pub use error::{ColorError, ConfigError, StyleError};
