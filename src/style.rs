//! Widget styling enums and the CSS classes they render to.
//!
//! Every mapping is a plain `match`, so an unmapped variant is a compile error
//! rather than a runtime lookup failure.

use std::str::FromStr;

use crate::error::StyleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    Link,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 9] = [
        ButtonStyle::Primary,
        ButtonStyle::Secondary,
        ButtonStyle::Success,
        ButtonStyle::Danger,
        ButtonStyle::Warning,
        ButtonStyle::Info,
        ButtonStyle::Light,
        ButtonStyle::Dark,
        ButtonStyle::Link,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "primary",
            ButtonStyle::Secondary => "secondary",
            ButtonStyle::Success => "success",
            ButtonStyle::Danger => "danger",
            ButtonStyle::Warning => "warning",
            ButtonStyle::Info => "info",
            ButtonStyle::Light => "light",
            ButtonStyle::Dark => "dark",
            ButtonStyle::Link => "link",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn-primary",
            ButtonStyle::Secondary => "btn-secondary",
            ButtonStyle::Success => "btn-success",
            ButtonStyle::Danger => "btn-danger",
            ButtonStyle::Warning => "btn-warning",
            ButtonStyle::Info => "btn-info",
            ButtonStyle::Light => "btn-light",
            ButtonStyle::Dark => "btn-dark",
            ButtonStyle::Link => "btn-link",
        }
    }

    /// Outline variant. `Link` has none and keeps `btn-link`.
    pub fn outline_class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn-outline-primary",
            ButtonStyle::Secondary => "btn-outline-secondary",
            ButtonStyle::Success => "btn-outline-success",
            ButtonStyle::Danger => "btn-outline-danger",
            ButtonStyle::Warning => "btn-outline-warning",
            ButtonStyle::Info => "btn-outline-info",
            ButtonStyle::Light => "btn-outline-light",
            ButtonStyle::Dark => "btn-outline-dark",
            ButtonStyle::Link => "btn-link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    pub fn name(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }

    /// Medium is the unmodified button, so it maps to no class.
    pub fn css_class(self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpinnerKind {
    #[default]
    Border,
    Grow,
}

impl SpinnerKind {
    pub const ALL: [SpinnerKind; 2] = [SpinnerKind::Border, SpinnerKind::Grow];

    pub fn name(self) -> &'static str {
        match self {
            SpinnerKind::Border => "border",
            SpinnerKind::Grow => "grow",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SpinnerKind::Border => "spinner-border",
            SpinnerKind::Grow => "spinner-grow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub const ALL: [ToastLevel; 4] = [
        ToastLevel::Info,
        ToastLevel::Success,
        ToastLevel::Warning,
        ToastLevel::Error,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Warning => "toast-warning",
            ToastLevel::Error => "toast-error",
        }
    }
}

fn parse_variant<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, StyleError> {
    let trimmed = value.trim();
    all.iter()
        .copied()
        .find(|v| name(*v).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| StyleError::UnknownVariant {
            kind,
            value: value.to_string(),
        })
}

impl FromStr for ButtonStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("button style", s, &Self::ALL, Self::name)
    }
}

impl FromStr for ButtonSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("button size", s, &Self::ALL, Self::name)
    }
}

impl FromStr for SpinnerKind {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("spinner kind", s, &Self::ALL, Self::name)
    }
}

impl FromStr for ToastLevel {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("toast level", s, &Self::ALL, Self::name)
    }
}

/// Join class names with single spaces, skipping empty ones.
pub fn join_classes(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full class list for a button: `btn`, its style, then its size.
pub fn button_class(style: ButtonStyle, size: ButtonSize, outline: bool) -> String {
    let style_class = if outline {
        style.outline_class()
    } else {
        style.css_class()
    };
    join_classes(&["btn", style_class, size.css_class()])
}
