use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::color::resolve_with;
use crate::error::StyleError;
use crate::spinner::{SpinnerSize, DEFAULT_DIAMETER};
use crate::style::SpinnerKind;
use crate::types::{NormalizedEntry, Palette, SpinnerMarkup, SpinnerOptions};

/// Normalize every palette entry against the palette's variables.
///
/// Entries are independent, so they run on Rayon's pool; output order
/// matches `palette.entries`.
pub fn normalize_palette(palette: &Palette) -> Vec<NormalizedEntry> {
    debug!(
        entries = palette.entries.len(),
        variables = palette.variables.len(),
        "normalizing palette"
    );
    palette
        .entries
        .par_iter()
        .map(|entry| NormalizedEntry {
            name: entry.name.clone(),
            rgba: resolve_with(
                &entry.color,
                entry.opacity.unwrap_or(1.0),
                &palette.variables,
            ),
        })
        .collect()
}

/// Class list and inline style for a loading spinner.
pub fn spinner_markup(options: &SpinnerOptions) -> Result<SpinnerMarkup, StyleError> {
    let kind = match options.kind.as_deref() {
        Some(name) => name.parse::<SpinnerKind>()?,
        None => SpinnerKind::default(),
    };
    let size = SpinnerSize::new(
        options.diameter.unwrap_or(DEFAULT_DIAMETER),
        options.thickness,
    );
    let empty = HashMap::new();
    let variables = options.variables.as_ref().unwrap_or(&empty);

    Ok(SpinnerMarkup {
        class_name: kind.css_class().to_string(),
        style: size.inline_style(&options.color, options.opacity.unwrap_or(1.0), variables),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaletteEntry;

    fn make_palette(entries: &[(&str, &str, Option<f64>)], variables: &[(&str, &str)]) -> Palette {
        Palette {
            variables: variables
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            entries: entries
                .iter()
                .map(|(name, color, opacity)| PaletteEntry {
                    name: name.to_string(),
                    color: color.to_string(),
                    opacity: *opacity,
                })
                .collect(),
        }
    }

    #[test]
    fn mixed_palette() {
        let palette = make_palette(
            &[
                ("sidebar", "var(--sidebar-bg)", Some(0.95)),
                ("menu", "#fff", None),
                ("tab", "rgb(10, 20, 30)", Some(0.5)),
                ("broken", "var(--nope)", Some(0.5)),
                ("junk", "chartreuse", Some(0.25)),
            ],
            &[("--sidebar-bg", "#1e293b")],
        );
        let results = normalize_palette(&palette);
        let rgba: Vec<&str> = results.iter().map(|e| e.rgba.as_str()).collect();
        assert_eq!(
            rgba,
            vec![
                "rgba(30, 41, 59, 0.95);",
                "rgba(255, 255, 255, 1.0);",
                "rgba(10, 20, 30, 0.5);",
                "black;",
                "rgba(0, 0, 0, 0.25);",
            ]
        );
    }

    #[test]
    fn order_preserved_for_large_palette() {
        let entries: Vec<(String, String)> = (0..200)
            .map(|i| (format!("c{i}"), format!("rgb({i},0,0)")))
            .collect();
        let palette = Palette {
            variables: HashMap::new(),
            entries: entries
                .iter()
                .map(|(name, color)| PaletteEntry {
                    name: name.clone(),
                    color: color.clone(),
                    opacity: Some(1.0),
                })
                .collect(),
        };
        let results = normalize_palette(&palette);
        assert_eq!(results.len(), 200);
        for (i, entry) in results.iter().enumerate() {
            assert_eq!(entry.name, format!("c{i}"));
            assert_eq!(entry.rgba, format!("rgba({i}, 0, 0, 1.0);"));
        }
    }

    #[test]
    fn empty_palette() {
        assert!(normalize_palette(&Palette::default()).is_empty());
    }

    #[test]
    fn spinner_defaults() {
        let markup = spinner_markup(&SpinnerOptions {
            color: "#000".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(markup.class_name, "spinner-border");
        assert_eq!(
            markup.style,
            "width: 32.0px; height: 32.0px; border-width: 4.0px; color: rgba(0, 0, 0, 1.0);"
        );
    }

    #[test]
    fn spinner_grow_with_variable_color() {
        let markup = spinner_markup(&SpinnerOptions {
            kind: Some("grow".to_string()),
            diameter: Some(4.0),
            color: "var(--accent)".to_string(),
            opacity: Some(0.5),
            variables: Some([("--accent".to_string(), "#00ff00".to_string())].into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(markup.class_name, "spinner-grow");
        assert_eq!(
            markup.style,
            "width: 12.0px; height: 12.0px; border-width: 1.5px; color: rgba(0, 255, 0, 0.5);"
        );
    }

    #[test]
    fn spinner_unknown_kind() {
        let err = spinner_markup(&SpinnerOptions {
            kind: Some("dots".to_string()),
            color: "#000".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown spinner kind `dots`");
    }
}
