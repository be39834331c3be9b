use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;

use crate::error::ColorError;

const VAR_PREFIX: &str = "var(";

/// Looks up CSS custom properties against the rendering environment.
///
/// Unknown names resolve to `None` (or an empty string). Implementations must
/// not fail for an unknown name; absence is the only signal.
#[async_trait]
pub trait VariableResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Option<String>;
}

/// A computed-style snapshot keyed by variable name (`--brand`, ...).
#[async_trait]
impl VariableResolver for HashMap<String, String> {
    async fn resolve(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Resolver for environments with no custom properties at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVariables;

#[async_trait]
impl VariableResolver for NoVariables {
    async fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Adapts an async closure into a [`VariableResolver`].
pub struct FnResolver<F>(pub F);

#[async_trait]
impl<F, Fut> VariableResolver for FnResolver<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Option<String>> + Send,
{
    async fn resolve(&self, name: &str) -> Option<String> {
        (self.0)(name.to_string()).await
    }
}

/// The two shapes a color expression can take before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorExpression<'a> {
    /// Hex, `rgb()` or anything else; handed to the normalizer as is.
    Literal(&'a str),
    /// `var(<name>)`; the name is sliced verbatim, no trimming.
    Variable(&'a str),
}

impl<'a> ColorExpression<'a> {
    /// Classify an expression. A `var(` prefix without a closing paren is an
    /// unresolvable variable.
    pub fn parse(expression: &'a str) -> Result<Self, ColorError> {
        let Some(rest) = expression.strip_prefix(VAR_PREFIX) else {
            return Ok(Self::Literal(expression));
        };
        let end = rest
            .find(')')
            .ok_or_else(|| ColorError::UnresolvableVariable(expression.to_string()))?;
        Ok(Self::Variable(&rest[..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ColorExpression::parse tests ──

    #[test]
    fn literal_passthrough() {
        assert_eq!(
            ColorExpression::parse("#ff0000"),
            Ok(ColorExpression::Literal("#ff0000"))
        );
        assert_eq!(
            ColorExpression::parse("rgb(1,2,3)"),
            Ok(ColorExpression::Literal("rgb(1,2,3)"))
        );
    }

    #[test]
    fn variable_name_extracted() {
        assert_eq!(
            ColorExpression::parse("var(--brand)"),
            Ok(ColorExpression::Variable("--brand"))
        );
    }

    #[test]
    fn variable_name_not_trimmed() {
        assert_eq!(
            ColorExpression::parse("var( --brand )"),
            Ok(ColorExpression::Variable(" --brand "))
        );
    }

    #[test]
    fn first_close_paren_wins() {
        assert_eq!(
            ColorExpression::parse("var(--a)--b)"),
            Ok(ColorExpression::Variable("--a"))
        );
    }

    #[test]
    fn missing_close_paren_unresolvable() {
        assert_eq!(
            ColorExpression::parse("var(--brand"),
            Err(ColorError::UnresolvableVariable("var(--brand".to_string()))
        );
    }

    #[test]
    fn leading_space_is_not_a_variable() {
        assert_eq!(
            ColorExpression::parse(" var(--brand)"),
            Ok(ColorExpression::Literal(" var(--brand)"))
        );
    }

    #[test]
    fn uppercase_prefix_is_not_a_variable() {
        assert!(matches!(
            ColorExpression::parse("VAR(--brand)"),
            Ok(ColorExpression::Literal(_))
        ));
    }

    // ── resolver implementations ──

    #[tokio::test]
    async fn map_resolver_hit_and_miss() {
        let vars: HashMap<String, String> =
            [("--brand".to_string(), "#123456".to_string())].into();
        assert_eq!(vars.resolve("--brand").await.as_deref(), Some("#123456"));
        assert_eq!(vars.resolve("--other").await, None);
    }

    #[tokio::test]
    async fn no_variables_always_absent() {
        assert_eq!(NoVariables.resolve("--brand").await, None);
    }

    #[tokio::test]
    async fn fn_resolver_forwards_name() {
        let resolver = FnResolver(|name: String| async move { Some(format!("seen {name}")) });
        assert_eq!(
            resolver.resolve("--x").await.as_deref(),
            Some("seen --x")
        );
    }
}
