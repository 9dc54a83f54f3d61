//! Finished expression text.

use std::fmt;

/// An immutable, fully rendered expression.
///
/// Produced by `build` on a right-hand chain node, or by the deprecated
/// [`raw`](crate::raw). It cannot be constructed any other way:
///
/// ```compile_fail
/// let _ = cel_builder::Expression::new("a == b".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Expression {
    text: String,
}

impl Expression {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    /// The expression text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the expression, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Expression {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Expression> for String {
    fn from(expression: Expression) -> Self {
        expression.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_forms_agree() {
        let expr = Expression::new("foo == bar".to_string());
        assert_eq!(expr.to_string(), "foo == bar");
        assert_eq!(expr.as_str(), "foo == bar");
        assert_eq!(expr.as_ref(), "foo == bar");
        assert_eq!(format!("{expr}"), "foo == bar");
        assert_eq!(String::from(expr), "foo == bar");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(Expression::new(String::new()).into_string(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_transparent() {
        let expr = Expression::new("a < 1".to_string());
        assert_eq!(serde_json::to_string(&expr).unwrap(), r#""a < 1""#);
    }
}
