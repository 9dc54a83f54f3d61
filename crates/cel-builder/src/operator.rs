//! Comparison and logical operators.

use std::fmt;

/// Comparison operator placed between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComparisonOperator {
    /// Equal: `==`
    Equal,
    /// Not equal: `!=`
    NotEqual,
    /// Less than: `<`
    Less,
    /// Less than or equal: `<=`
    LessOrEqual,
    /// Greater than: `>`
    Greater,
    /// Greater than or equal: `>=`
    GreaterOrEqual,
}

impl ComparisonOperator {
    /// All comparison operators, in declaration order.
    pub const ALL: [ComparisonOperator; 6] = [
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
        ComparisonOperator::Less,
        ComparisonOperator::LessOrEqual,
        ComparisonOperator::Greater,
        ComparisonOperator::GreaterOrEqual,
    ];

    /// The bare operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "==",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
        }
    }

    /// The symbol with one space on each side, as emitted into expressions.
    pub(crate) fn spaced(self) -> String {
        format!(" {} ", self.symbol())
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Connector joining two comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogicalOperator {
    /// Conjunction: `&&`
    And,
    /// Disjunction: `||`
    Or,
}

impl LogicalOperator {
    /// The bare operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
        }
    }

    pub(crate) fn spaced(self) -> String {
        format!(" {} ", self.symbol())
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
