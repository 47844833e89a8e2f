use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// Values are produced by expressions and stored by assignments. There are no
/// implicit conversions between the variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string of text.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(i) => Self::Integer(*i),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Returns the name of this value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Str(_) => "string",
        }
    }
}

/// Renders integers as decimal digits and strings as their raw text, with no
/// quoting or escaping.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_unquoted() {
        assert_eq!(Value::from(-12).to_string(), "-12");
        assert_eq!(Value::from("say \"hi\"").to_string(), "say \"hi\"");
    }

    #[test]
    fn literals_convert_to_matching_variant() {
        assert_eq!(Value::from(&LiteralValue::Integer(4)), Value::Integer(4));
        assert_eq!(Value::from(&LiteralValue::from("x")), Value::Str("x".into()));
    }
}
