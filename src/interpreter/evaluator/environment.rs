use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The flat variable table of a single run.
///
/// Each name maps to `None` until its first assignment. Names are added only
/// by declarations and are never removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Option<Value>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` without a value.
    ///
    /// # Errors
    /// Returns `VariableRedefinition` if `name` was already declared, whether
    /// or not it holds a value.
    ///
    /// # Example
    /// ```
    /// use brewin::interpreter::evaluator::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// assert!(env.declare("x", 1).is_ok());
    /// assert!(env.declare("x", 2).is_err());
    /// ```
    pub fn declare(&mut self, name: &str, line: usize) -> EvalResult<()> {
        if self.variables.contains_key(name) {
            return Err(RuntimeError::VariableRedefinition { name: name.to_string(),
                                                            line });
        }
        self.variables.insert(name.to_string(), None);
        Ok(())
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds a declared variable to `value`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            },
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Reads the current value of `name`.
    ///
    /// # Errors
    /// - `UnknownVariable` if `name` was never declared.
    /// - `UnassignedVariable` if it was declared but never assigned.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Value> {
        match self.variables.get(name) {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(RuntimeError::UnassignedVariable { name: name.to_string(),
                                                                 line }),
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn declared_variable_starts_without_value() {
        let mut env = Environment::new();
        env.declare("x", 1).unwrap();

        let err = env.get("x", 2).unwrap_err();
        assert!(matches!(err, RuntimeError::UnassignedVariable { line: 2, .. }));
        assert_eq!(err.kind(), ErrorKind::Name);
    }

    #[test]
    fn assignment_requires_declaration() {
        let mut env = Environment::new();
        assert!(env.assign("y", Value::Integer(1), 1).is_err());
        assert!(env.is_empty());

        env.declare("y", 1).unwrap();
        env.assign("y", Value::Integer(1), 2).unwrap();
        env.assign("y", "text".into(), 3).unwrap();
        assert_eq!(env.get("y", 4).unwrap(), &Value::Str("text".into()));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn redeclaring_an_assigned_variable_fails() {
        let mut env = Environment::new();
        env.declare("z", 1).unwrap();
        env.assign("z", Value::Integer(9), 2).unwrap();

        let err = env.declare("z", 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Name);
        assert_eq!(env.get("z", 4).unwrap(), &Value::Integer(9));
    }
}
