//! Lexical environments.
//!
//! An [`Environment`] is one scope in the chain from the innermost block
//! out to the globals. Environments are reference-counted because closures
//! keep their declaration-time environment alive past the block that
//! created it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::RuntimeError;
use super::value::Value;
use crate::token::Token;

/// A single scope mapping variable names to values.
///
/// A binding of `None` is the distinguished uninitialized marker produced
/// by `var a;` — the variable exists (it shadows outer bindings and can be
/// assigned) but reading it is a runtime error until the first assignment.
#[derive(Debug)]
pub struct Environment {
    /// The next scope outward, `None` for the global environment.
    enclosing: Option<Rc<RefCell<Environment>>>,
    /// The bindings of this scope. At most one value per name; inner
    /// scopes shadow outer ones.
    values: HashMap<String, Option<Value>>,
}

impl Environment {
    /// Creates a scope with no enclosing scope (the globals).
    pub fn new() -> Self {
        Environment {
            enclosing: None,
            values: HashMap::new(),
        }
    }

    /// Creates a scope nested inside `enclosing`.
    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            enclosing: Some(enclosing),
            values: HashMap::new(),
        }
    }

    /// Binds a name in this scope, replacing any previous binding.
    ///
    /// `None` marks the variable declared but uninitialized.
    pub fn define(&mut self, name: impl Into<String>, value: Option<Value>) {
        self.values.insert(name.into(), value);
    }

    /// Looks up a name, walking the chain outward.
    ///
    /// # Errors
    ///
    /// Returns an error if no scope defines the name, or if the innermost
    /// defining scope holds the uninitialized marker.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        match self.values.get(&name.lexeme) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(RuntimeError::uninitialized_variable(name)),
            None => match &self.enclosing {
                Some(enclosing) => enclosing.borrow().get(name),
                None => Err(RuntimeError::undefined_variable(name)),
            },
        }
    }

    /// Rebinds a name in the innermost scope that already defines it.
    ///
    /// Assignment never creates a binding; that is what `var` is for.
    ///
    /// # Errors
    ///
    /// Returns an error if no scope defines the name.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = Some(value);
            return Ok(());
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value),
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
