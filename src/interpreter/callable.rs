//! Callable values: user functions and native functions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::Interpreter;
use super::environment::Environment;
use super::error::{RuntimeError, Unwind};
use super::value::Value;
use crate::ast::FunDecl;

/// A callable runtime value.
///
/// Both variants honor the same contract: [`Callable::arity`] gives the
/// expected argument count (checked at the call site before invocation)
/// and [`Callable::call`] produces a value.
#[derive(Clone)]
pub enum Callable {
    /// A function declared in Lox source.
    Function(Rc<LoxFunction>),
    /// A function provided by the interpreter.
    Native(Rc<NativeFunction>),
}

impl Callable {
    /// Returns the number of arguments this callable expects.
    pub fn arity(&self) -> usize {
        match self {
            Callable::Function(function) => function.arity(),
            Callable::Native(native) => native.arity,
        }
    }

    /// Invokes the callable. The caller has already checked the arity.
    pub fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        match self {
            Callable::Function(function) => function.call(interpreter, arguments),
            Callable::Native(native) => (native.function)(interpreter, &arguments),
        }
    }

    /// Identity comparison; callables are only equal to themselves.
    pub(crate) fn ptr_eq(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::Function(a), Callable::Function(b)) => Rc::ptr_eq(a, b),
            (Callable::Native(a), Callable::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Function(function) => write!(f, "<fn {}>", function.name()),
            Callable::Native(_) => write!(f, "<native fn>"),
        }
    }
}

// Manual impl: a closure's environment can reach back to the function
// value itself, so a derived Debug could recurse forever.
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A function declared in Lox source, paired with its closure.
///
/// The closure is the environment in force at the declaration site, not
/// the caller's environment; this is what makes scoping lexical.
pub struct LoxFunction {
    declaration: Rc<FunDecl>,
    closure: Rc<RefCell<Environment>>,
}

impl LoxFunction {
    /// Creates a function value capturing the given environment.
    pub fn new(declaration: Rc<FunDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        LoxFunction {
            declaration,
            closure,
        }
    }

    /// Returns the declared name.
    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    /// Returns the declared parameter count.
    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    /// Invokes the function body in a fresh environment enclosing the
    /// closure, with parameters bound to the arguments. A `return` unwind
    /// yields its value; falling off the end yields `nil`.
    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        let mut environment = Environment::with_enclosing(Rc::clone(&self.closure));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(param.lexeme.clone(), Some(argument));
        }

        match interpreter.execute_block(&self.declaration.body, Rc::new(RefCell::new(environment)))
        {
            Ok(()) => Ok(Value::Nil),
            Err(Unwind::Return(value)) => Ok(value),
            Err(Unwind::Error(error)) => Err(error),
            // The parser confines `break` to loops, and `while` catches it
            // before it can cross a call boundary.
            Err(Unwind::Break) => Ok(Value::Nil),
        }
    }
}

/// A function provided by the interpreter itself.
pub struct NativeFunction {
    /// The name the function is bound to in the globals.
    pub name: &'static str,
    /// The number of arguments the function expects.
    pub arity: usize,
    /// The implementation.
    pub function: fn(&mut Interpreter, &[Value]) -> Result<Value, RuntimeError>,
}

/// The built-in `clock()`: wall-clock seconds since the Unix epoch, as a
/// Lox number. Non-decreasing under a sane system clock.
pub(super) fn clock() -> NativeFunction {
    NativeFunction {
        name: "clock",
        arity: 0,
        function: |_, _| {
            let elapsed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            Ok(Value::Number(elapsed.as_secs_f64()))
        },
    }
}
