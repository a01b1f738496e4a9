//! Runtime values.
//!
//! `Value` is a closed set: every datum the interpreter manipulates is one of
//! these variants. Collections own their elements; atoms and functions are
//! shared handles whose clones observe the same slot or macro flag.

mod atom;
mod map;
mod string;
mod symbol;

use std::rc::Rc;

use crate::environment::Environment;
use crate::exception::{EvalResult, Exception};
use crate::function::Function;

pub use atom::Atom;
pub use map::Map;
pub use string::{LispString, StringKind, KEYWORD_PREFIX, SENTINEL};
pub use symbol::Symbol;

#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Boolean(bool),
    Integer(i64),
    /// Plain string or keyword.
    Str(LispString),
    Symbol(Symbol),
    List(Vec<Value>),
    Vector(Vec<Value>),
    Map(Map),
    Atom(Rc<Atom>),
    Function(Rc<Function>),
    Exception(Exception),
}

impl Value {
    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    pub fn integer(value: i64) -> Self {
        Value::Integer(value)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(LispString::plain(text))
    }

    pub fn keyword(name: impl Into<String>) -> Self {
        Value::Str(LispString::keyword(name))
    }

    /// String from a payload that may already carry the keyword sentinel.
    pub fn encoded_string(payload: impl Into<String>) -> Self {
        Value::Str(LispString::encoded(payload))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    pub fn vector(items: Vec<Value>) -> Self {
        Value::Vector(items)
    }

    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Map(Map::from_entries(entries))
    }

    pub fn atom(value: Value) -> Self {
        Value::Atom(Rc::new(Atom::new(value)))
    }

    pub fn function(function: Function) -> Self {
        Value::Function(Rc::new(function))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Str(s) if s.is_keyword() => "keyword",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Vector(_) => "vector",
            Value::Map(_) => "map",
            Value::Atom(_) => "atom",
            Value::Function(f) if f.is_macro() => "macro",
            Value::Function(_) => "function",
            Value::Exception(_) => "exception",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_keyword())
    }

    /// Whether this value is an exception, i.e. signals a failure when
    /// propagated.
    pub fn is_failure(&self) -> bool {
        matches!(self, Value::Exception(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&LispString> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<&Rc<Atom>> {
        match self {
            Value::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Rc<Function>> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_exception(&self) -> Option<&Exception> {
        match self {
            Value::Exception(e) => Some(e),
            _ => None,
        }
    }

    /// Split into the success/failure channels: exceptions become `Err`.
    pub fn into_result(self) -> EvalResult {
        match self {
            Value::Exception(e) => Err(e),
            other => Ok(other),
        }
    }

    /// Resolve against `env`. Symbols are looked up and nil resolves to
    /// itself; for anything else `None` leaves the decision to the evaluator.
    pub fn resolve(&self, env: &dyn Environment) -> Option<EvalResult> {
        match self {
            Value::Symbol(sym) => Some(sym.eval(env)),
            Value::Nil => Some(Ok(Value::Nil)),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Vector(a), Value::Vector(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Atom(a), Value::Atom(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Exception(a), Value::Exception(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<LispString> for Value {
    fn from(value: LispString) -> Self {
        Value::Str(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::function(value)
    }
}
