//! Exceptions as values.
//!
//! An [`Exception`] is an ordinary [`Value`] (`Value::Exception`) and, at the
//! same time, the failure half of [`EvalResult`]. Building one does nothing
//! beyond formatting its message; raising it is up to the evaluator.

use std::fmt;

use thiserror::Error;

use crate::value::{LispString, Value};

/// Result of calling a function or resolving a symbol.
pub type EvalResult = std::result::Result<Value, Exception>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    /// Base kind, wraps an arbitrary payload.
    Generic,
    Index,
    Syntax,
    UnknownType,
    InvalidArgument,
    UnknownSymbol,
    NotImplemented,
}

impl ExceptionKind {
    pub fn name(self) -> &'static str {
        match self {
            ExceptionKind::Generic => "exception",
            ExceptionKind::Index => "index-error",
            ExceptionKind::Syntax => "syntax-error",
            ExceptionKind::UnknownType => "unknown-type-error",
            ExceptionKind::InvalidArgument => "invalid-argument-error",
            ExceptionKind::UnknownSymbol => "unknown-symbol-error",
            ExceptionKind::NotImplemented => "not-implemented-error",
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone)]
#[error("{}", message_of(.payload))]
pub struct Exception {
    kind: ExceptionKind,
    payload: Box<Value>,
    symbol: Option<String>,
}

fn message_of(payload: &Value) -> String {
    payload.unreadable()
}

impl Exception {
    /// Base exception carrying any payload.
    pub fn new(payload: Value) -> Self {
        Self {
            kind: ExceptionKind::Generic,
            payload: Box::new(payload),
            symbol: None,
        }
    }

    fn with_message(kind: ExceptionKind, message: String) -> Self {
        Self {
            kind,
            payload: Box::new(Value::Str(LispString::plain(message))),
            symbol: None,
        }
    }

    pub fn index(index: i64) -> Self {
        Self::with_message(ExceptionKind::Index, format!("Index out of bounds: {}", index))
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::with_message(ExceptionKind::Syntax, message.into())
    }

    pub fn unknown_type(message: impl Into<String>) -> Self {
        Self::with_message(ExceptionKind::UnknownType, message.into())
    }

    pub fn invalid_argument(arg: &Value, reason: impl AsRef<str>) -> Self {
        Self::with_message(
            ExceptionKind::InvalidArgument,
            format!("{}: invalid argument: {}", arg.readable(), reason.as_ref()),
        )
    }

    pub fn unknown_symbol(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut exception =
            Self::with_message(ExceptionKind::UnknownSymbol, format!("'{}' not found", name));
        exception.symbol = Some(name);
        exception
    }

    pub fn not_implemented(name: impl AsRef<str>) -> Self {
        Self::with_message(
            ExceptionKind::NotImplemented,
            format!("not implemented: {}", name.as_ref()),
        )
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// The wrapped payload.
    pub fn native(&self) -> &Value {
        &self.payload
    }

    pub fn into_payload(self) -> Value {
        *self.payload
    }

    /// Message text, i.e. the payload without string quoting.
    pub fn message(&self) -> String {
        message_of(&self.payload)
    }

    /// Name of the unbound symbol, for `UnknownSymbol` only.
    pub fn symbol_name(&self) -> Option<&str> {
        self.symbol.as_deref()
    }
}

/// Exceptions compare by payload alone; the kind is a separate query.
impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl From<Exception> for Value {
    fn from(exception: Exception) -> Self {
        Value::Exception(exception)
    }
}
