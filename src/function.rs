//! Callables.
//!
//! Host-native ("compiled") functions and closures built by the evaluator
//! ("interpreted") share one struct: the native callable, a one-way macro
//! flag, and a tag carrying the closure parts. The value model performs no
//! binding or reduction; the evaluator reads `ast`/`params`/`env` for that.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::environment::Environment;
use crate::error::{ConstructionError, Result};
use crate::exception::EvalResult;
use crate::value::Value;

/// Host-side callable behind every function value.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> EvalResult>;

pub enum FunctionKind {
    Compiled,
    Interpreted {
        ast: Value,
        params: Value,
        env: Weak<dyn Environment>,
    },
}

pub struct Function {
    native: NativeFn,
    kind: FunctionKind,
    is_macro: Cell<bool>,
}

impl Function {
    pub fn compiled<F>(native: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + 'static,
    {
        Self {
            native: Rc::new(native),
            kind: FunctionKind::Compiled,
            is_macro: Cell::new(false),
        }
    }

    /// Closure over `env`. `params` must be a list or vector of symbols.
    ///
    /// Only a weak reference to `env` is kept; the evaluator owns it.
    pub fn interpreted(
        native: NativeFn,
        ast: Value,
        params: Value,
        env: &Rc<dyn Environment>,
    ) -> Result<Self> {
        check_params(&params)?;
        Ok(Self {
            native,
            kind: FunctionKind::Interpreted {
                ast,
                params,
                env: Rc::downgrade(env),
            },
            is_macro: Cell::new(false),
        })
    }

    pub fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    pub fn is_interpreted(&self) -> bool {
        matches!(self.kind, FunctionKind::Interpreted { .. })
    }

    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.native)(args)
    }

    pub fn native(&self) -> NativeFn {
        Rc::clone(&self.native)
    }

    pub fn ast(&self) -> Option<&Value> {
        match &self.kind {
            FunctionKind::Interpreted { ast, .. } => Some(ast),
            FunctionKind::Compiled => None,
        }
    }

    pub fn params(&self) -> Option<&Value> {
        match &self.kind {
            FunctionKind::Interpreted { params, .. } => Some(params),
            FunctionKind::Compiled => None,
        }
    }

    /// Captured definition-time environment, if it is still alive.
    pub fn env(&self) -> Option<Rc<dyn Environment>> {
        match &self.kind {
            FunctionKind::Interpreted { env, .. } => {
                let env = env.upgrade();
                if env.is_none() {
                    log::debug!("closure environment already released");
                }
                env
            }
            FunctionKind::Compiled => None,
        }
    }

    pub fn is_macro(&self) -> bool {
        self.is_macro.get()
    }

    /// Mark as a macro. There is no way back.
    pub fn make_macro(&self) {
        if !self.is_macro.replace(true) {
            log::trace!("function marked as macro");
        }
    }
}

fn check_params(params: &Value) -> Result<()> {
    let items = match params {
        Value::List(items) | Value::Vector(items) => items,
        other => {
            return Err(ConstructionError::ParamsNotSequence {
                found: other.type_name(),
            })
        }
    };
    match items
        .iter()
        .enumerate()
        .find(|(_, item)| !matches!(item, Value::Symbol(_)))
    {
        Some((position, item)) => Err(ConstructionError::ParamNotSymbol {
            position,
            found: item.type_name(),
        }),
        None => Ok(()),
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.is_macro()) {
            (FunctionKind::Compiled, false) => write!(f, "<compiled>"),
            (FunctionKind::Compiled, true) => write!(f, "<compiled macro>"),
            (FunctionKind::Interpreted { .. }, false) => write!(f, "<lambda>"),
            (FunctionKind::Interpreted { .. }, true) => write!(f, "<lambda macro>"),
        }
    }
}
