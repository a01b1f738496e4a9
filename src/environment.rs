use crate::exception::EvalResult;
use crate::value::Symbol;

/// Variable lookup supplied by the evaluator.
///
/// `get` fails with an `UnknownSymbol` exception when `symbol` is unbound.
/// How the lookup walks enclosing scopes is up to the implementor.
pub trait Environment {
    fn get(&self, symbol: &Symbol) -> EvalResult;
}
