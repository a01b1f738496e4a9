use crate::environment::Environment;
use crate::exception::EvalResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look the symbol up in `env`. Unbound symbols come back as an
    /// `UnknownSymbol` exception from the environment.
    pub fn eval(&self, env: &dyn Environment) -> EvalResult {
        env.get(self)
    }
}
