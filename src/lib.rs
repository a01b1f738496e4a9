//! etl - runtime value model
//!
//! reader / evaluator / printer が共有する値の代数を定義する。
//! 評価器・環境・REPL は外部の協調者であり、ここでは接点のみを定める。

// 値
pub mod value;
pub mod function;
pub mod exception;

// 協調者インターフェース
pub mod environment;

// 表示
pub mod printer;

// ホスト側エラー
pub mod error;

// 公開API
pub use environment::Environment;
pub use error::{ConstructionError, Result};
pub use exception::{EvalResult, Exception, ExceptionKind};
pub use function::{Function, FunctionKind, NativeFn};
pub use value::{Atom, LispString, Map, StringKind, Symbol, Value, KEYWORD_PREFIX, SENTINEL};
