//! ホスト側エラー
//!
//! 値の構築時の構造的な不整合を表す。インタプリタ言語から捕捉される
//! `Exception` 体系とは別系統であり、`Value` には変換しない。

use thiserror::Error;

/// 値の構築に失敗したときのエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// 仮引数リストが List / Vector ではない
    #[error("parameter list must be a list or vector, found {found}")]
    ParamsNotSequence { found: &'static str },

    /// 仮引数リストにシンボル以外の要素がある
    #[error("parameter {position} must be a symbol, found {found}")]
    ParamNotSymbol { position: usize, found: &'static str },
}

/// 構築処理の Result 型
pub type Result<T> = std::result::Result<T, ConstructionError>;
