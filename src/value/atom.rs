use std::cell::RefCell;

use crate::value::Value;

/// 単一の可変スロット
///
/// `Value::Atom` は `Rc<Atom>` を保持するため、クローンしたハンドル同士で
/// スロットを共有する。中身の値自体は不変で、差し替わるのは参照のみ。
#[derive(Debug)]
pub struct Atom {
    slot: RefCell<Value>,
}

impl Atom {
    pub fn new(value: Value) -> Self {
        Self {
            slot: RefCell::new(value),
        }
    }

    /// 現在の値を取得
    pub fn native(&self) -> Value {
        self.slot.borrow().clone()
    }

    /// 値を差し替え、以前の値を返す
    ///
    /// 自身のハンドル（またはそれを含む値）を格納すると `Rc` の循環になり、
    /// `readable()` は停止しない。循環を切るには別の値で `reset` し直す。
    pub fn reset(&self, value: Value) -> Value {
        log::trace!("atom reset to {}", value.type_name());
        self.slot.replace(value)
    }
}
