//! 注文台帳の更新
//!
//! シグナルの現在値を複製して確認付き操作を行い、
//! 反映された場合だけ新しい台帳を返す（辞退時は再描画しない）。

use pizza_co_common::{Confirm, OrderLedger, PizzaRecord};

/// 1枚追加。辞退なら None
pub fn apply_add(
    current: &OrderLedger,
    pizza: &PizzaRecord,
    confirm: impl Confirm,
) -> Option<OrderLedger> {
    let mut next = current.clone();
    next.add_one(pizza, confirm).is_applied().then_some(next)
}

/// 全削除。辞退なら None
pub fn apply_clear(current: &OrderLedger, confirm: impl Confirm) -> Option<OrderLedger> {
    let mut next = current.clone();
    next.clear_all(confirm).is_applied().then_some(next)
}
