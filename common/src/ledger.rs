//! 注文台帳
//!
//! 同じピザの注文は1行にまとめ、数量を加算する。
//! 追加・全削除はいずれも確認（[`Confirm`]）を経てから反映する。

use crate::catalog::PizzaRecord;
use serde::Serialize;

/// 確認ダイアログの抽象
///
/// フロントエンドごとにモーダル確認を実装する。
/// テストでは `true` / `false` をそのまま渡せる。
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl Confirm for bool {
    fn confirm(&mut self, _prompt: &str) -> bool {
        *self
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// 確認付き操作の結果
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Declined,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// 台帳の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub pizza: PizzaRecord,
    /// 常に1以上
    pub quantity: u32,
}

/// 全削除の確認メッセージ
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear your order";

/// 追加の確認メッセージ
pub fn add_prompt(pizza: &PizzaRecord) -> String {
    format!("Are you sure you want to add {} to your order?", pizza.name)
}

/// 注文台帳（初回追加順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderLedger {
    lines: Vec<OrderLine>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 確認の上で1枚追加
    pub fn add_one(&mut self, pizza: &PizzaRecord, mut confirm: impl Confirm) -> MutationOutcome {
        if !confirm.confirm(&add_prompt(pizza)) {
            return MutationOutcome::Declined;
        }

        match self.lines.iter_mut().find(|l| l.pizza.name == pizza.name) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(OrderLine {
                pizza: *pizza,
                quantity: 1,
            }),
        }
        MutationOutcome::Applied
    }

    /// 確認の上で全削除（空でも確認する）
    pub fn clear_all(&mut self, mut confirm: impl Confirm) -> MutationOutcome {
        if !confirm.confirm(CLEAR_PROMPT) {
            return MutationOutcome::Declined;
        }
        self.lines.clear();
        MutationOutcome::Applied
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 行数（ピザの種類数）
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 全数量の合計
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn quantity_of(&self, name: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.pizza.name == name)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }
}
