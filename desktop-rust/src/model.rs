use pizza_co_common::ledger::{add_prompt, CLEAR_PROMPT};
use pizza_co_common::{MutationOutcome, PizzaRecord, Storefront};

/// 確認ダイアログの回答待ちの台帳操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Add(PizzaRecord),
    ClearAll,
}

impl PendingAction {
    pub fn prompt(&self) -> String {
        match self {
            PendingAction::Add(pizza) => add_prompt(pizza),
            PendingAction::ClearAll => CLEAR_PROMPT.to_string(),
        }
    }
}

/// 画面状態
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub shop: Storefront,
    pub pending: Option<PendingAction>,
    pub status: String,
}

impl AppState {
    /// 別のダイアログ表示中は無視
    pub fn request(&mut self, action: PendingAction) {
        if self.pending.is_none() {
            self.pending = Some(action);
        }
    }

    /// 回答を反映して保留中の操作を消す
    pub fn resolve(&mut self, answer: bool) -> Option<MutationOutcome> {
        let action = self.pending.take()?;
        let outcome = match action {
            PendingAction::Add(pizza) => self.shop.add_one(&pizza, answer),
            PendingAction::ClearAll => self.shop.clear_all(answer),
        };
        self.status = match (action, outcome) {
            (PendingAction::Add(pizza), MutationOutcome::Applied) => format!("Added {}", pizza.name),
            (PendingAction::ClearAll, MutationOutcome::Applied) => "Orders cleared".to_string(),
            (_, MutationOutcome::Declined) => String::new(),
        };
        Some(outcome)
    }
}
