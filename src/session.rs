//! 対話式注文セッション
//!
//! 検索 → ピザ選択 → 確認 → 注文状況表示 を繰り返す。

use crate::error::Result;
use crate::render::{footer_text, header_text, menu_text};
use dialoguer::{Confirm as ConfirmPrompt, Input, Select};
use pizza_co_common::availability::is_open_now;
use pizza_co_common::catalog::find_ignore_case;
use pizza_co_common::storefront::{FooterState, CLEAR_BUTTON, ORDER_BUTTON, SEARCH_PLACEHOLDER};
use pizza_co_common::{Confirm, MutationOutcome, PizzaRecord, Storefront};

/// dialoguer の Yes/No 確認
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirm {
    /// true なら確認せずに「はい」
    pub assume_yes: bool,
}

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            println!("{} → yes", prompt);
            return true;
        }
        match ConfirmPrompt::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                // 端末が使えない場合は「いいえ」扱い
                tracing::warn!(error = %e, "確認プロンプトに失敗しました");
                false
            }
        }
    }
}

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// このピザを1枚追加
    Order(&'static PizzaRecord),
    /// 検索文字列を変更
    Search,
    /// 注文を全削除
    ClearAll,
    /// 終了
    Quit,
}

impl OrderAction {
    pub fn label(&self) -> String {
        match self {
            OrderAction::Order(pizza) => {
                format!("{}: {} ({})", ORDER_BUTTON, pizza.name, pizza.price_label())
            }
            OrderAction::Search => "Search".to_string(),
            OrderAction::ClearAll => CLEAR_BUTTON.to_string(),
            OrderAction::Quit => "Quit".to_string(),
        }
    }
}

/// 選択肢を構築（全削除は注文一覧が表示されている時だけ）
pub fn build_actions(visible: &[&'static PizzaRecord], footer: &FooterState) -> Vec<OrderAction> {
    let mut actions: Vec<OrderAction> = visible.iter().copied().map(OrderAction::Order).collect();
    actions.push(OrderAction::Search);
    if matches!(footer, FooterState::OpenWithOrders(_)) {
        actions.push(OrderAction::ClearAll);
    }
    actions.push(OrderAction::Quit);
    actions
}

/// 1アクションを反映。終了なら false
pub fn apply_action(
    shop: &mut Storefront,
    action: OrderAction,
    confirm: impl Confirm,
    next_filter: impl FnOnce(&str) -> Result<String>,
) -> Result<bool> {
    match action {
        OrderAction::Order(pizza) => {
            let outcome = shop.add_one(pizza, confirm);
            tracing::debug!(pizza = pizza.name, ?outcome, "注文追加");
            if outcome == MutationOutcome::Applied {
                tracing::info!(
                    pizza = pizza.name,
                    quantity = shop.ledger().quantity_of(pizza.name),
                    "注文に追加しました"
                );
            }
        }
        OrderAction::Search => {
            let text = next_filter(shop.filter())?;
            tracing::debug!(filter = %text, "フィルタ変更");
            shop.set_filter(text);
        }
        OrderAction::ClearAll => {
            let outcome = shop.clear_all(confirm);
            tracing::info!(?outcome, "注文全削除");
        }
        OrderAction::Quit => return Ok(false),
    }
    Ok(true)
}

fn prompt_filter(current: &str) -> Result<String> {
    let text: String = Input::new()
        .with_prompt(SEARCH_PLACEHOLDER)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

/// 名前指定の事前注文を解決（1つでも不明ならエラー）
pub fn resolve_preorders(names: &[String]) -> Result<Vec<&'static PizzaRecord>> {
    let pizzas = names
        .iter()
        .map(|name| find_ignore_case(name))
        .collect::<pizza_co_common::Result<Vec<_>>>()?;
    Ok(pizzas)
}

/// 対話式で注文
pub fn run_order_session(base_path: &str, assume_yes: bool, preorders: &[String]) -> Result<()> {
    let mut shop = Storefront::new();
    let confirm = PromptConfirm { assume_yes };

    for pizza in resolve_preorders(preorders)? {
        apply_action(&mut shop, OrderAction::Order(pizza), confirm, |current| {
            Ok(current.to_string())
        })?;
    }

    loop {
        // 描画ごとに営業時間を判定
        let footer = shop.footer(is_open_now());

        println!("{}", header_text());
        if !shop.filter().is_empty() {
            println!("🔍 {}\n", shop.filter());
        }
        println!("{}", menu_text(&shop.menu(), base_path));
        println!("---");
        println!("{}", footer_text(&footer));

        let actions = build_actions(&shop.visible(), &footer);
        let labels: Vec<String> = actions.iter().map(OrderAction::label).collect();

        let selected = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()?;

        if !apply_action(&mut shop, actions[selected], confirm, prompt_filter)? {
            break;
        }
    }

    println!("\nご利用ありがとうございました");
    Ok(())
}
