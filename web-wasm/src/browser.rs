//! ブラウザAPI（確認ダイアログ・時計・ログ・画像パス）

use pizza_co_common::catalog::image_url;
use pizza_co_common::{Confirm, PizzaRecord};
use wasm_bindgen::JsValue;

/// ビルド時に与える画像のベースパス
pub fn base_path() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// `<img src>` 用のURL
pub fn image_src(pizza: &PizzaRecord) -> String {
    image_url(base_path(), pizza.image_ref)
}

/// ブラウザのローカル時刻（0-23）
pub fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// `window.confirm` による確認。使えない環境では「いいえ」
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
