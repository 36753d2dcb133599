//! メニューカタログ
//!
//! ビルド時に埋め込まれる固定のピザ一覧。実行時に変更されることはない。

use crate::error::{Error, Result};
use serde::Serialize;

/// ピザ1件分のレコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaRecord {
    /// カタログ内での識別キー
    pub name: &'static str,
    pub ingredients: &'static str,
    /// 価格（ドル、整数）
    pub price: u32,
    /// 画像の相対パス（ベースパスで解決する）
    pub image_ref: &'static str,
}

impl PizzaRecord {
    /// 表示用の価格ラベル（例: `$10`）
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// ベースパスを付けた画像URL
    pub fn image_url(&self, base_path: &str) -> String {
        image_url(base_path, self.image_ref)
    }
}

/// 固定メニュー
pub static CATALOG: [PizzaRecord; 6] = [
    PizzaRecord {
        name: "Margherita",
        ingredients: "Tomato, mozzarella, basil",
        price: 10,
        image_ref: "pizzas/margherita.jpg",
    },
    PizzaRecord {
        name: "Spinaci",
        ingredients: "Spinach, ricotta, tomato sauce",
        price: 12,
        image_ref: "pizzas/spinaci.jpg",
    },
    PizzaRecord {
        name: "Pepperoni",
        ingredients: "Spicy pepperoni, mozzarella, tomato sauce",
        price: 14,
        image_ref: "pizzas/salamino.jpg",
    },
    PizzaRecord {
        name: "Funghi",
        ingredients: "Mushrooms, mozzarella, tomato sauce",
        price: 11,
        image_ref: "pizzas/funghi.jpg",
    },
    PizzaRecord {
        name: "Focaccia",
        ingredients: "Olives, cherry tomatoes, garlic, or herbs",
        price: 15,
        image_ref: "pizzas/focaccia.jpg",
    },
    PizzaRecord {
        name: "Prosciutto",
        ingredients: "Prosciutto, mozzarella, tomato sauce, arugula",
        price: 13,
        image_ref: "pizzas/prosciutto.jpg",
    },
];

/// 名前の完全一致で検索
pub fn find(name: &str) -> Option<&'static PizzaRecord> {
    CATALOG.iter().find(|p| p.name == name)
}

/// 大文字小文字を無視して検索（見つからなければエラー）
pub fn find_ignore_case(name: &str) -> Result<&'static PizzaRecord> {
    let needle = name.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|p| p.name.to_lowercase() == needle)
        .ok_or_else(|| Error::UnknownPizza(name.trim().to_string()))
}

/// ベースパスと相対パスを `/` 1つで連結
pub fn image_url(base_path: &str, image_ref: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let rel = image_ref.trim_start_matches('/');
    format!("{}/{}", base, rel)
}
