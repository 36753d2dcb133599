//! 名前の前方一致フィルタ

use crate::catalog::PizzaRecord;

/// 名前が `text` で始まるか（大文字小文字を無視）
pub fn matches(pizza: &PizzaRecord, text: &str) -> bool {
    pizza.name.to_lowercase().starts_with(&text.to_lowercase())
}

/// カタログから表示対象を抽出（カタログ順を維持）
///
/// 空文字はすべてに一致する。結果が空の場合、呼び出し側は
/// 「見つかりません」表示を出すこと。
pub fn filter_catalog<'a>(catalog: &'a [PizzaRecord], text: &str) -> Vec<&'a PizzaRecord> {
    catalog.iter().filter(|p| matches(p, text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn names(items: &[&PizzaRecord]) -> Vec<&'static str> {
        items.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let result = filter_catalog(&CATALOG, "");
        assert_eq!(result.len(), 6);
        assert_eq!(names(&result)[0], "Margherita");
    }

    #[test]
    fn test_no_match() {
        assert!(filter_catalog(&CATALOG, "zz").is_empty());
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        assert_eq!(names(&filter_catalog(&CATALOG, "f")), vec!["Funghi", "Focaccia"]);
        assert_eq!(names(&filter_catalog(&CATALOG, "FO")), vec!["Focaccia"]);
        assert_eq!(names(&filter_catalog(&CATALOG, "pRo")), vec!["Prosciutto"]);
    }

    #[test]
    fn test_prefix_not_substring() {
        // "ita" は Margherita の途中にあるが前方一致ではない
        assert!(filter_catalog(&CATALOG, "ita").is_empty());
    }

    #[test]
    fn test_matches_exactly_the_prefixed_entries() {
        let cases: [(&str, &[&str]); 8] = [
            ("", &["Margherita", "Spinaci", "Pepperoni", "Funghi", "Focaccia", "Prosciutto"]),
            ("m", &["Margherita"]),
            ("P", &["Pepperoni", "Prosciutto"]),
            ("pe", &["Pepperoni"]),
            ("spin", &["Spinaci"]),
            ("Prosciutto", &["Prosciutto"]),
            ("prosciutto!", &[]),
            ("x", &[]),
        ];
        for (text, expected) in cases {
            assert_eq!(names(&filter_catalog(&CATALOG, text)), expected, "filter: {:?}", text);
        }
    }
}
