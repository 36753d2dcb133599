//! 画像ディレクトリの解決
//!
//! 設定はターミナル版と同じ `~/.config/pizza-co/config.json` を共有する。
//! `base_path` はURLの接頭辞なので使わず、`image_dir` を使う。

use anyhow::{Context, Result};
use pizza_co_common::Config;
use std::path::{Path, PathBuf};

/// 環境変数 `PIZZA_CO_IMAGE_DIR` → 設定ファイル → カレントディレクトリ
pub fn image_dir() -> Result<PathBuf> {
    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;
    Ok(image_dir_from(&config))
}

pub fn image_dir_from(config: &Config) -> PathBuf {
    resolve_base(&config.image_dir)
}

/// 空ならカレントディレクトリ
pub fn resolve_base(base: &str) -> PathBuf {
    if base.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(base)
    }
}

pub fn image_path(dir: &Path, image_ref: &str) -> PathBuf {
    dir.join(image_ref.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_empty_base_to_cwd() {
        assert_eq!(resolve_base(""), PathBuf::from("."));
        assert_eq!(resolve_base("assets"), PathBuf::from("assets"));
    }

    #[test]
    fn joins_image_ref() {
        let path = image_path(Path::new("public"), "/pizzas/funghi.jpg");
        assert_eq!(path, Path::new("public").join("pizzas").join("funghi.jpg"));
    }

    /// 環境変数 > 設定ファイル > カレントディレクトリ
    #[test]
    fn image_dir_precedence() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");

        let missing = Config::load_from(&path).unwrap().with_image_dir_override(None);
        assert_eq!(image_dir_from(&missing), PathBuf::from("."));

        Config {
            base_path: "https://cdn.example.com".to_string(),
            image_dir: "/srv/pizza/public".to_string(),
        }
        .save_to(&path)
        .unwrap();

        let from_file = Config::load_from(&path).unwrap().with_image_dir_override(None);
        assert_eq!(image_dir_from(&from_file), PathBuf::from("/srv/pizza/public"));

        let from_env = Config::load_from(&path)
            .unwrap()
            .with_image_dir_override(Some("env-images".to_string()));
        assert_eq!(image_dir_from(&from_env), PathBuf::from("env-images"));
    }

    /// URLのベースパスは画像ディレクトリとして扱わない
    #[test]
    fn base_path_url_is_ignored() {
        let config = Config {
            base_path: "https://cdn.example.com/shop".to_string(),
            ..Config::default()
        };
        assert_eq!(image_dir_from(&config), PathBuf::from("."));
    }
}
