//! 設定ファイル（ターミナル・デスクトップ共通）
//!
//! `~/.config/pizza-co/config.json` を読み書きする。環境変数はファイルより優先。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 画像URLのベースパスを上書きする環境変数
pub const BASE_PATH_ENV: &str = "PUBLIC_URL";
/// デスクトップ版の画像ディレクトリを上書きする環境変数
pub const IMAGE_DIR_ENV: &str = "PIZZA_CO_IMAGE_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// 画像URLのベースパス（ターミナル・Web）
    pub base_path: String,
    /// 画像ファイルのディレクトリ（デスクトップ）
    pub image_dir: String,
}

impl Config {
    /// 設定ファイル → 環境変数の順に読み込む（環境変数優先）
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config
            .with_env_override(std::env::var(BASE_PATH_ENV).ok())
            .with_image_dir_override(std::env::var(IMAGE_DIR_ENV).ok()))
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// `base_path` の上書き
    pub fn with_env_override(mut self, value: Option<String>) -> Self {
        if let Some(base) = value {
            self.base_path = base;
        }
        self
    }

    /// `image_dir` の上書き
    pub fn with_image_dir_override(mut self, value: Option<String>) -> Self {
        if let Some(dir) = value {
            self.image_dir = dir;
        }
        self
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pizza-co").join("config.json"))
    }

    pub fn set_base_path(&mut self, base: String) -> Result<()> {
        self.base_path = base;
        self.save()
    }

    pub fn set_image_dir(&mut self, dir: String) -> Result<()> {
        self.image_dir = dir;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_both_keys() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            base_path: "https://cdn.example.com/shop".to_string(),
            image_dir: "/srv/pizza/public".to_string(),
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_old_file_without_image_dir() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "base_path": "/shop" }"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.base_path, "/shop");
        assert_eq!(loaded.image_dir, "");
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ base_path: ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Json(_))));
    }

    /// 環境変数 > ファイル > デフォルト
    #[test]
    fn test_precedence_env_file_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");

        let defaults = Config::load_from(&path)
            .unwrap()
            .with_env_override(None)
            .with_image_dir_override(None);
        assert_eq!(defaults, Config::default());

        Config {
            base_path: "/from-file".to_string(),
            image_dir: "file-images".to_string(),
        }
        .save_to(&path)
        .unwrap();

        let from_file = Config::load_from(&path)
            .unwrap()
            .with_env_override(None)
            .with_image_dir_override(None);
        assert_eq!(from_file.base_path, "/from-file");
        assert_eq!(from_file.image_dir, "file-images");

        let from_env = Config::load_from(&path)
            .unwrap()
            .with_env_override(Some("/from-env".to_string()))
            .with_image_dir_override(Some("env-images".to_string()));
        assert_eq!(from_env.base_path, "/from-env");
        assert_eq!(from_env.image_dir, "env-images");
    }

    /// 片方の上書きはもう片方に影響しない
    #[test]
    fn test_overrides_are_independent() {
        let config = Config {
            base_path: "/shop".to_string(),
            image_dir: "images".to_string(),
        };

        let overridden = config.clone().with_env_override(Some("https://cdn".to_string()));
        assert_eq!(overridden.base_path, "https://cdn");
        assert_eq!(overridden.image_dir, "images");

        let overridden = config.with_image_dir_override(Some("/tmp/pics".to_string()));
        assert_eq!(overridden.base_path, "/shop");
        assert_eq!(overridden.image_dir, "/tmp/pics");
    }
}
