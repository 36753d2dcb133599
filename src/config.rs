//! 設定（本体は共通ライブラリ）
//!
//! 端末版は `base_path` のみを使い、`image_dir` はデスクトップ版用。

pub use pizza_co_common::config::{Config, BASE_PATH_ENV, IMAGE_DIR_ENV};
