//! Hui Zhi's Pizza Co. デスクトップ版

mod app;
mod io;
mod model;

use anyhow::anyhow;
use app::PizzaApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let image_dir = io::image_dir()?;
    tracing::info!(dir = %image_dir.display(), "画像ディレクトリ");

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Hui Zhi's Pizza Co.",
        options,
        Box::new(move |_cc| Box::new(PizzaApp::new(image_dir))),
    )
    .map_err(|err| anyhow!("ウィンドウの起動に失敗しました: {err}"))
}
