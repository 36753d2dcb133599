use clap::Parser;
use pizza_co::{cli, config, error, render, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use pizza_co_common::availability::{check_hour, current_hour, is_open, CLOSE_HOUR, OPEN_HOUR};
use pizza_co_common::storefront::{menu_json, FooterState, MenuState};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Menu { filter, json } => {
            let menu = MenuState::for_filter(&filter);
            tracing::debug!(filter = %filter, count = menu.items().len(), "メニュー抽出");

            if json {
                println!("{}", menu_json(menu.items(), &config.base_path)?);
            } else {
                println!("{}", render::header_text());
                print!("{}", render::menu_text(&menu, &config.base_path));
            }
        }

        Commands::Status { hour } => {
            let hour = match hour {
                Some(h) => check_hour(h)?,
                None => current_hour(),
            };
            let open = is_open(hour);
            tracing::debug!(hour, open, "営業時間判定");

            println!("時刻: {}時 (営業時間 {}:00-{}:00)", hour, OPEN_HOUR, CLOSE_HOUR);
            println!("{}", FooterState::from_parts(open, &Default::default()).status_text());
        }

        Commands::Order { yes, add } => {
            println!("🍕 pizza-co - 注文\n");
            println!("開始: {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M"));
            session::run_order_session(&config.base_path, yes, &add)?;
        }

        Commands::Config { set_base_path, set_image_dir, show } => {
            let mut config = config;

            if set_base_path.is_some() || set_image_dir.is_some() {
                // 環境変数の値をファイルに書き込まないよう、ファイルの内容だけを更新
                let mut stored = Config::load_from(&Config::config_path()?)?;
                if let Some(base) = set_base_path {
                    stored.set_base_path(base.clone())?;
                    config.base_path = base;
                    println!("✔ 画像ベースパスを設定しました");
                }
                if let Some(dir) = set_image_dir {
                    stored.set_image_dir(dir.clone())?;
                    config.image_dir = dir;
                    println!("✔ 画像ディレクトリを設定しました");
                }
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  画像ベースパス: {}",
                    if config.base_path.is_empty() { "(サイトルート)" } else { &config.base_path }
                );
                println!(
                    "  画像ディレクトリ: {}",
                    if config.image_dir.is_empty() { "(カレントディレクトリ)" } else { &config.image_dir }
                );
            }
        }
    }

    Ok(())
}
