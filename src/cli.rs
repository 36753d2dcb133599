use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pizza-co")]
#[command(about = "Hui Zhi's Pizza Co. メニュー閲覧・注文", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メニューを表示
    Menu {
        /// 名前の前方一致フィルタ（大文字小文字を無視）
        #[arg(short, long, default_value = "")]
        filter: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 営業中かどうかを表示
    Status {
        /// 判定する時（0-23、省略時は現在時刻）
        #[arg(long)]
        hour: Option<u32>,
    },

    /// 対話的に注文
    Order {
        /// 確認をすべて「はい」で進める
        #[arg(short, long)]
        yes: bool,

        /// 開始前に注文するピザ（名前、複数指定可）
        #[arg(short, long = "add", value_name = "NAME")]
        add: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 画像ベースパスを設定
        #[arg(long)]
        set_base_path: Option<String>,

        /// デスクトップ版の画像ディレクトリを設定
        #[arg(long)]
        set_image_dir: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
