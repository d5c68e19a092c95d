use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sv-inventory")]
#[command(about = "Sri Venkateswara Fire Works price list viewer/editor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ブランド一覧を表示
    Brands,

    /// 品目一覧を表示（ブランド・品名で絞り込み）
    List {
        /// ブランド名（完全一致）
        #[arg(short, long)]
        brand: Option<String>,

        /// 品名の検索語（大文字小文字を区別しない）
        #[arg(short, long)]
        search: Option<String>,
    },

    /// 品名・価格を編集
    Edit {
        /// 編集する品名（同名が複数ある場合は先頭）
        #[arg(required = true)]
        item: String,

        /// 新しい品名（省略時は対話入力）
        #[arg(short, long)]
        name: Option<String>,

        /// 新しい価格（省略時は対話入力）
        #[arg(short, long)]
        price: Option<String>,
    },

    /// 品目を追加
    Add {
        /// ブランド名
        #[arg(short, long)]
        brand: Option<String>,

        /// 品名
        #[arg(short, long)]
        item: Option<String>,

        /// 価格
        #[arg(short, long)]
        price: Option<String>,

        /// DR価格（任意）
        #[arg(long)]
        dr: Option<String>,
    },

    /// スプレッドシートを読み込んで在庫を置き換え
    Import {
        /// 読み込むファイル (xlsx/xls/xlsb/ods)
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 在庫をExcelに書き出し
    Export {
        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 初回読み込み用スプレッドシートのパス
        #[arg(long)]
        set_bundled: Option<PathBuf>,

        /// 在庫データの保存先
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
