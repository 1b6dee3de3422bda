// src/args.rs
use crate::options::OutputFormat;
use clap::{Args as ClapArgs, Parser, ValueHint};
use docs_conf_domain::options::{Extension, HtmlTheme};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docs_conf",
    version,
    about = "ドキュメントビルド設定の解決ツール (git タグから release を導出)"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub project: ProjectOptions,

    #[command(flatten)]
    pub source: SourceOptions,

    #[command(flatten)]
    pub html: HtmlOptions,

    /// リリース解決に使うリポジトリ (省略時はカレントディレクトリ)
    #[arg(value_hint = ValueHint::DirPath, help_heading = "入力")]
    pub repo_dir: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct ProjectOptions {
    /// プロジェクト名
    #[arg(long, default_value = "Authentik-Manager", help_heading = "プロジェクト")]
    pub project: String,

    /// 著作権表記
    #[arg(long, default_value = "2023, George Onoufriou", help_heading = "プロジェクト")]
    pub copyright: String,

    /// 著者名
    #[arg(long, default_value = "George Onoufriou", help_heading = "プロジェクト")]
    pub author: String,

    /// ルートドキュメント名
    #[arg(long, default_value = "index", help_heading = "プロジェクト")]
    pub master_doc: String,
}

#[derive(ClapArgs, Debug)]
pub struct SourceOptions {
    /// 有効にする Sphinx 拡張 (カンマ区切り, 省略時は既定セット)
    #[arg(long = "extension", value_delimiter = ',', help_heading = "ソース")]
    pub extensions: Vec<Extension>,

    /// テンプレート探索パス (カンマ区切り)
    #[arg(long, value_delimiter = ',', value_hint = ValueHint::DirPath, help_heading = "ソース")]
    pub templates_path: Vec<PathBuf>,

    /// 除外する glob パターン (カンマ区切り)
    #[arg(long, value_delimiter = ',', help_heading = "ソース")]
    pub exclude: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct HtmlOptions {
    /// HTML テーマ
    #[arg(long = "html-theme", default_value = "pydata_sphinx_theme", help_heading = "HTML")]
    pub theme: HtmlTheme,

    /// 静的ファイルの探索パス (カンマ区切り)
    #[arg(long = "html-static-path", value_delimiter = ',', value_hint = ValueHint::DirPath, help_heading = "HTML")]
    pub static_path: Vec<PathBuf>,

    /// ロゴ画像
    #[arg(long = "html-logo", value_hint = ValueHint::FilePath, help_heading = "HTML")]
    pub logo: Option<PathBuf>,
}
