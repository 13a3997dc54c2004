use clap::Parser;
use indicatif::ProgressBar;
use review_keyword_common::{analyze, AnalysisRequest, Category, Vocabulary};
use review_keyword_rust::{cli, config, error, export, reader, render, selector};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            input,
            core_keyword,
            title_column,
            review_column,
            sheet,
            vocab,
            format,
            output,
            top,
        } => {
            println!("🔎 review-keyword - キーワード集計\n");

            // コアキーワードは読み込み前に検証
            let core_keyword = core_keyword.unwrap_or_default();
            if core_keyword.trim().is_empty() {
                return Err(review_keyword_common::Error::MissingCoreKeyword.into());
            }

            let vocabulary = load_vocabulary(config.resolve_vocabulary_path(vocab), cli.verbose)?;

            // 1. 読み込み
            println!("[1/3] ファイルを読み込み中...");
            let table = reader::read_table(&input, sheet.as_deref())?;
            println!("✔ {}行を読み込み\n", table.len());
            if cli.verbose {
                println!("  列: {}", table.headers.join(", "));
            }

            let title_column = selector::resolve_column(
                &table,
                config.resolve_title_column(title_column),
                "タイトル列を選択",
                selector::TITLE_HINTS,
            )?;
            let review_column = selector::resolve_column(
                &table,
                config.resolve_review_column(review_column),
                "レビュー数列を選択",
                selector::REVIEW_HINTS,
            )?;

            // 2. 集計
            println!("[2/3] 分析中...");
            if cli.verbose {
                report_core_keyword(&vocabulary, &core_keyword);
            }
            let request = AnalysisRequest::new(&core_keyword, &title_column, &review_column);

            let spinner = ProgressBar::new_spinner();
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_message(format!("{} × {}", title_column, review_column));
            let result = analyze(&table, &request, &vocabulary);
            spinner.finish_and_clear();
            let report = result?;
            println!("✔ 分析完了\n");

            println!("{}", render::render_summary(&report));
            print!("{}", render::render_report(&report, top.unwrap_or(config.top)));

            // 3. 出力
            if format != cli::OutputFormat::Table {
                println!("\n[3/3] 結果を保存中...");
                let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
                let title = export::default_title(&input);
                export::export_report(&report, &format, &output_dir, &title)?;
            }

            println!("\n✅ 分析完了!");
        }

        Commands::Columns { input, sheet } => {
            let sheets = reader::sheet_names(&input)?;
            println!("シート: {}", sheets.join(", "));

            let table = reader::read_table(&input, sheet.as_deref())?;
            println!("列（{}行）:", table.len());
            for (i, header) in table.headers.iter().enumerate() {
                println!("  {}) {}", i + 1, header);
            }
        }

        Commands::Vocab { category, vocab, json } => {
            let vocabulary = load_vocabulary(config.resolve_vocabulary_path(vocab), cli.verbose)?;

            if json {
                println!("{}", vocabulary.to_json()?);
            } else {
                print!("{}", render::render_vocabulary(&vocabulary, category));
            }
        }

        Commands::Config { set_title_column, set_review_column, set_vocab, set_top, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(column) = set_title_column {
                config.title_column = Some(column);
                changed = true;
            }
            if let Some(column) = set_review_column {
                config.review_column = Some(column);
                changed = true;
            }
            if let Some(path) = set_vocab {
                config.vocabulary_path = Some(path);
                changed = true;
            }
            if let Some(top) = set_top {
                config.top = top;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  タイトル列: {}", config.title_column.as_deref().unwrap_or("未設定"));
                println!("  レビュー数列: {}", config.review_column.as_deref().unwrap_or("未設定"));
                println!(
                    "  語彙ファイル: {}",
                    config
                        .vocabulary_path
                        .as_deref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".to_string())
                );
                let top = if config.top == 0 {
                    "全件".to_string()
                } else {
                    config.top.to_string()
                };
                println!("  表示件数: {}", top);
            }
        }
    }

    Ok(())
}

fn load_vocabulary(path: Option<PathBuf>, verbose: bool) -> Result<Cow<'static, Vocabulary>> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(error::ReviewKeywordError::FileNotFound(path.display().to_string()));
            }
            let vocabulary = Vocabulary::from_file(&path)?;
            if verbose {
                println!("  語彙: {} ({}語)", path.display(), vocabulary.len());
            }
            Ok(Cow::Owned(vocabulary))
        }
        None => Ok(Cow::Borrowed(Vocabulary::builtin())),
    }
}

/// コアキーワードと既存語彙の重なりを表示
fn report_core_keyword(vocabulary: &Vocabulary, core_keyword: &str) {
    let core = core_keyword.trim();
    for category in Category::ALL {
        if let Some(entry) = vocabulary.find_in(category, core) {
            if category == Category::Product {
                println!("  コアキーワード「{}」は既存の商品タイプ「{}」と統合", core, entry.keyword);
            } else {
                println!("  コアキーワード「{}」は{}にも含まれます（商品タイプを優先）", core, category.label());
            }
        }
    }
}
