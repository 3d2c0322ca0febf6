// ==========================================
// 钻具组合导入引擎 - 命令行入口
// ==========================================
// 用法:
//   bha-import import bha.xlsx [--export out.csv] [--locale zh-CN]
//   bha-import preset motor [--export out.csv]
//   bha-import presets
//   bha-import types
// ==========================================

use anyhow::Context;
use bha_import::api::BhaEditorApi;
use bha_import::config::{ConfigManager, ImportSettings};
use bha_import::domain::Severity;
use bha_import::editor::PRESET_NAMES;
use bha_import::{i18n, logging};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bha-import")]
#[command(about = "Import and normalize BHA component lists", long_about = None)]
struct Cli {
    /// 界面语言（覆盖配置文件）
    #[arg(long, global = true)]
    locale: Option<String>,

    /// 配置文件路径（默认: <config_dir>/bha-import/config.json）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a component list from CSV, TSV or a spreadsheet
    Import {
        /// Input file
        input: PathBuf,

        /// Write the resulting list as CSV
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Load a named preset assembly
    Preset {
        /// Preset name
        name: String,

        /// Write the resulting list as CSV
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// List available presets
    Presets,

    /// List selectable component types
    Types,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    i18n::set_locale(cli.locale.as_deref().unwrap_or(&settings.locale));

    let api = BhaEditorApi::from_settings(
        &settings,
        Box::new(|message: &str, severity: Severity| {
            eprintln!("[{}] {}", severity, message);
        }),
    );

    match cli.command {
        Commands::Import { input, export } => {
            let outcome = api.import_file(&input).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if outcome.is_applied() {
                finish(&api, export.as_deref())?;
            } else {
                std::process::exit(1);
            }
        }

        Commands::Preset { name, export } => {
            api.load_preset(&name)?;
            finish(&api, export.as_deref())?;
        }

        Commands::Presets => {
            for name in PRESET_NAMES {
                println!("{}", name);
            }
        }

        Commands::Types => {
            for option in api.catalog() {
                println!("{:<22}{}", option.id, option.label);
            }
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<ImportSettings> {
    let settings = match path {
        Some(path) => ConfigManager::load(path)?,
        None => ConfigManager::load_or_default()?,
    };
    Ok(settings)
}

/// 输出计算载荷,可选导出 CSV
fn finish(api: &BhaEditorApi, export: Option<&Path>) -> anyhow::Result<()> {
    let payload = api.calculation_payload()?;
    println!("{}", payload.to_json()?);

    if let Some(path) = export {
        api.export_csv(path)
            .with_context(|| format!("failed to export {}", path.display()))?;
    }
    Ok(())
}
