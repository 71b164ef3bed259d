//! # fxhost
//!
//! 特效目录命令行工具：校验、查看并在无头环境中播放效果。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p fx-host -- --config effects.json check
//! cargo run -p fx-host -- --config effects.json list
//! cargo run -p fx-host -- --config effects.json show game-start
//! cargo run -p fx-host -- --config effects.json play game-start --at 0,64,0
//! cargo run -p fx-host -- --config effects.json play game-start --json
//! ```
//!
//! `play` 不带 `--at` 时只做校验，不产生任何调用。

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fx_host::{HeadlessSink, Location};
use fx_runtime::{DiagnosticLevel, EffectCatalog, EffectRenderer};
use tracing::Level;

#[derive(Parser)]
#[command(name = "fxhost")]
#[command(about = "特效目录工具 - 校验并在无头环境中播放效果")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 效果目录配置文件（默认：effects.json）
    #[arg(short, long, default_value = "effects.json", global = true)]
    config: PathBuf,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 只输出错误日志
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 校验目录中的所有效果
    Check,

    /// 列出所有效果名及其描述串
    List,

    /// 打印解析后的效果描述（JSON）
    Show {
        /// 效果名
        name: String,
    },

    /// 播放效果
    Play {
        /// 效果名
        name: String,

        /// 播放位置：x,y,z 或 world@x,y,z；省略时只校验
        #[arg(long)]
        at: Option<Location>,

        /// 以 JSON 输出渲染端收到的调用
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match real_main(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn real_main(cli: Cli) -> anyhow::Result<ExitCode> {
    let catalog = EffectCatalog::load(&cli.config)
        .with_context(|| format!("无法加载效果目录 {:?}", cli.config))?;
    let renderer = EffectRenderer::new(HeadlessSink::new());

    match cli.command {
        Commands::Check => {
            let result = catalog.validate_all(&renderer);
            let min_level = if cli.verbose {
                DiagnosticLevel::Info
            } else {
                DiagnosticLevel::Warn
            };
            for diagnostic in result.filter_by_level(min_level) {
                println!("{diagnostic}");
            }
            println!(
                "检查了 {} 个效果：{} 个错误，{} 个警告",
                catalog.names().len(),
                result.error_count(),
                result.warn_count()
            );
            if result.has_errors() {
                return Ok(ExitCode::from(2));
            }
        }

        Commands::List => {
            println!("主音量: {}", catalog.master_volume());
            for name in catalog.names() {
                println!("{name} = {}", catalog.raw_spec(name).unwrap_or_default());
            }
        }

        Commands::Show { name } => {
            let descriptor = catalog.get_descriptor(&name)?;
            println!("{}", serde_json::to_string_pretty(&*descriptor)?);
        }

        Commands::Play { name, at, json } => {
            catalog.play_effect(&renderer, at.as_ref(), &name)?;

            let events = renderer.sink().take_events();
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else if at.is_none() {
                println!("✅ 效果 '{name}' 校验通过");
            } else {
                println!("✅ 效果 '{name}' 已播放（{} 次调用）", events.len());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
