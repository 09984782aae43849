//! # 示例应用程序
//!
//! 演示构造函数注入的双屏应用：主屏幕启动后模拟点击跳转按钮，
//! 驱动循环处理导航请求并启动第二屏幕。

mod config;
mod navigation;
mod screens;

use clap::Parser;
use tracing::info;
use zoo_di_impl::Injector;
use zoo_domain::shared_injector;

use crate::navigation::{Navigator, ScreenId};
use crate::screens::{MainScreen, Screen, SecondScreen};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "zoo-app")]
#[command(about = "Zoo DI 示例应用")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "config/app.toml")]
    config: String,

    /// 日志级别，覆盖配置文件中的取值
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match config::load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            let config = config::AppConfig::default();
            eprintln!("未加载配置文件（{e}），使用默认配置");
            config
        }
    };

    let log_level = args.log_level.as_deref().unwrap_or(&config.log_level);
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(log_level))
        .init();

    info!("启动 {} 示例应用", config.name);

    // 进程级共享注入器，注册表只装配一次
    let injector = shared_injector()?;
    run_screens(&injector)?;

    info!("应用已退出");
    Ok(())
}

/// 驱动两个屏幕的生命周期
fn run_screens(injector: &Injector) -> anyhow::Result<()> {
    let mut navigator = Navigator::new();

    let mut main_screen = injector.populate::<MainScreen>()?;
    main_screen.on_start();

    // 模拟点击跳转按钮
    main_screen.press_button(&mut navigator);

    for request in navigator.take_requests() {
        match request.target {
            ScreenId::Second => {
                let mut screen = injector.populate::<SecondScreen>()?;
                screen.on_start();
            }
            ScreenId::Main => {
                let mut screen = injector.populate::<MainScreen>()?;
                screen.on_start();
            }
        }
    }

    Ok(())
}

/// 解析日志级别
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
