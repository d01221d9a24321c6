//! Color Lerp - Host 入口
//!
//! 打开窗口，每帧用插值颜色清屏；`--headless` 时只输出采样结果。

use anyhow::Context;
use clap::Parser;
use lerp_host::{AppConfig, Cli, logging};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = if cli.config.exists() {
        Some(AppConfig::load(&cli.config))
    } else {
        None
    };
    let mut config = match &file_config {
        Some(Ok(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    cli.apply(&mut config);

    logging::init(cli.log_level(&config));
    match &file_config {
        Some(Ok(_)) => info!(path = ?cli.config, "配置文件加载成功"),
        Some(Err(e)) => warn!(path = ?cli.config, error = %e, "配置文件解析失败，使用默认配置"),
        None => info!(path = ?cli.config, "配置文件不存在，使用默认配置"),
    }

    config.validate().context("配置无效")?;

    if cli.headless {
        let stdout = std::io::stdout();
        lerp_host::run_headless(&config, cli.frames, &mut stdout.lock())?;
    } else {
        lerp_host::run(config)?;
    }

    Ok(())
}
