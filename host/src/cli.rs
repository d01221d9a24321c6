//! # CLI 模块
//!
//! 命令行参数，优先级高于配置文件。

use crate::config::AppConfig;
use clap::{ArgAction, Parser};
use color_lerp::{Color, LerpBehavior, OnceMode};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "lerp-host")]
#[command(about = "在两个颜色之间插值并用结果清屏")]
#[command(version)]
pub struct Cli {
    /// 配置文件路径
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// 插值行为：once / cycle / pingpong
    #[arg(long)]
    pub behavior: Option<LerpBehavior>,

    /// 周期时长（毫秒）
    #[arg(long = "cycle-ms")]
    pub cycle_ms: Option<u32>,

    /// 起点颜色（#rrggbb 或 #rrggbbaa）
    #[arg(long)]
    pub start: Option<Color>,

    /// 终点颜色（#rrggbb 或 #rrggbbaa）
    #[arg(long)]
    pub end: Option<Color>,

    /// once 行为的表现：ramp / step
    #[arg(long = "once-mode")]
    pub once_mode: Option<OnceMode>,

    /// 不打开窗口，按帧间隔采样颜色并输出到 stdout
    #[arg(long)]
    pub headless: bool,

    /// headless 模式下采样的帧数
    #[arg(long, default_value_t = 10)]
    pub frames: u32,

    /// 提高日志级别（-v: debug，-vv: trace）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// 用命令行参数覆盖配置
    pub fn apply(&self, config: &mut AppConfig) {
        let animation = &mut config.animation;
        if let Some(behavior) = self.behavior {
            animation.behavior = behavior;
        }
        if let Some(cycle_ms) = self.cycle_ms {
            animation.cycle_time_ms = cycle_ms;
        }
        if let Some(start) = self.start {
            animation.start_color = start;
        }
        if let Some(end) = self.end {
            animation.end_color = end;
        }
        if let Some(once_mode) = self.once_mode {
            animation.once_mode = once_mode;
        }
    }

    /// 最终日志级别：`-v` 优先，否则取配置（无效时为 info）
    pub fn log_level(&self, config: &AppConfig) -> Level {
        match self.verbose {
            0 => config.log_level().unwrap_or(Level::INFO),
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lerp-host"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert!(!cli.headless);
        assert_eq!(cli.frames, 10);

        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "lerp-host",
            "--behavior",
            "cycle",
            "--cycle-ms",
            "1000",
            "--start",
            "#000000",
            "--end",
            "#ffffffff",
            "--once-mode",
            "step",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.animation.behavior, LerpBehavior::Cycle);
        assert_eq!(config.animation.cycle_time_ms, 1000);
        assert_eq!(config.animation.start_color, Color::BLACK);
        assert_eq!(config.animation.end_color, Color::WHITE);
        assert_eq!(config.animation.once_mode, OnceMode::Step);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["lerp-host", "--behavior", "bounce"]).is_err());
        assert!(Cli::try_parse_from(["lerp-host", "--start", "red"]).is_err());
        assert!(Cli::try_parse_from(["lerp-host", "--cycle-ms", "-1"]).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        config.debug.log_level = "warn".to_string();

        let cli = Cli::try_parse_from(["lerp-host"]).unwrap();
        assert_eq!(cli.log_level(&config), Level::WARN);

        let cli = Cli::try_parse_from(["lerp-host", "-v"]).unwrap();
        assert_eq!(cli.log_level(&config), Level::DEBUG);

        let cli = Cli::try_parse_from(["lerp-host", "-vvv"]).unwrap();
        assert_eq!(cli.log_level(&config), Level::TRACE);
    }
}
