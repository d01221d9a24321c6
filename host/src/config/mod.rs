//! # Config 模块
//!
//! 运行时配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (config.json)
//! 3. 默认值（最低）

use color_lerp::{AnimationState, Color, CycleTime, LerpBehavior, OnceMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 窗口配置
    #[serde(default)]
    pub window: WindowConfig,

    /// 动画配置
    #[serde(default)]
    pub animation: AnimationConfig,

    /// 两帧之间的等待时间（毫秒）
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,

    /// 调试配置
    #[serde(default)]
    pub debug: DebugConfig,
}

/// 窗口配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 窗口宽度
    #[serde(default = "default_window_width")]
    pub width: u32,

    /// 窗口高度
    #[serde(default = "default_window_height")]
    pub height: u32,

    /// 窗口标题
    #[serde(default = "default_window_title")]
    pub title: String,
}

/// 动画配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// 起点颜色
    #[serde(default = "default_start_color")]
    pub start_color: Color,

    /// 终点颜色
    #[serde(default = "default_end_color")]
    pub end_color: Color,

    /// 周期时长（毫秒），必须 >= 1
    #[serde(default = "default_cycle_time_ms")]
    pub cycle_time_ms: u32,

    /// 插值行为
    #[serde(default)]
    pub behavior: LerpBehavior,

    /// `once` 行为的表现（ramp / step）
    #[serde(default)]
    pub once_mode: OnceMode,
}

/// 调试配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// 日志级别：trace / debug / info / warn / error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// 默认值函数
fn default_window_width() -> u32 {
    640
}

fn default_window_height() -> u32 {
    480
}

fn default_window_title() -> String {
    "Color Lerp".to_string()
}

fn default_start_color() -> Color {
    Color::rgba(254, 204, 213, 255)
}

fn default_end_color() -> Color {
    Color::rgba(7, 255, 255, 255)
}

fn default_cycle_time_ms() -> u32 {
    5000
}

fn default_frame_delay_ms() -> u64 {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            animation: AnimationConfig::default(),
            frame_delay_ms: default_frame_delay_ms(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            start_color: default_start_color(),
            end_color: default_end_color(),
            cycle_time_ms: default_cycle_time_ms(),
            behavior: LerpBehavior::default(),
            once_mode: OnceMode::default(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 读取并解析配置文件
    ///
    /// 调用方决定失败时是否回退到默认配置。
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 验证配置有效性
    ///
    /// `animation.cycle_time_ms` 为 0 不算启动失败：主循环照常运行并输出错误颜色。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Validation(format!(
                "窗口尺寸无效: {}x{}",
                self.window.width, self.window.height
            )));
        }

        if self.frame_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "frame_delay_ms 必须 >= 1".to_string(),
            ));
        }

        self.log_level()?;

        Ok(())
    }

    /// 解析日志级别
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.debug.log_level).map_err(|_| {
            ConfigError::Validation(format!("未知的日志级别: {}", self.debug.log_level))
        })
    }

    /// 构造动画驱动所需的状态
    pub fn animation_state(&self) -> Result<AnimationState, ConfigError> {
        let cycle_time = CycleTime::new(self.animation.cycle_time_ms)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(AnimationState::new(
            self.animation.start_color,
            self.animation.end_color,
            cycle_time,
            self.animation.behavior,
        )
        .with_once_mode(self.animation.once_mode))
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 验证失败
    #[error("配置验证失败: {0}")]
    Validation(String),
}
