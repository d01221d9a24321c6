//! # Host 层
//!
//! 颜色插值演示的宿主层实现，使用 winit + wgpu 作为窗口与渲染后端。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 配置加载与命令行覆盖
//! - 日志初始化
//! - 窗口与渲染
//! - 提供 tick 时钟
//!
//! Host 层不包含插值逻辑，只把 tick 交给 `color-lerp` 的
//! [`AnimationDriver`](color_lerp::AnimationDriver) 并把结果颜色画到屏幕上。

pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod renderer;

pub use app::{App, FrameColors, run, run_headless, sample};
pub use cli::Cli;
pub use clock::{FixedStepClock, SystemClock, TickSource};
pub use config::{AnimationConfig, AppConfig, ConfigError, DebugConfig, WindowConfig};
pub use error::{HostError, HostResult};
pub use renderer::{RenderError, Renderer};
