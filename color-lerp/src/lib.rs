//! # Color Lerp
//!
//! 颜色插值核心库。
//!
//! ## 架构概述
//!
//! `color-lerp` 是纯逻辑核心，不依赖窗口或渲染后端。
//! 宿主层（Host）每帧把时间传进来，拿回一个颜色：
//!
//! ```text
//! Host                          AnimationDriver
//!   │                              │
//!   │──── tick (ms) ─────────────►│
//!   │                              │ interpolate()
//!   │◄─── Color ──────────────────│
//!   │                              │
//! ```
//!
//! ## 核心类型
//!
//! - [`Color`]：RGBA 颜色
//! - [`LerpBehavior`]：Once / Cycle / PingPong
//! - [`CycleTime`]：非零周期时长
//! - [`AnimationDriver`]：持有配置并逐帧计算颜色
//!
//! ## 模块结构
//!
//! - [`color`]：颜色类型
//! - [`behavior`]：插值行为与周期
//! - [`lerp`]：插值函数
//! - [`driver`]：动画驱动
//! - [`error`]：错误类型定义

pub mod behavior;
pub mod color;
pub mod driver;
pub mod error;
pub mod lerp;

// 重导出核心类型
pub use behavior::{CycleTime, LerpBehavior, OnceMode};
pub use color::{Color, ERROR_COLOR};
pub use driver::{AnimationDriver, AnimationState};
pub use error::{LerpError, LerpResult};
pub use lerp::{interpolate, interpolate_with, point_between, should_reverse, try_interpolate};
