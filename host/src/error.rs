//! # Error 模块
//!
//! 宿主层统一错误类型。

use crate::config::ConfigError;
use crate::renderer::RenderError;
use thiserror::Error;

/// 宿主层错误
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("事件循环错误: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("创建窗口失败: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("输出失败: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type HostResult<T> = Result<T, HostError>;
