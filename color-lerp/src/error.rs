//! # Error 模块
//!
//! 定义 color-lerp 中使用的错误类型。

use thiserror::Error;

/// 插值错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LerpError {
    /// 周期时长必须 >= 1
    #[error("无效的周期时长 {value}，必须 >= 1")]
    InvalidCycleTime { value: u32 },

    /// 无法解析的颜色字符串
    #[error("无效的颜色 '{input}' - {message}")]
    InvalidColor { input: String, message: String },

    /// 无法解析的插值行为
    #[error("未知的插值行为 '{input}'，可选：once / cycle / pingpong")]
    UnknownBehavior { input: String },

    /// 无法解析的 Once 模式
    #[error("未知的 Once 模式 '{input}'，可选：ramp / step")]
    UnknownOnceMode { input: String },
}

/// Result 类型别名
pub type LerpResult<T> = Result<T, LerpError>;
