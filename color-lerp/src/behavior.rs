//! # Behavior 模块
//!
//! 插值的时间行为与周期时长。

use crate::error::{LerpError, LerpResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// 插值行为
///
/// 决定时间如何映射到插值进度。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LerpBehavior {
    /// 只播放一次，之后停在终点
    Once,
    /// 循环（锯齿波），每个周期从起点重新开始
    Cycle,
    /// 往返，每个周期反转一次方向
    #[default]
    PingPong,
}

impl LerpBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            LerpBehavior::Once => "once",
            LerpBehavior::Cycle => "cycle",
            LerpBehavior::PingPong => "pingpong",
        }
    }
}

impl fmt::Display for LerpBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LerpBehavior {
    type Err = LerpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(LerpBehavior::Once),
            "cycle" => Ok(LerpBehavior::Cycle),
            "pingpong" | "ping-pong" | "ping_pong" => Ok(LerpBehavior::PingPong),
            _ => Err(LerpError::UnknownBehavior {
                input: s.to_string(),
            }),
        }
    }
}

/// `Once` 行为在周期内的表现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnceMode {
    /// 从 t=0 的起点线性过渡到 t=cycle_time 的终点
    #[default]
    Ramp,
    /// 阶跃：到达周期前保持起点，之后直接跳到终点
    Step,
}

impl FromStr for OnceMode {
    type Err = LerpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ramp" => Ok(OnceMode::Ramp),
            "step" => Ok(OnceMode::Step),
            _ => Err(LerpError::UnknownOnceMode {
                input: s.to_string(),
            }),
        }
    }
}

/// 周期时长（毫秒），保证 >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleTime(NonZeroU32);

impl CycleTime {
    pub fn new(millis: u32) -> LerpResult<Self> {
        NonZeroU32::new(millis)
            .map(Self)
            .ok_or(LerpError::InvalidCycleTime { value: millis })
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for CycleTime {
    type Error = LerpError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CycleTime> for u32 {
    fn from(value: CycleTime) -> Self {
        value.get()
    }
}
