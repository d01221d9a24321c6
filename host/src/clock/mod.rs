//! # Clock 模块
//!
//! 为动画驱动提供毫秒 tick。

use std::time::Instant;

/// tick 来源
pub trait TickSource {
    /// 当前 tick（毫秒）
    fn ticks(&mut self) -> u32;
}

/// 系统时钟：自创建起经过的毫秒数
///
/// 超过 `u32::MAX` 后回绕，与插值的取模语义一致。
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SystemClock {
    fn ticks(&mut self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }
}

/// 固定步长时钟：每次读取前进 `step` 毫秒
///
/// 第一次读取返回 `start`。用于 headless 模式和测试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStepClock {
    next: u32,
    step: u32,
}

impl FixedStepClock {
    pub fn new(start: u32, step: u32) -> Self {
        Self { next: start, step }
    }
}

impl TickSource for FixedStepClock {
    fn ticks(&mut self) -> u32 {
        let current = self.next;
        self.next = self.next.wrapping_add(self.step);
        current
    }
}
