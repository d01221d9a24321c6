//! # Driver 模块
//!
//! 动画驱动：持有动画配置，每个 tick 计算一次当前颜色。

use crate::behavior::{CycleTime, LerpBehavior, OnceMode};
use crate::color::Color;
use crate::lerp::interpolate_with;

/// 动画配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub start: Color,
    pub end: Color,
    pub cycle_time: CycleTime,
    pub behavior: LerpBehavior,
    pub once_mode: OnceMode,
}

impl AnimationState {
    pub fn new(start: Color, end: Color, cycle_time: CycleTime, behavior: LerpBehavior) -> Self {
        Self {
            start,
            end,
            cycle_time,
            behavior,
            once_mode: OnceMode::default(),
        }
    }

    /// 设置 `Once` 模式
    pub fn with_once_mode(mut self, once_mode: OnceMode) -> Self {
        self.once_mode = once_mode;
        self
    }
}

/// 动画驱动
///
/// 由宿主循环独占持有；`update` 每帧调用一次。
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    state: AnimationState,
    current: Color,
}

impl AnimationDriver {
    /// 创建驱动，当前颜色初始化为起点
    pub fn new(state: AnimationState) -> Self {
        Self {
            current: state.start,
            state,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// 最近一次 `update` 计算出的颜色
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// 计算指定 tick 的颜色，不修改驱动状态
    pub fn color_at(&self, tick: u32) -> Color {
        interpolate_with(
            self.state.start,
            self.state.end,
            self.state.cycle_time,
            tick,
            self.state.behavior,
            self.state.once_mode,
        )
    }

    /// 推进到指定 tick，返回并记录当前颜色
    pub fn update(&mut self, tick: u32) -> Color {
        self.current = self.color_at(tick);
        self.current
    }

    pub fn set_colors(&mut self, start: Color, end: Color) {
        self.state.start = start;
        self.state.end = end;
    }

    pub fn set_behavior(&mut self, behavior: LerpBehavior) {
        self.state.behavior = behavior;
    }

    pub fn set_cycle_time(&mut self, cycle_time: CycleTime) {
        self.state.cycle_time = cycle_time;
    }

    pub fn set_once_mode(&mut self, once_mode: OnceMode) {
        self.state.once_mode = once_mode;
    }
}
