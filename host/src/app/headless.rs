//! Headless 模式：不打开窗口，按固定帧间隔采样动画颜色。

use super::FrameColors;
use crate::clock::{FixedStepClock, TickSource};
use crate::config::AppConfig;
use crate::error::HostResult;
use color_lerp::Color;
use std::io::Write;
use tracing::info;

/// 从时钟读取 `frames` 个 tick，逐帧推进颜色
pub fn sample(
    colors: &mut FrameColors,
    clock: &mut impl TickSource,
    frames: u32,
) -> Vec<(u32, Color)> {
    (0..frames)
        .map(|_| {
            let tick = clock.ticks();
            (tick, colors.update(tick))
        })
        .collect()
}

/// 以 `frame_delay_ms` 为步长采样，每帧输出一行 `t=<tick> Color(r,g,b,a)`
pub fn run_headless(config: &AppConfig, frames: u32, out: &mut impl Write) -> HostResult<()> {
    let mut colors = FrameColors::from_config(config);
    let step = u32::try_from(config.frame_delay_ms).unwrap_or(u32::MAX);
    let mut clock = FixedStepClock::new(0, step);

    info!(frames, step, behavior = %config.animation.behavior, "headless 采样开始");
    for (tick, color) in sample(&mut colors, &mut clock, frames) {
        writeln!(out, "t={tick} {color}")?;
    }
    out.flush()?;
    Ok(())
}
