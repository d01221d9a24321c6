//! 每帧颜色来源

use crate::config::AppConfig;
use color_lerp::{AnimationDriver, Color, ERROR_COLOR};
use tracing::warn;

/// 每帧颜色来源
///
/// 配置可用时由 [`AnimationDriver`] 计算；周期时长无效时每帧都返回
/// [`ERROR_COLOR`]，主循环照常运行。
#[derive(Debug, Clone)]
pub struct FrameColors {
    driver: Option<AnimationDriver>,
    current: Color,
}

impl FrameColors {
    /// 根据配置创建，周期无效时只警告一次
    pub fn from_config(config: &AppConfig) -> Self {
        match config.animation_state() {
            Ok(state) => Self::from_driver(AnimationDriver::new(state)),
            Err(e) => {
                warn!(error = %e, "动画配置无效，改为输出错误颜色");
                Self::invalid()
            }
        }
    }

    pub fn from_driver(driver: AnimationDriver) -> Self {
        Self {
            current: driver.current_color(),
            driver: Some(driver),
        }
    }

    /// 始终输出 [`ERROR_COLOR`]
    pub fn invalid() -> Self {
        Self {
            driver: None,
            current: ERROR_COLOR,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.driver.is_some()
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    /// 推进到指定 tick，返回当前颜色
    pub fn update(&mut self, tick: u32) -> Color {
        if let Some(driver) = self.driver.as_mut() {
            self.current = driver.update(tick);
        }
        self.current
    }
}
