//! # Lerp 模块
//!
//! 颜色插值核心。所有函数都是纯函数，只通过 `tracing` 输出诊断信息。
//!
//! ## 时间映射
//!
//! ```text
//! Once      start ──────► end ─────────────────────
//! Cycle     start ──► end │ start ──► end │ ...
//! PingPong  start ──► end │ end ──► start │ ...
//!           0            ct              2ct
//! ```

use crate::behavior::{CycleTime, LerpBehavior, OnceMode};
use crate::color::{Color, ERROR_COLOR};
use crate::error::LerpError;
use tracing::{trace, warn};

/// 计算两个颜色之间的点
///
/// `percent` 会被限制在 `[0.0, 1.0]`。每个通道独立计算：
/// - 两端相等时直接返回该值（不经过浮点运算）
/// - 否则计算 `a + p * (b - a)`，再**截断**（向零取整）为 `u8`
///
/// 截断而不是四舍五入，例如 0 → 255 在 0.5 处得到 127。
pub fn point_between(start: Color, end: Color, percent: f64) -> Color {
    let p = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 1.0)
    };

    Color::rgba(
        lerp_channel(start.r, end.r, p),
        lerp_channel(start.g, end.g, p),
        lerp_channel(start.b, end.b, p),
        lerp_channel(start.a, end.a, p),
    )
}

fn lerp_channel(a: u8, b: u8, p: f64) -> u8 {
    if a == b {
        return a;
    }

    let (a, b) = (f64::from(a), f64::from(b));
    (a + p * (b - a)).clamp(0.0, 255.0).trunc() as u8
}

/// 计算当前时刻的插值颜色
///
/// `cycle_time` 为 0 时不做计算，输出警告并返回 [`ERROR_COLOR`]，
/// 让渲染循环在配置错误时继续运行。`Once` 行为使用 [`OnceMode::Ramp`]。
pub fn interpolate(
    start: Color,
    end: Color,
    cycle_time: u32,
    current_time: u32,
    behavior: LerpBehavior,
) -> Color {
    match try_interpolate(start, end, cycle_time, current_time, behavior) {
        Ok(color) => color,
        Err(e) => {
            warn!(error = %e, "周期时长无效，返回错误颜色");
            ERROR_COLOR
        }
    }
}

/// 与 [`interpolate`] 相同，但周期时长无效时返回错误
pub fn try_interpolate(
    start: Color,
    end: Color,
    cycle_time: u32,
    current_time: u32,
    behavior: LerpBehavior,
) -> Result<Color, LerpError> {
    let cycle_time = CycleTime::new(cycle_time)?;
    Ok(interpolate_with(
        start,
        end,
        cycle_time,
        current_time,
        behavior,
        OnceMode::default(),
    ))
}

/// 在已验证的周期时长上计算插值颜色
pub fn interpolate_with(
    start: Color,
    end: Color,
    cycle_time: CycleTime,
    current_time: u32,
    behavior: LerpBehavior,
    once_mode: OnceMode,
) -> Color {
    match behavior {
        LerpBehavior::Once => lerp_once(start, end, cycle_time, current_time, once_mode),
        LerpBehavior::Cycle => lerp_cycle(start, end, cycle_time, current_time),
        LerpBehavior::PingPong => lerp_ping_pong(start, end, cycle_time, current_time),
    }
}

/// PingPong 是否处于反向半周期
pub fn should_reverse(behavior: LerpBehavior, cycle_time: CycleTime, current_time: u32) -> bool {
    let ct = u64::from(cycle_time.get());
    behavior == LerpBehavior::PingPong && u64::from(current_time) % (ct * 2) >= ct
}

/// 周期内的进度 `(t mod ct) / ct`
fn cycle_fraction(cycle_time: CycleTime, current_time: u32) -> f64 {
    let ct = cycle_time.get();
    f64::from(current_time % ct) / f64::from(ct)
}

fn lerp_once(
    start: Color,
    end: Color,
    cycle_time: CycleTime,
    current_time: u32,
    once_mode: OnceMode,
) -> Color {
    if current_time >= cycle_time.get() {
        return end;
    }

    let color = match once_mode {
        OnceMode::Step => start,
        OnceMode::Ramp => point_between(
            start,
            end,
            f64::from(current_time) / f64::from(cycle_time.get()),
        ),
    };
    trace!(behavior = "once", ?once_mode, %color, "插值结果");
    color
}

fn lerp_cycle(start: Color, end: Color, cycle_time: CycleTime, current_time: u32) -> Color {
    let color = point_between(start, end, cycle_fraction(cycle_time, current_time));
    trace!(behavior = "cycle", %color, "插值结果");
    color
}

fn lerp_ping_pong(start: Color, end: Color, cycle_time: CycleTime, current_time: u32) -> Color {
    let reversed = should_reverse(LerpBehavior::PingPong, cycle_time, current_time);
    let fraction = cycle_fraction(cycle_time, current_time);
    let color = if reversed {
        point_between(end, start, fraction)
    } else {
        point_between(start, end, fraction)
    };
    trace!(behavior = "pingpong", reversed, %color, "插值结果");
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEHAVIORS: [LerpBehavior; 3] = [
        LerpBehavior::Once,
        LerpBehavior::Cycle,
        LerpBehavior::PingPong,
    ];

    fn black() -> Color {
        Color::rgba(0, 0, 0, 255)
    }

    fn white() -> Color {
        Color::rgba(255, 255, 255, 255)
    }

    fn ct(millis: u32) -> CycleTime {
        CycleTime::new(millis).unwrap()
    }

    #[test]
    fn test_point_between_endpoints_exact() {
        let samples = [
            (Color::rgba(254, 204, 213, 255), Color::rgba(7, 255, 255, 255)),
            (Color::rgba(0, 0, 0, 0), Color::rgba(255, 255, 255, 255)),
            (Color::rgba(255, 1, 128, 3), Color::rgba(0, 254, 127, 200)),
        ];
        for (start, end) in samples {
            assert_eq!(point_between(start, end, 0.0), start);
            assert_eq!(point_between(start, end, 1.0), end);
        }
    }

    #[test]
    fn test_point_between_truncates() {
        assert_eq!(point_between(black(), white(), 0.5), Color::rgb(127, 127, 127));
        assert_eq!(point_between(white(), black(), 0.5), Color::rgb(127, 127, 127));
        // 0.999 * 255 = 254.745，截断为 254
        assert_eq!(point_between(black(), white(), 0.999).r, 254);
    }

    #[test]
    fn test_point_between_clamps_percent() {
        assert_eq!(point_between(black(), white(), -3.0), black());
        assert_eq!(point_between(black(), white(), 7.5), white());
        assert_eq!(point_between(black(), white(), f64::NAN), black());
    }

    #[test]
    fn test_point_between_equal_channel_untouched() {
        let start = Color::rgba(10, 77, 200, 255);
        let end = Color::rgba(250, 77, 0, 255);
        for step in 0..=100 {
            let color = point_between(start, end, f64::from(step) / 100.0);
            assert_eq!(color.g, 77);
            assert_eq!(color.a, 255);
        }
    }

    #[test]
    fn test_point_between_monotonic() {
        let start = Color::rgba(3, 250, 0, 17);
        let end = Color::rgba(252, 9, 255, 18);
        let mut previous = start;
        for step in 1..=1000 {
            let color = point_between(start, end, f64::from(step) / 1000.0);
            assert!(color.r >= previous.r);
            assert!(color.g <= previous.g);
            assert!(color.b >= previous.b);
            assert!(color.a >= previous.a);
            previous = color;
        }
    }

    #[test]
    fn test_identical_endpoints_never_drift() {
        let color = Color::rgba(254, 204, 213, 91);
        for behavior in BEHAVIORS {
            for cycle in [1, 7, 1000] {
                for t in [0, 1, 6, 499, 1000, 1999, 123_456, u32::MAX] {
                    assert_eq!(interpolate(color, color, cycle, t, behavior), color);
                }
            }
        }
    }

    #[test]
    fn test_zero_cycle_time_returns_error_color() {
        for behavior in BEHAVIORS {
            for t in [0, 1, 500, u32::MAX] {
                assert_eq!(interpolate(black(), white(), 0, t, behavior), ERROR_COLOR);
            }
            assert_eq!(
                try_interpolate(black(), white(), 0, 10, behavior),
                Err(LerpError::InvalidCycleTime { value: 0 })
            );
        }
    }

    #[test]
    fn test_cycle_scenario() {
        let run = |t| interpolate(black(), white(), 1000, t, LerpBehavior::Cycle);
        assert_eq!(run(0), black());
        assert_eq!(run(500), Color::rgb(127, 127, 127));
        assert_eq!(run(1000), black());
        assert_eq!(run(1500), Color::rgb(127, 127, 127));
    }

    #[test]
    fn test_cycle_periodic() {
        let start = Color::rgba(254, 204, 213, 255);
        let end = Color::rgba(7, 255, 255, 0);
        for t in (0..20_000).step_by(37) {
            assert_eq!(
                interpolate(start, end, 5000, t, LerpBehavior::Cycle),
                interpolate(start, end, 5000, t + 5000, LerpBehavior::Cycle)
            );
        }
    }

    #[test]
    fn test_ping_pong_scenario() {
        let run = |t| interpolate(black(), white(), 1000, t, LerpBehavior::PingPong);
        assert_eq!(run(0), black());
        assert_eq!(run(500), Color::rgb(127, 127, 127));
        assert_eq!(run(1000), white());
        assert_eq!(run(1500), Color::rgb(127, 127, 127));
        assert_eq!(run(2000), black());
    }

    #[test]
    fn test_ping_pong_half_period_symmetry() {
        let start = Color::rgba(254, 204, 213, 255);
        let end = Color::rgba(7, 255, 255, 100);
        for t in (0..12_000).step_by(41) {
            assert_eq!(
                interpolate(start, end, 3000, t, LerpBehavior::PingPong),
                interpolate(end, start, 3000, t + 3000, LerpBehavior::PingPong)
            );
            assert_eq!(
                interpolate(start, end, 3000, t, LerpBehavior::PingPong),
                interpolate(start, end, 3000, t + 6000, LerpBehavior::PingPong)
            );
        }
    }

    #[test]
    fn test_should_reverse() {
        assert!(!should_reverse(LerpBehavior::PingPong, ct(1000), 999));
        assert!(should_reverse(LerpBehavior::PingPong, ct(1000), 1000));
        assert!(should_reverse(LerpBehavior::PingPong, ct(1000), 1999));
        assert!(!should_reverse(LerpBehavior::PingPong, ct(1000), 2000));
        assert!(!should_reverse(LerpBehavior::Cycle, ct(1000), 1500));
    }

    #[test]
    fn test_should_reverse_large_cycle_no_overflow() {
        let huge = ct(u32::MAX);
        assert!(!should_reverse(LerpBehavior::PingPong, huge, u32::MAX - 1));
        assert!(should_reverse(LerpBehavior::PingPong, ct(u32::MAX / 2 + 1), u32::MAX));
    }

    #[test]
    fn test_once_ramp() {
        let run = |t| {
            interpolate_with(black(), white(), ct(1000), t, LerpBehavior::Once, OnceMode::Ramp)
        };
        assert_eq!(run(0), black());
        assert_eq!(run(500), Color::rgb(127, 127, 127));
        assert_eq!(run(1000), white());
        assert_eq!(run(u32::MAX), white());
        // 默认模式
        assert_eq!(interpolate(black(), white(), 1000, 250, LerpBehavior::Once).r, 63);
    }

    #[test]
    fn test_once_step() {
        let run = |t| {
            interpolate_with(black(), white(), ct(1000), t, LerpBehavior::Once, OnceMode::Step)
        };
        assert_eq!(run(0), black());
        assert_eq!(run(500), black());
        assert_eq!(run(999), black());
        assert_eq!(run(1000), white());
    }

    #[test]
    fn test_cycle_time_of_one() {
        // 周期为 1 时进度恒为 0
        for t in 0..10 {
            assert_eq!(interpolate(black(), white(), 1, t, LerpBehavior::Cycle), black());
        }
        assert_eq!(interpolate(black(), white(), 1, 0, LerpBehavior::PingPong), black());
        assert_eq!(interpolate(black(), white(), 1, 1, LerpBehavior::PingPong), white());
    }
}
