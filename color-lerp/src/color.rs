//! # Color 模块
//!
//! 8 位 RGBA 颜色值类型。

use crate::error::{LerpError, LerpResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA 颜色（每个通道 0-255）
///
/// 值类型，按通道比较相等。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 透明度，配置中省略时为 255（不透明）
    #[serde(default = "opaque")]
    pub a: u8,
}

/// 周期时长无效时返回的哨兵颜色（不透明红）
pub const ERROR_COLOR: Color = Color::rgba(255, 0, 0, 255);

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// 创建颜色
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 创建不透明颜色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// 通道数组，顺序为 `[r, g, b, a]`
    pub fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 从通道数组构造
    pub fn from_channels([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }

    /// 解析十六进制颜色
    ///
    /// 支持 `#rrggbb` 和 `#rrggbbaa`，`#` 可省略。省略透明度时为 255。
    pub fn from_hex(input: &str) -> LerpResult<Self> {
        let invalid = |message: &str| LerpError::InvalidColor {
            input: input.to_string(),
            message: message.to_string(),
        };

        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("只允许十六进制字符"));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(invalid("长度必须是 6 或 8 个十六进制字符"));
        }

        let mut channels = [255u8; 4];
        for (i, channel) in channels.iter_mut().enumerate().take(hex.len() / 2) {
            *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| invalid("只允许十六进制字符"))?;
        }

        Ok(Self::from_channels(channels))
    }

    /// 格式化为 `#rrggbbaa`
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.channels();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = LerpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
