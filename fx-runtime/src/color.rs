//! # 颜色解析
//!
//! 烟花颜色列表：以单个空格分隔的十六进制 RGB 值，如 `ff0000 00ff00`。

use crate::error::SpecError;

/// 打包的 24 位 RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// 最大合法值
    pub const MAX_RGB: u32 = 0x00ff_ffff;

    /// 从打包的 RGB 值创建，超出 24 位时返回 `None`
    pub fn from_rgb(rgb: u32) -> Option<Self> {
        (rgb <= Self::MAX_RGB).then_some(Self(rgb))
    }

    pub fn rgb(&self) -> u32 {
        self.0
    }

    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.0 as u8
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// 解析颜色列表
///
/// 空串返回空列表；顺序与输入一致（渐变时顺序有意义）。
/// 任一项不是十六进制或超出 `ffffff` 时返回 [`SpecError::InvalidColorToken`]。
pub fn parse_colors(s: &str) -> Result<Vec<Color>, SpecError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(' ').map(parse_color_token).collect()
}

fn parse_color_token(token: &str) -> Result<Color, SpecError> {
    let invalid = || SpecError::InvalidColorToken {
        token: token.to_string(),
    };
    // from_str_radix 接受前导 '+'，这里不接受
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let rgb = u32::from_str_radix(token, 16).map_err(|_| invalid())?;
    Color::from_rgb(rgb).ok_or_else(invalid)
}
