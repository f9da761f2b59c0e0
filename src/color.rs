//! 颜色模块

use serde::Serialize;

/// RGBA 颜色
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// 从 0..1 浮点分量构建（脚本层的颜色格式），超出范围的分量会被钳制
    pub fn from_floats(r: f32, g: f32, b: f32, a: f32) -> Self {
        #[inline]
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(channel(r), channel(g), channel(b), channel(a))
    }

    /// 解析十六进制颜色字符串：#RGB / #RRGGBB / #RRGGBBAA
    pub fn parse_hex(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#')?;
        // 只接受十六进制数字（from_str_radix 允许前导 '+'）
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 => {
                let r = byte(0..1)? * 17;
                let g = byte(1..2)? * 17;
                let b = byte(2..3)? * 17;
                Some(Color::rgb(r, g, b))
            }
            6 => Some(Color::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Some(Color::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => None,
        }
    }

    // 预定义颜色
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(153, 153, 153);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
