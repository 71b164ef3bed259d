//! # Firework
//!
//! 烟花效果值。所有字段在构造时一次性确定，构造后不可变。

use std::str::FromStr;

use crate::color::{Color, parse_colors};
use crate::error::{SpecError, Vocabulary};
use crate::params::ParameterBag;
use crate::registry::{EffectKind, defaults};

/// 烟花形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireworkShape {
    /// 小球
    Ball,
    /// 大球
    BallLarge,
    /// 星形
    Star,
    /// 爆裂
    Burst,
    /// 苦力怕脸
    Creeper,
}

impl FireworkShape {
    pub const ALL: [FireworkShape; 5] = [
        FireworkShape::Ball,
        FireworkShape::BallLarge,
        FireworkShape::Star,
        FireworkShape::Burst,
        FireworkShape::Creeper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::BallLarge => "ball_large",
            Self::Star => "star",
            Self::Burst => "burst",
            Self::Creeper => "creeper",
        }
    }
}

impl std::fmt::Display for FireworkShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FireworkShape {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpecError::UnknownEnumValue {
                vocabulary: Vocabulary::FireworkShape,
                value: s.to_string(),
            })
    }
}

/// 烟花效果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireworkEffect {
    /// 形状
    pub shape: FireworkShape,
    /// 主颜色
    pub colors: Vec<Color>,
    /// 渐变目标颜色
    pub fade_colors: Vec<Color>,
    /// 是否闪烁
    pub flicker: bool,
    /// 是否拖尾
    pub trail: bool,
}

impl FireworkEffect {
    /// 从参数构造烟花效果
    ///
    /// `type` 是必需参数：没有形状的烟花没有意义，这与 effect/sound 缺少
    /// `name` 时静默跳过不同。
    pub fn from_params(params: &ParameterBag) -> Result<Self, SpecError> {
        let shape = params
            .get_str("type")
            .ok_or_else(|| SpecError::MissingParameter {
                kind: EffectKind::Firework,
                param: "type".to_string(),
            })?
            .parse::<FireworkShape>()?;

        let colors = match params.get_str("color") {
            Some(s) => parse_colors(s)?,
            None => Vec::new(),
        };
        let fade_colors = match params.get_str("fade") {
            Some(s) => parse_colors(s)?,
            None => Vec::new(),
        };

        Ok(Self {
            shape,
            colors,
            fade_colors,
            flicker: params.get_bool("flicker", defaults::FIREWORK_FLICKER),
            trail: params.get_bool("trail", defaults::FIREWORK_TRAIL),
        })
    }
}
