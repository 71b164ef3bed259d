//! # Effect Registry
//!
//! 效果类型定义与各类型允许的参数名。
//! 这是所有效果类型名称、参数名、默认值的**唯一来源**。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SpecError;

/// 效果类型
///
/// 封闭集合，运行期不会扩展。新增类型时所有分发点的 `match` 都会编译失败，
/// 直到补齐处理分支。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// 爆炸
    Explosion,
    /// 闪电（有伤害或纯视觉）
    Lightning,
    /// 通用世界特效
    Effect,
    /// 音效
    Sound,
    /// 烟花
    Firework,
}

impl EffectKind {
    /// 所有效果类型
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Explosion,
        EffectKind::Lightning,
        EffectKind::Effect,
        EffectKind::Sound,
        EffectKind::Firework,
    ];

    /// 描述串中使用的小写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explosion => "explosion",
            Self::Lightning => "lightning",
            Self::Effect => "effect",
            Self::Sound => "sound",
            Self::Firework => "firework",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = SpecError;

    /// 大小写不敏感的精确匹配
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpecError::UnknownKind {
                kind: s.to_string(),
            })
    }
}

/// 参数名校验表
///
/// | 类型 | 允许的参数 |
/// |------|-----------|
/// | `explosion` | power, fire |
/// | `lightning` | power |
/// | `effect` | name, data, radius |
/// | `sound` | name, volume, pitch |
/// | `firework` | type, color, fade, flicker, trail |
///
/// 表是字面量，构造后不可变，并发读取无需同步。
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterRegistry;

impl ParameterRegistry {
    /// 获取全局注册表
    pub fn global() -> &'static ParameterRegistry {
        static REGISTRY: ParameterRegistry = ParameterRegistry;
        &REGISTRY
    }

    /// 指定类型允许的参数名
    pub fn allowed_params(&self, kind: EffectKind) -> &'static [&'static str] {
        match kind {
            EffectKind::Explosion => &["power", "fire"],
            EffectKind::Lightning => &["power"],
            EffectKind::Effect => &["name", "data", "radius"],
            EffectKind::Sound => &["name", "volume", "pitch"],
            EffectKind::Firework => &["type", "color", "fade", "flicker", "trail"],
        }
    }

    /// 参数名对该类型是否合法
    pub fn is_valid(&self, kind: EffectKind, name: &str) -> bool {
        self.allowed_params(kind).contains(&name)
    }
}

/// 各效果参数的默认值
///
/// 任何需要默认值的地方都应使用这些常量，而非硬编码数字。
pub mod defaults {
    /// 闪电强度，`> 0` 时为有伤害的闪电
    pub const LIGHTNING_POWER: i32 = 0;
    /// 爆炸强度
    pub const EXPLOSION_POWER: f32 = 0.0;
    /// 爆炸是否引燃
    pub const EXPLOSION_FIRE: bool = false;
    /// 通用特效附加数据
    pub const EFFECT_DATA: i32 = 0;
    /// 通用特效可见半径
    pub const EFFECT_RADIUS: i32 = 64;
    /// 音效音量（乘以目录主音量之前）
    pub const SOUND_VOLUME: f32 = 1.0;
    /// 音效音高
    pub const SOUND_PITCH: f32 = 1.0;
    /// 烟花闪烁
    pub const FIREWORK_FLICKER: bool = false;
    /// 烟花拖尾
    pub const FIREWORK_TRAIL: bool = false;
    /// 目录主音量
    pub const MASTER_VOLUME: f32 = 1.0;
}
