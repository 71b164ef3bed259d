//! # Effect Descriptor
//!
//! 已校验的效果描述：类型 + 参数 + 音量倍率。
//! 由 [`SpecParser`](crate::parser::SpecParser) 构造，构造后不可变。

use serde::Serialize;

use crate::params::ParameterBag;
use crate::registry::EffectKind;

/// 效果描述
///
/// `volume_multiplier` 来自构造时所属目录的主音量，之后不再变化。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectDescriptor {
    kind: EffectKind,
    params: ParameterBag,
    volume_multiplier: f32,
    /// 规范化（小写）后的原始描述串
    source: String,
}

impl EffectDescriptor {
    pub(crate) fn new(
        kind: EffectKind,
        params: ParameterBag,
        volume_multiplier: f32,
        source: String,
    ) -> Self {
        Self {
            kind,
            params,
            volume_multiplier,
            source,
        }
    }

    /// 效果类型
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// 效果参数
    pub fn params(&self) -> &ParameterBag {
        &self.params
    }

    /// 音量倍率
    pub fn volume_multiplier(&self) -> f32 {
        self.volume_multiplier
    }

    /// 规范化后的描述串
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for EffectDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for (key, value) in self.params.iter() {
            write!(f, ",{key}={value}")?;
        }
        Ok(())
    }
}
