//! # Effect Renderer
//!
//! 把 [`EffectDescriptor`] 转换为对渲染端的具体调用。
//!
//! ## 流程
//!
//! ```text
//! EffectDescriptor
//!   → 按 kind 分发，提取参数、填充默认值、解析名称
//!   → 位置存在时调用 EffectSink
//! ```
//!
//! 位置为 `None` 时只做校验：参数派生和名称解析照常执行，但不调用渲染端。

use crate::descriptor::EffectDescriptor;
use crate::error::{RenderError, SinkError, SpecError, Vocabulary};
use crate::firework::FireworkEffect;
use crate::registry::{EffectKind, defaults};

/// 渲染端能力接口
///
/// 由宿主环境实现。方法都接收 `&self`，同一个渲染端可以被并发回调共享；
/// 需要可变状态的实现自行使用内部可变性。
pub trait EffectSink {
    /// 环境中的坐标
    type Location;
    /// 通用特效标识
    type EffectId;
    /// 音效标识
    type SoundId;

    /// 解析特效名（大小写不敏感），未知名称返回 `None`
    fn resolve_effect(&self, name: &str) -> Option<Self::EffectId>;

    /// 解析音效名（大小写不敏感），未知名称返回 `None`
    fn resolve_sound(&self, name: &str) -> Option<Self::SoundId>;

    /// 有伤害的闪电
    fn strike_lightning(&self, location: &Self::Location) -> Result<(), SinkError>;

    /// 纯视觉闪电
    fn strike_lightning_cosmetic(&self, location: &Self::Location) -> Result<(), SinkError>;

    fn create_explosion(
        &self,
        location: &Self::Location,
        power: f32,
        fire: bool,
    ) -> Result<(), SinkError>;

    fn play_generic_effect(
        &self,
        location: &Self::Location,
        effect: &Self::EffectId,
        data: i32,
        radius: i32,
    ) -> Result<(), SinkError>;

    fn play_sound(
        &self,
        location: &Self::Location,
        sound: &Self::SoundId,
        volume: f32,
        pitch: f32,
    ) -> Result<(), SinkError>;

    fn play_firework(
        &self,
        location: &Self::Location,
        firework: &FireworkEffect,
    ) -> Result<(), SinkError>;
}

/// 效果渲染器
pub struct EffectRenderer<S> {
    sink: S,
}

impl<S: EffectSink> EffectRenderer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// 渲染端
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 在指定位置渲染效果
    ///
    /// 烟花播放失败只记录警告，不向上传播；其他渲染端错误原样返回。
    pub fn render(
        &self,
        descriptor: &EffectDescriptor,
        location: Option<&S::Location>,
    ) -> Result<(), RenderError> {
        let params = descriptor.params();

        match descriptor.kind() {
            EffectKind::Lightning => {
                let power = params.get_int("power", defaults::LIGHTNING_POWER);
                if let Some(loc) = location {
                    if power > 0 {
                        self.sink.strike_lightning(loc)?;
                    } else {
                        self.sink.strike_lightning_cosmetic(loc)?;
                    }
                }
            }

            EffectKind::Explosion => {
                let power = params.get_float("power", defaults::EXPLOSION_POWER);
                let fire = params.get_bool("fire", defaults::EXPLOSION_FIRE);
                if let Some(loc) = location {
                    self.sink.create_explosion(loc, power, fire)?;
                }
            }

            EffectKind::Effect => {
                let Some(name) = params.get_str("name").filter(|n| !n.is_empty()) else {
                    return Ok(());
                };
                let effect = self.sink.resolve_effect(name).ok_or_else(|| {
                    SpecError::UnknownEnumValue {
                        vocabulary: Vocabulary::Effect,
                        value: name.to_string(),
                    }
                })?;
                let data = params.get_int("data", defaults::EFFECT_DATA);
                let radius = params.get_int("radius", defaults::EFFECT_RADIUS);
                if let Some(loc) = location {
                    self.sink.play_generic_effect(loc, &effect, data, radius)?;
                }
            }

            EffectKind::Sound => {
                let Some(name) = params.get_str("name").filter(|n| !n.is_empty()) else {
                    return Ok(());
                };
                let sound = self.sink.resolve_sound(name).ok_or_else(|| {
                    SpecError::UnknownEnumValue {
                        vocabulary: Vocabulary::Sound,
                        value: name.to_string(),
                    }
                })?;
                let volume = params.get_float("volume", defaults::SOUND_VOLUME)
                    * descriptor.volume_multiplier();
                let pitch = params.get_float("pitch", defaults::SOUND_PITCH);
                if let Some(loc) = location {
                    self.sink.play_sound(loc, &sound, volume, pitch)?;
                }
            }

            EffectKind::Firework => {
                let firework = FireworkEffect::from_params(params)?;
                if let Some(loc) = location
                    && let Err(e) = self.sink.play_firework(loc, &firework)
                {
                    tracing::warn!(error = %e, shape = %firework.shape, "无法播放烟花效果");
                }
            }
        }

        if location.is_some() {
            tracing::debug!(kind = %descriptor.kind(), spec = %descriptor.source(), "效果已播放");
        }
        Ok(())
    }
}
