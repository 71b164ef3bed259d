//! # Headless Sink
//!
//! 无头渲染端：不产生真实画面与声音，把每次调用记录为 [`SinkEvent`]
//! 并输出结构化日志。用于命令行校验、调试与集成测试。
//!
//! 世界高度之外的位置被视为环境不支持，对应调用返回 [`SinkError`]。

use fx_runtime::{EffectSink, FireworkEffect, SinkError};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;

use crate::location::Location;
use crate::vocabulary::{SOUNDS, WORLD_EFFECTS, lookup};

/// 世界最低高度
pub const MIN_HEIGHT: f64 = 0.0;
/// 世界最高高度
pub const MAX_HEIGHT: f64 = 256.0;

/// 渲染端收到的一次调用
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SinkEvent {
    StrikeLightning {
        location: Location,
    },
    StrikeLightningCosmetic {
        location: Location,
    },
    CreateExplosion {
        location: Location,
        power: f32,
        fire: bool,
    },
    PlayGenericEffect {
        location: Location,
        effect: String,
        data: i32,
        radius: i32,
    },
    PlaySound {
        location: Location,
        sound: String,
        volume: f32,
        pitch: f32,
    },
    PlayFirework {
        location: Location,
        shape: String,
        colors: Vec<String>,
        fade_colors: Vec<String>,
        flicker: bool,
        trail: bool,
    },
}

/// 无头渲染端
#[derive(Debug, Default)]
pub struct HeadlessSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的调用（按发生顺序）
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    /// 取出并清空已记录的调用
    pub fn take_events(&self) -> Vec<SinkEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    fn check_height(location: &Location) -> Result<(), SinkError> {
        if (MIN_HEIGHT..MAX_HEIGHT).contains(&location.y) {
            Ok(())
        } else {
            Err(SinkError::new(format!(
                "位置 {location} 超出世界高度范围 [{MIN_HEIGHT}, {MAX_HEIGHT})"
            )))
        }
    }

    fn record(&self, location: &Location, event: SinkEvent) -> Result<(), SinkError> {
        Self::check_height(location)?;
        self.events.lock().push(event);
        Ok(())
    }
}

impl EffectSink for HeadlessSink {
    type Location = Location;
    type EffectId = &'static str;
    type SoundId = &'static str;

    fn resolve_effect(&self, name: &str) -> Option<Self::EffectId> {
        lookup(WORLD_EFFECTS, name)
    }

    fn resolve_sound(&self, name: &str) -> Option<Self::SoundId> {
        lookup(SOUNDS, name)
    }

    fn strike_lightning(&self, location: &Location) -> Result<(), SinkError> {
        info!(at = %location, "闪电（伤害）");
        self.record(
            location,
            SinkEvent::StrikeLightning {
                location: location.clone(),
            },
        )
    }

    fn strike_lightning_cosmetic(&self, location: &Location) -> Result<(), SinkError> {
        info!(at = %location, "闪电（视觉）");
        self.record(
            location,
            SinkEvent::StrikeLightningCosmetic {
                location: location.clone(),
            },
        )
    }

    fn create_explosion(&self, location: &Location, power: f32, fire: bool) -> Result<(), SinkError> {
        info!(at = %location, power, fire, "爆炸");
        self.record(
            location,
            SinkEvent::CreateExplosion {
                location: location.clone(),
                power,
                fire,
            },
        )
    }

    fn play_generic_effect(
        &self,
        location: &Location,
        effect: &&'static str,
        data: i32,
        radius: i32,
    ) -> Result<(), SinkError> {
        info!(at = %location, effect = *effect, data, radius, "世界特效");
        self.record(
            location,
            SinkEvent::PlayGenericEffect {
                location: location.clone(),
                effect: effect.to_string(),
                data,
                radius,
            },
        )
    }

    fn play_sound(
        &self,
        location: &Location,
        sound: &&'static str,
        volume: f32,
        pitch: f32,
    ) -> Result<(), SinkError> {
        info!(at = %location, sound = *sound, volume, pitch, "音效");
        self.record(
            location,
            SinkEvent::PlaySound {
                location: location.clone(),
                sound: sound.to_string(),
                volume,
                pitch,
            },
        )
    }

    fn play_firework(&self, location: &Location, firework: &FireworkEffect) -> Result<(), SinkError> {
        info!(
            at = %location,
            shape = %firework.shape,
            colors = firework.colors.len(),
            fade_colors = firework.fade_colors.len(),
            "烟花"
        );
        self.record(
            location,
            SinkEvent::PlayFirework {
                location: location.clone(),
                shape: firework.shape.to_string(),
                colors: firework.colors.iter().map(ToString::to_string).collect(),
                fade_colors: firework.fade_colors.iter().map(ToString::to_string).collect(),
                flicker: firework.flicker,
                trail: firework.trail,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let sink = HeadlessSink::new();
        let here = Location::new("world", 0.0, 64.0, 0.0);

        sink.strike_lightning_cosmetic(&here).unwrap();
        sink.create_explosion(&here, 2.0, true).unwrap();

        let events = sink.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SinkEvent::StrikeLightningCosmetic { .. }));
        assert!(matches!(
            events[1],
            SinkEvent::CreateExplosion { power, fire: true, .. } if power == 2.0
        ));
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_out_of_world_is_rejected() {
        let sink = HeadlessSink::new();
        let void = Location::new("world", 0.0, -10.0, 0.0);

        let err = sink.strike_lightning(&void).unwrap_err();
        assert!(err.message.contains("超出世界高度"));
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = SinkEvent::StrikeLightning {
            location: Location::new("world", 1.0, 2.0, 3.0),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["call"], "strike_lightning");
        assert_eq!(json["location"]["y"], 2.0);
    }
}
