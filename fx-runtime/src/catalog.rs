//! # Effect Catalog
//!
//! 效果名 → 描述串的目录，按需解析并缓存 [`EffectDescriptor`]。
//!
//! ## 缓存语义
//!
//! - 首次解析成功后写入缓存，之后同名查询直接返回同一个 `Arc`
//! - 解析失败**不**缓存：每次查询都会重新解析并再次失败
//! - 不同名称并发解析互不阻塞（解析在锁外进行）；同名并发解析时先写入者保留，
//!   后到者丢弃自己的结果并返回已缓存的描述

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::descriptor::EffectDescriptor;
use crate::diagnostic::{Diagnostic, DiagnosticResult};
use crate::error::{FxError, FxResult};
use crate::parser::SpecParser;
use crate::registry::{EffectKind, defaults};
use crate::renderer::{EffectRenderer, EffectSink};

/// 效果目录
pub struct EffectCatalog {
    /// 效果名 → 原始描述串（构造后只读）
    raw_specs: HashMap<String, String>,
    /// 主音量（构造时确定）
    master_volume: f32,
    /// 已解析的描述
    cache: RwLock<HashMap<String, Arc<EffectDescriptor>>>,
}

impl EffectCatalog {
    /// 创建目录
    pub fn new(raw_specs: HashMap<String, String>, master_volume: f32) -> Self {
        Self {
            raw_specs,
            master_volume,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// 从配置创建目录
    pub fn from_config(config: CatalogConfig) -> Self {
        Self::new(config.effects, config.volume)
    }

    /// 从 JSON 配置文件加载目录
    pub fn load(path: impl AsRef<Path>) -> FxResult<Self> {
        let config = CatalogConfig::load(path)?;
        Ok(Self::from_config(config))
    }

    /// 主音量
    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// 是否定义了该效果名
    pub fn contains(&self, name: &str) -> bool {
        self.raw_specs.contains_key(name)
    }

    /// 所有效果名（已排序）
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.raw_specs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 原始描述串
    pub fn raw_spec(&self, name: &str) -> Option<&str> {
        self.raw_specs.get(name).map(String::as_str)
    }

    /// 已缓存的描述数量
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    /// 清空缓存，之后的查询会重新解析
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// 获取效果描述，首次查询时解析并缓存
    ///
    /// 未定义的效果名和非法描述都返回带效果名的 [`FxError::Effect`]。
    pub fn get_descriptor(&self, name: &str) -> FxResult<Arc<EffectDescriptor>> {
        if let Some(descriptor) = self.cache.read().get(name) {
            return Ok(Arc::clone(descriptor));
        }

        let mut parser = SpecParser::new();
        let descriptor = self.parse_uncached(&mut parser, name)?;
        Ok(self.insert(name, descriptor))
    }

    /// 在指定位置播放效果
    ///
    /// `location` 为 `None` 时只做完整校验，不产生任何可见效果。
    pub fn play_effect<S: EffectSink>(
        &self,
        renderer: &EffectRenderer<S>,
        location: Option<&S::Location>,
        name: &str,
    ) -> FxResult<()> {
        let descriptor = self.get_descriptor(name)?;
        renderer
            .render(&descriptor, location)
            .map_err(|e| FxError::for_effect(name, e))
    }

    /// 校验目录中的所有效果
    ///
    /// 每个无法解析或无法渲染（如音效名不在渲染端词表中）的效果产生一条错误，
    /// 每个被丢弃的参数产生一条警告，未指定 `name` 的特效/音效产生一条提示。
    /// 校验通过的描述会写入缓存。
    pub fn validate_all<S: EffectSink>(&self, renderer: &EffectRenderer<S>) -> DiagnosticResult {
        let mut result = DiagnosticResult::new();
        let mut parser = SpecParser::new();

        for name in self.names() {
            let raw = self.raw_spec(name).unwrap_or_default();
            let outcome = self.parse_uncached(&mut parser, name);

            for warning in parser.warnings() {
                result.push(Diagnostic::warn(name, warning.as_str()).with_detail(raw));
            }

            let checked = outcome.and_then(|descriptor| {
                renderer
                    .render(&descriptor, None)
                    .map_err(|e| FxError::for_effect(name, e))?;
                Ok(descriptor)
            });

            match checked {
                Ok(descriptor) => {
                    if is_silent(&descriptor) {
                        result.push(
                            Diagnostic::info(name, "未指定 name，播放时不会产生任何效果")
                                .with_detail(raw),
                        );
                    }
                    self.insert(name, descriptor);
                }
                Err(FxError::Effect { source, .. }) => {
                    result.push(Diagnostic::error(name, source.to_string()).with_detail(raw));
                }
                Err(e) => {
                    result.push(Diagnostic::error(name, e.to_string()));
                }
            }
        }

        result
    }

    fn parse_uncached(&self, parser: &mut SpecParser, name: &str) -> FxResult<EffectDescriptor> {
        let _span = tracing::warn_span!("resolve", effect = %name).entered();
        parser
            .parse(self.raw_spec(name), self.master_volume)
            .map_err(|e| FxError::for_effect(name, e))
    }

    fn insert(&self, name: &str, descriptor: EffectDescriptor) -> Arc<EffectDescriptor> {
        let mut cache = self.cache.write();
        let entry = cache
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(effect = %name, kind = %descriptor.kind(), "效果描述已缓存");
                Arc::new(descriptor)
            });
        Arc::clone(entry)
    }
}

/// 特效/音效缺少名称时渲染为空操作
fn is_silent(descriptor: &EffectDescriptor) -> bool {
    matches!(descriptor.kind(), EffectKind::Effect | EffectKind::Sound)
        && descriptor
            .params()
            .get_str("name")
            .is_none_or(str::is_empty)
}

impl Default for EffectCatalog {
    fn default() -> Self {
        Self::new(HashMap::new(), defaults::MASTER_VOLUME)
    }
}

impl From<CatalogConfig> for EffectCatalog {
    fn from(config: CatalogConfig) -> Self {
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticLevel;
    use crate::error::{ConfigError, RenderError, SinkError, SpecError};
    use crate::firework::FireworkEffect;
    use parking_lot::Mutex;

    /// 只认识 `click` 的静默渲染端
    struct Quiet;

    impl EffectSink for Quiet {
        type Location = ();
        type EffectId = ();
        type SoundId = ();

        fn resolve_effect(&self, _: &str) -> Option<()> {
            None
        }

        fn resolve_sound(&self, name: &str) -> Option<()> {
            (name == "click").then_some(())
        }

        fn strike_lightning(&self, _: &()) -> Result<(), SinkError> {
            Ok(())
        }

        fn strike_lightning_cosmetic(&self, _: &()) -> Result<(), SinkError> {
            Ok(())
        }

        fn create_explosion(&self, _: &(), _: f32, _: bool) -> Result<(), SinkError> {
            Ok(())
        }

        fn play_generic_effect(&self, _: &(), _: &(), _: i32, _: i32) -> Result<(), SinkError> {
            Ok(())
        }

        fn play_sound(&self, _: &(), _: &(), _: f32, _: f32) -> Result<(), SinkError> {
            Ok(())
        }

        fn play_firework(&self, _: &(), _: &FireworkEffect) -> Result<(), SinkError> {
            Ok(())
        }
    }

    /// 收集日志输出
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn catalog(volume: f32, entries: &[(&str, &str)]) -> EffectCatalog {
        let specs = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EffectCatalog::new(specs, volume)
    }

    #[test]
    fn test_get_descriptor_is_cached() {
        let c = catalog(1.0, &[("start", "sound,name=click")]);
        assert_eq!(c.cached_count(), 0);

        let first = c.get_descriptor("start").unwrap();
        let second = c.get_descriptor("start").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(c.cached_count(), 1);
        assert_eq!(first.kind(), EffectKind::Sound);
    }

    #[test]
    fn test_unknown_name_error_carries_name() {
        let c = catalog(1.0, &[]);
        let err = c.get_descriptor("missing").unwrap_err();

        assert_eq!(err.spec_error(), Some(&SpecError::MissingSpec));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_failures_are_not_cached() {
        let c = catalog(1.0, &[("bad", "sound,bogus=1")]);

        for _ in 0..2 {
            let err = c.get_descriptor("bad").unwrap_err();
            assert!(matches!(
                err,
                FxError::Effect {
                    source: RenderError::Spec(SpecError::InvalidParameterName { .. }),
                    ..
                }
            ));
        }
        assert_eq!(c.cached_count(), 0);
    }

    #[test]
    fn test_master_volume_is_applied() {
        let c = catalog(0.8, &[("click", "sound,name=click,volume=0.5")]);
        assert_eq!(c.get_descriptor("click").unwrap().volume_multiplier(), 0.8);
    }

    #[test]
    fn test_clear_cache_forces_reparse() {
        let c = catalog(1.0, &[("boom", "explosion,power=2")]);
        let first = c.get_descriptor("boom").unwrap();
        c.clear_cache();
        assert_eq!(c.cached_count(), 0);

        let second = c.get_descriptor("boom").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_names_sorted() {
        let c = catalog(1.0, &[("b", "lightning"), ("a", "lightning"), ("c", "lightning")]);
        assert_eq!(c.names(), vec!["a", "b", "c"]);
        assert!(c.contains("a"));
        assert!(!c.contains("volume"));
    }

    #[test]
    fn test_from_config() {
        let config = CatalogConfig::default()
            .with_volume(0.25)
            .with_effect("win", "firework,type=star");
        let c = EffectCatalog::from(config);
        assert_eq!(c.master_volume(), 0.25);
        assert_eq!(c.raw_spec("win"), Some("firework,type=star"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = EffectCatalog::load("/nonexistent/effects.json")
            .err()
            .unwrap();
        assert!(matches!(err, FxError::Config(ConfigError::Io { .. })));
        assert_eq!(err.spec_error(), None);
    }

    #[test]
    fn test_validate_all_notes_nameless_effects() {
        let c = catalog(
            1.0,
            &[
                ("mute", "sound,volume=0.5"),
                ("blank", "effect,name="),
                ("click", "sound,name=click"),
                ("boom", "explosion"),
            ],
        );
        let result = c.validate_all(&EffectRenderer::new(Quiet));

        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warn_count(), 0);
        let infos: Vec<&str> = result
            .diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Info)
            .map(|d| d.effect.as_str())
            .collect();
        assert_eq!(infos, vec!["blank", "mute"]);
        assert_eq!(c.cached_count(), 4);
    }

    #[test]
    fn test_parse_warnings_are_logged_with_effect_name() {
        let c = catalog(1.0, &[("dropped", "sound,name=click,volume")]);
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            c.get_descriptor("dropped").unwrap();
        });

        let output = String::from_utf8(captured.0.lock().clone()).unwrap();
        assert!(output.contains("effect=dropped"), "{output}");
        assert!(output.contains("volume"), "{output}");
    }

    #[test]
    fn test_concurrent_resolution_is_consistent() {
        let c = Arc::new(catalog(
            1.0,
            &[("a", "lightning,power=1"), ("b", "explosion,power=3")],
        ));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let c = Arc::clone(&c);
                std::thread::spawn(move || {
                    let name = if i % 2 == 0 { "a" } else { "b" };
                    c.get_descriptor(name).unwrap()
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(c.cached_count(), 2);

        let cached_a = c.get_descriptor("a").unwrap();
        for (i, d) in results.iter().enumerate() {
            if i % 2 == 0 {
                assert!(Arc::ptr_eq(d, &cached_a));
            }
        }
    }
}
