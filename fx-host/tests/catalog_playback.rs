//! # 目录播放集成测试
//!
//! 测试 配置 → EffectCatalog → EffectRenderer → HeadlessSink 的执行链路。
//! 这些测试不依赖真实的渲染/音频设备。

use std::io::Write;

use fx_host::{HeadlessSink, Location, SinkEvent};
use fx_runtime::{
    CatalogConfig, ConfigError, DiagnosticLevel, EffectCatalog, EffectKind, EffectRenderer,
    FxError, RenderError, SpecError,
};

const CATALOG_JSON: &str = r#"{
    "volume": 0.8,
    "game-start": "sound,name=level_up",
    "click": "sound,name=click,volume=0.5",
    "explosion-trap": "explosion,power=2.0,fire=true",
    "thunder": "lightning",
    "smite": "lightning,power=1",
    "smoke": "effect,name=smoke,data=4",
    "game-won": "firework,type=ball,color=ff0000 00ff00,fade=0000ff,flicker=true"
}"#;

fn here() -> Location {
    Location::new("world", 10.0, 64.0, -5.0)
}

fn setup() -> (EffectCatalog, EffectRenderer<HeadlessSink>) {
    let config = CatalogConfig::from_json_str(CATALOG_JSON).unwrap();
    (
        EffectCatalog::from_config(config),
        EffectRenderer::new(HeadlessSink::new()),
    )
}

/// 从文件加载目录并完整校验
#[test]
fn test_load_from_file_and_validate() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();

    let catalog = EffectCatalog::load(file.path()).unwrap();
    let renderer = EffectRenderer::new(HeadlessSink::new());

    let result = catalog.validate_all(&renderer);
    assert!(result.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(catalog.cached_count(), 7);
    assert!(renderer.sink().events().is_empty());
}

/// 主音量作用于音效音量
#[test]
fn test_sound_volume_scaled_by_master_volume() {
    let (catalog, renderer) = setup();
    catalog
        .play_effect(&renderer, Some(&here()), "click")
        .unwrap();

    let events = renderer.sink().events();
    let [SinkEvent::PlaySound { sound, volume, pitch, .. }] = events.as_slice() else {
        panic!("Expected one sound event, got {:?}", events);
    };
    assert_eq!(sound, "click");
    assert!((volume - 0.4).abs() < 1e-6);
    assert_eq!(*pitch, 1.0);
}

/// 无位置时只校验，不调用渲染端
#[test]
fn test_validation_only_without_location() {
    let (catalog, renderer) = setup();
    catalog
        .play_effect(&renderer, None, "explosion-trap")
        .unwrap();

    assert!(renderer.sink().events().is_empty());
    assert_eq!(
        catalog.get_descriptor("explosion-trap").unwrap().kind(),
        EffectKind::Explosion
    );
}

/// 闪电按强度分发
#[test]
fn test_lightning_dispatch() {
    let (catalog, renderer) = setup();
    catalog.play_effect(&renderer, Some(&here()), "thunder").unwrap();
    catalog.play_effect(&renderer, Some(&here()), "smite").unwrap();

    let events = renderer.sink().take_events();
    assert!(matches!(events[0], SinkEvent::StrikeLightningCosmetic { .. }));
    assert!(matches!(events[1], SinkEvent::StrikeLightning { .. }));
}

/// 烟花颜色与渐变色
#[test]
fn test_firework_colors() {
    let (catalog, renderer) = setup();
    catalog.play_effect(&renderer, Some(&here()), "game-won").unwrap();

    let events = renderer.sink().events();
    let [SinkEvent::PlayFirework { shape, colors, fade_colors, flicker, trail, .. }] =
        events.as_slice()
    else {
        panic!("Expected one firework event, got {:?}", events);
    };
    assert_eq!(shape, "ball");
    assert_eq!(colors, &vec!["#ff0000".to_string(), "#00ff00".to_string()]);
    assert_eq!(fade_colors, &vec!["#0000ff".to_string()]);
    assert!(*flicker);
    assert!(!*trail);
}

/// 烟花在环境不支持的位置播放失败时不报错
#[test]
fn test_firework_failure_is_suppressed() {
    let (catalog, renderer) = setup();
    let void = Location::new("world", 0.0, -64.0, 0.0);

    catalog.play_effect(&renderer, Some(&void), "game-won").unwrap();
    assert!(renderer.sink().events().is_empty());
}

/// 其他效果的渲染端错误向上传播并附带效果名
#[test]
fn test_other_sink_failures_propagate() {
    let (catalog, renderer) = setup();
    let void = Location::new("world", 0.0, 300.0, 0.0);

    let err = catalog
        .play_effect(&renderer, Some(&void), "explosion-trap")
        .unwrap_err();
    assert!(matches!(
        &err,
        FxError::Effect { name, source: RenderError::Sink(_) } if name == "explosion-trap"
    ));
}

/// 损坏的配置文件以配置错误报告
#[test]
fn test_load_rejects_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ \"volume\": ").unwrap();

    let err = EffectCatalog::load(file.path()).err().unwrap();
    assert!(matches!(err, FxError::Config(ConfigError::Json(_))));
}

/// 描述错误在查询时报告
#[test]
fn test_invalid_specs_reported() {
    let config = CatalogConfig::default()
        .with_effect("bogus", "sound,bogus=1")
        .with_effect("shapeless", "firework,color=ff0000")
        .with_effect("weird", "earthquake")
        .with_effect("moo", "sound,name=moo")
        .with_effect("dropped", "sound,name=click,volume");
    let catalog = EffectCatalog::from_config(config);
    let renderer = EffectRenderer::new(HeadlessSink::new());

    assert!(matches!(
        catalog.get_descriptor("bogus").unwrap_err().spec_error(),
        Some(SpecError::InvalidParameterName { param, .. }) if param == "bogus"
    ));
    assert!(matches!(
        catalog.get_descriptor("shapeless").unwrap_err().spec_error(),
        Some(SpecError::MissingParameter { .. })
    ));
    assert!(
        catalog
            .get_descriptor("weird")
            .unwrap_err()
            .to_string()
            .contains("earthquake")
    );
    assert!(matches!(
        catalog.get_descriptor("undefined").unwrap_err().spec_error(),
        Some(SpecError::MissingSpec)
    ));

    let result = catalog.validate_all(&renderer);
    assert_eq!(result.error_count(), 4);
    assert_eq!(result.warn_count(), 1);

    let errors: Vec<&str> = result
        .filter_by_level(DiagnosticLevel::Error)
        .iter()
        .map(|d| d.effect.as_str())
        .collect();
    assert_eq!(errors, vec!["bogus", "moo", "shapeless", "weird"]);

    let warning = &result.filter_by_level(DiagnosticLevel::Warn)[0];
    assert_eq!(warning.effect, "dropped");
    assert!(warning.message.contains("volume"));
}

/// 并发播放不同与相同的效果
#[test]
fn test_concurrent_playback() {
    let (catalog, renderer) = setup();
    let names = ["click", "thunder", "smoke", "click", "game-won", "thunder"];

    std::thread::scope(|s| {
        for name in names {
            let catalog = &catalog;
            let renderer = &renderer;
            s.spawn(move || {
                catalog
                    .play_effect(renderer, Some(&here()), name)
                    .unwrap();
            });
        }
    });

    assert_eq!(renderer.sink().events().len(), names.len());
    assert_eq!(catalog.cached_count(), 4);
}
