//! # FX Runtime
//!
//! 特效系统的核心运行时库：把插件定义的逻辑事件名（如 `game-start`）映射到
//! 紧凑的效果描述串，并在目标环境中的某个位置播放。
//!
//! ## 架构概述
//!
//! `fx-runtime` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它通过 [`EffectSink`] 与宿主层（Host）通信：
//!
//! ```text
//! 效果名
//!   → EffectCatalog.get_descriptor()   查缓存，未命中时解析
//!       → SpecParser.parse()           校验类型与参数名（ParameterRegistry）
//!   → EffectRenderer.render()          派生参数、解析名称、应用音量
//!       → EffectSink                   宿主实现的实际效果
//! ```
//!
//! ## 描述串示例
//!
//! ```text
//! explosion,power=2.0,fire=true
//! lightning
//! effect,name=smoke,data=4
//! sound,name=click,volume=0.5,pitch=1.2
//! firework,type=ball,color=ff0000 00ff00,fade=0000ff,flicker=true
//! ```
//!
//! ## 使用示例
//!
//! ```ignore
//! use fx_runtime::{EffectCatalog, EffectRenderer};
//!
//! let catalog = EffectCatalog::load("effects.json")?;
//! let renderer = EffectRenderer::new(sink);
//!
//! catalog.play_effect(&renderer, Some(&location), "game-start")?;
//! // 仅校验
//! catalog.play_effect(&renderer, None, "game-start")?;
//! ```
//!
//! ## 模块结构
//!
//! - [`registry`]：效果类型与参数表
//! - [`params`]：参数容器
//! - [`parser`]：描述串解析
//! - [`descriptor`]：已校验的效果描述
//! - [`catalog`]：效果目录与缓存
//! - [`renderer`]：参数派生与渲染端分发
//! - [`color`] / [`firework`]：烟花颜色与效果值
//! - [`diagnostic`]：目录静态检查
//! - [`config`]：目录配置
//! - [`error`]：错误类型定义

pub mod catalog;
pub mod color;
pub mod config;
pub mod descriptor;
pub mod diagnostic;
pub mod error;
pub mod firework;
pub mod params;
pub mod parser;
pub mod registry;
pub mod renderer;

// 重导出核心类型
pub use catalog::EffectCatalog;
pub use color::{Color, parse_colors};
pub use config::CatalogConfig;
pub use descriptor::EffectDescriptor;
pub use diagnostic::{Diagnostic, DiagnosticLevel, DiagnosticResult};
pub use error::{
    ConfigError, FxError, FxResult, RenderError, SinkError, SpecError, Vocabulary,
};
pub use firework::{FireworkEffect, FireworkShape};
pub use params::ParameterBag;
pub use parser::{SpecParser, parse_spec};
pub use registry::{EffectKind, ParameterRegistry, defaults};
pub use renderer::{EffectRenderer, EffectSink};
