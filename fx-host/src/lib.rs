//! # FX Host
//!
//! 特效系统的无头宿主层。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 加载效果目录配置
//! - 提供 [`HeadlessSink`]：特效/音效词表与调用记录
//! - 命令行入口（见 `main.rs`）
//!
//! Host 层不包含描述串的解析逻辑，只实现 `fx_runtime::EffectSink`。

pub mod location;
pub mod sink;
pub mod vocabulary;

pub use location::{DEFAULT_WORLD, Location, LocationParseError};
pub use sink::{HeadlessSink, SinkEvent};
