//! # Config 模块
//!
//! 效果目录配置：效果名 → 描述串，外加可选的主音量。
//!
//! ```json
//! {
//!     "volume": 0.8,
//!     "game-start": "sound,name=level_up",
//!     "explosion-trap": "explosion,power=2,fire=true"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::registry::defaults;

/// 效果目录配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 主音量，作用于目录内所有音效
    #[serde(default = "default_master_volume")]
    pub volume: f32,

    /// 效果名 → 描述串
    #[serde(flatten)]
    pub effects: HashMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            volume: default_master_volume(),
            effects: HashMap::new(),
        }
    }
}

impl CatalogConfig {
    /// 从 JSON 文本解析
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// 添加一条效果定义
    pub fn with_effect(mut self, name: impl Into<String>, spec: impl Into<String>) -> Self {
        self.effects.insert(name.into(), spec.into());
        self
    }

    /// 设置主音量
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }
}

fn default_master_volume() -> f32 {
    defaults::MASTER_VOLUME
}
