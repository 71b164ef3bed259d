//! # Parser 模块
//!
//! 效果描述串解析器（手写，无 regex 依赖）。
//!
//! ## 语法
//!
//! ```text
//! spec  = kind *("," param)
//! kind  = "explosion" / "lightning" / "effect" / "sound" / "firework"
//! param = key ["=" value]
//! ```
//!
//! 整串大小写不敏感，解析前统一转为小写。
//!
//! ## 容错
//!
//! - 缺少 `=value` 的参数被丢弃并记录警告，解析继续
//! - 空字段（如末尾多余的逗号）直接跳过
//! - 其余错误（未知类型、非法参数名、烟花缺少形状等）立即返回


use crate::descriptor::EffectDescriptor;
use crate::error::SpecError;
use crate::firework::FireworkEffect;
use crate::params::ParameterBag;
use crate::registry::{EffectKind, ParameterRegistry};

/// 效果描述解析器
pub struct SpecParser {
    registry: &'static ParameterRegistry,
    /// 最近一次解析产生的警告
    warnings: Vec<String>,
}

impl SpecParser {
    /// 使用全局参数表创建解析器
    pub fn new() -> Self {
        Self {
            registry: ParameterRegistry::global(),
            warnings: Vec::new(),
        }
    }

    /// 解析效果描述串
    ///
    /// # 参数
    ///
    /// - `spec`: 描述串；`None` 表示配置中没有该效果名
    /// - `volume_multiplier`: 写入描述的音量倍率
    pub fn parse(
        &mut self,
        spec: Option<&str>,
        volume_multiplier: f32,
    ) -> Result<EffectDescriptor, SpecError> {
        self.warnings.clear();

        let spec = match spec {
            Some(s) if !s.trim().is_empty() => s.to_lowercase(),
            _ => return Err(SpecError::MissingSpec),
        };

        let mut fields = spec.split(',');
        let kind: EffectKind = fields.next().unwrap_or_default().trim().parse()?;

        let mut params = ParameterBag::new();
        for field in fields {
            if field.trim().is_empty() {
                continue;
            }

            let Some((key, value)) = field.split_once('=') else {
                let warning = format!("参数 '{}' 缺少取值，已忽略", field.trim());
                tracing::warn!(spec = %spec, "{warning}");
                self.warnings.push(warning);
                continue;
            };

            let key = key.trim();
            if !self.registry.is_valid(kind, key) {
                return Err(SpecError::InvalidParameterName {
                    kind,
                    param: key.to_string(),
                });
            }
            params.insert(key, value.trim());
        }

        // 烟花的形状和颜色不依赖渲染端，在解析期就能完整校验
        if kind == EffectKind::Firework {
            FireworkEffect::from_params(&params)?;
        }

        Ok(EffectDescriptor::new(kind, params, volume_multiplier, spec))
    }

    /// 获取最近一次解析的警告
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Default for SpecParser {
    fn default() -> Self {
        Self::new()
    }
}

/// 使用新的解析器解析描述串（丢弃警告）
pub fn parse_spec(spec: &str, volume_multiplier: f32) -> Result<EffectDescriptor, SpecError> {
    SpecParser::new().parse(Some(spec), volume_multiplier)
}
