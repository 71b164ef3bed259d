//! # Error 模块
//!
//! 定义 fx-runtime 中使用的错误类型。

use thiserror::Error;

use crate::registry::EffectKind;

/// 效果描述解析错误
///
/// 涵盖描述串本身的语法错误，以及派生参数时发现的取值错误。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    /// 描述串为空（通常意味着效果名未在配置中定义）
    #[error("效果描述为空（未知的效果名？）")]
    MissingSpec,

    /// 未知的效果类型
    #[error("未知的效果类型 '{kind}'")]
    UnknownKind { kind: String },

    /// 缺少必需参数
    #[error("{kind} 效果缺少必需参数 '{param}'")]
    MissingParameter { kind: EffectKind, param: String },

    /// 该效果类型不接受的参数名
    #[error("{kind} 效果不支持参数 '{param}'")]
    InvalidParameterName { kind: EffectKind, param: String },

    /// 颜色列表中的非法十六进制值
    #[error("无效的颜色值 '{token}'")]
    InvalidColorToken { token: String },

    /// 名称不在对应的词表中（特效名、音效名、烟花形状）
    #[error("未知的{vocabulary}名称 '{value}'")]
    UnknownEnumValue { vocabulary: Vocabulary, value: String },
}

/// 名称解析所用的词表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// 通用世界特效
    Effect,
    /// 音效
    Sound,
    /// 烟花形状
    FireworkShape,
}

impl std::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Effect => write!(f, "特效"),
            Self::Sound => write!(f, "音效"),
            Self::FireworkShape => write!(f, "烟花形状"),
        }
    }
}

/// 渲染端（Sink）报告的失败
#[derive(Error, Debug, Clone, PartialEq)]
#[error("渲染端错误: {message}")]
pub struct SinkError {
    pub message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 渲染错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// 参数派生失败
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// 渲染端失败（烟花以外的效果不做吞没）
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 读取文件失败
    #[error("读取效果配置失败: {path} - {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON 格式错误
    #[error("效果配置格式错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// fx-runtime 统一错误类型
#[derive(Error, Debug)]
pub enum FxError {
    /// 某个效果名解析或播放失败，附带效果名便于定位
    #[error("效果 '{name}': {source}")]
    Effect {
        name: String,
        #[source]
        source: RenderError,
    },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl FxError {
    /// 为错误附加效果名
    pub fn for_effect(name: impl Into<String>, source: impl Into<RenderError>) -> Self {
        Self::Effect {
            name: name.into(),
            source: source.into(),
        }
    }

    /// 若是解析类错误，返回底层的 [`SpecError`]
    pub fn spec_error(&self) -> Option<&SpecError> {
        match self {
            Self::Effect {
                source: RenderError::Spec(e),
                ..
            } => Some(e),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type FxResult<T> = Result<T, FxError>;
