//! # Parameter Bag
//!
//! 效果参数容器：参数名 → 原始字符串值。
//! 只有解析器可以插入（键已通过注册表校验），外部只读。

use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// 效果参数
///
/// 键与值在插入前都已转为小写。取值时按需转换类型，
/// 无法转换的值回退到默认值并记录警告。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterBag {
    values: BTreeMap<String, String>,
}

impl ParameterBag {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 插入参数（同名参数后者覆盖前者）
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// 是否包含参数
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// 获取原始字符串值
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 获取整数参数
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.get_parsed(key, default, |_| true)
    }

    /// 获取浮点参数
    ///
    /// `inf` / `nan` 等非有限值视为无法转换。
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        self.get_parsed(key, default, |v| v.is_finite())
    }

    /// 获取布尔参数（`true` / `false`）
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_parsed(key, default, |_| true)
    }

    /// 参数个数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 按参数名顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn get_parsed<T>(&self, key: &str, default: T, accept: impl Fn(&T) -> bool) -> T
    where
        T: FromStr + Copy + std::fmt::Debug,
    {
        let Some(raw) = self.values.get(key) else {
            return default;
        };
        match raw.parse::<T>() {
            Ok(value) if accept(&value) => value,
            _ => {
                tracing::warn!(
                    param = %key,
                    value = %raw,
                    default = ?default,
                    "参数值无法转换，使用默认值"
                );
                default
            }
        }
    }
}
