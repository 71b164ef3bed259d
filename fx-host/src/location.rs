//! # Location
//!
//! 无头环境中的坐标：世界名 + 三维坐标。

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// 默认世界名
pub const DEFAULT_WORLD: &str = "world";

/// 坐标解析错误
#[derive(Error, Debug, Clone, PartialEq)]
#[error("无效的坐标 '{input}'，应为 x,y,z 或 world@x,y,z")]
pub struct LocationParseError {
    input: String,
}

/// 世界中的一个位置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{},{},{}", self.world, self.x, self.y, self.z)
    }
}

impl FromStr for Location {
    type Err = LocationParseError;

    /// 解析 `x,y,z` 或 `world@x,y,z`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || LocationParseError {
            input: s.to_string(),
        };

        let (world, coords) = match s.split_once('@') {
            Some((world, coords)) if !world.trim().is_empty() => (world.trim(), coords),
            Some(_) => return Err(err()),
            None => (DEFAULT_WORLD, s),
        };

        let parts: Vec<f64> = coords
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| err())?;

        match parts.as_slice() {
            [x, y, z] => Ok(Self::new(world, *x, *y, *z)),
            _ => Err(err()),
        }
    }
}
