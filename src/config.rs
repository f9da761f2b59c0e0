//! 转换器配置

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 遇到模式里没有声明的属性时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPropertyPolicy {
    /// 忽略（debug 日志）
    #[default]
    Ignore,
    /// 忽略并输出 warn 日志
    Warn,
    /// 视为不匹配
    Reject,
}

/// 转换器配置，对应 JSON：
///
/// ```json
/// { "unknownProperties": "warn", "clampValues": true }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConverterConfig {
    #[serde(default)]
    pub unknown_properties: UnknownPropertyPolicy,
    /// 超出 [min, max] 的 value 是钳制（true）还是报错（false）
    #[serde(default = "default_clamp_values")]
    pub clamp_values: bool,
}

fn default_clamp_values() -> bool { true }

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            unknown_properties: UnknownPropertyPolicy::default(),
            clamp_values: default_clamp_values(),
        }
    }
}

impl ConverterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从配置文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn with_unknown_properties(mut self, policy: UnknownPropertyPolicy) -> Self {
        self.unknown_properties = policy;
        self
    }

    pub fn with_clamp_values(mut self, clamp: bool) -> Self {
        self.clamp_values = clamp;
        self
    }
}
