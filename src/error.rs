//! 错误类型

use crate::nodes::NodeKind;
use thiserror::Error;

/// 转换结果
pub type ConvertResult<T> = std::result::Result<T, ShapeMismatch>;

/// 库级结果
pub type Result<T> = std::result::Result<T, Error>;

/// 属性不匹配的具体原因
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MismatchReason {
    #[error("expected a property map, found {0}")]
    NotAMapping(&'static str),

    #[error("missing required property")]
    MissingRequired,

    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value out of range: {0}")]
    OutOfRange(String),

    #[error("unknown property")]
    UnknownProperty,
}

/// 动态值不符合节点的属性模式
///
/// 这是转换操作唯一会返回的错误。`property` 为出错属性的路径
/// （如 `boundsSize.wrap`、`itemPadding[1].padding`），整体不匹配时为 `None`。
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}{}: {reason}", property_suffix(.property))]
pub struct ShapeMismatch {
    pub kind: NodeKind,
    pub property: Option<String>,
    pub reason: MismatchReason,
}

impl ShapeMismatch {
    pub fn new(kind: NodeKind, property: Option<String>, reason: MismatchReason) -> Self {
        Self { kind, property, reason }
    }

    /// 整个输入不是映射
    pub fn not_a_mapping(kind: NodeKind, found: &'static str) -> Self {
        Self::new(kind, None, MismatchReason::NotAMapping(found))
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }
}

fn property_suffix(property: &Option<String>) -> String {
    match property {
        Some(p) => format!(".{}", p),
        None => String::new(),
    }
}

/// 场景读取、配置加载等外围操作的错误
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeMismatch),

    #[error("element {path}: {source}")]
    InElement {
        path: String,
        source: ShapeMismatch,
    },

    #[error("element {path}: unknown element type `{name}`")]
    UnknownElement { path: String, name: String },

    #[error("element {path}: {detail}")]
    InvalidElement { path: String, detail: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
