//! 节点属性模式
//!
//! 每种节点声明自己的字段表（名称、类型、是否必填），默认值由节点的
//! `Default` 实现给出。转换前先按模式统一检查：输入形状、必填项、
//! 未知属性、值类型。

use super::{ConvertMode, NodeKind};
use crate::config::UnknownPropertyPolicy;
use crate::error::{ConvertResult, MismatchReason, ShapeMismatch};
use crate::parser::props::{as_color, as_floats, as_integer, is_finite_number, value_type_name};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// 字段类型
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    Bool,
    Number,
    Integer,
    String,
    Color,
    Vec3,
    Quat,
    Size,
    /// `[width, height]`，或单个数值表示正方形
    SizeOrScalar,
    Padding,
    /// 取值限定在给定名称之内的字符串
    Enum(&'static [&'static str]),
    /// 嵌套对象，带自己的字段表
    Object(&'static [FieldSpec]),
    List(&'static FieldType),
}

impl FieldType {
    pub fn describe(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::String => "string",
            FieldType::Color => "color",
            FieldType::Vec3 => "[x, y, z]",
            FieldType::Quat => "[x, y, z, w]",
            FieldType::Size => "[width, height]",
            FieldType::SizeOrScalar => "number or [width, height]",
            FieldType::Padding => "[top, right, bottom, left]",
            FieldType::Enum(_) => "string",
            FieldType::Object(_) => "object",
            FieldType::List(_) => "array",
        }
    }

    /// 数值类字段是否含有超出 f32 范围的分量
    fn has_non_finite(&self, value: &Value) -> bool {
        match self {
            FieldType::Number
            | FieldType::Vec3
            | FieldType::Quat
            | FieldType::Size
            | FieldType::SizeOrScalar
            | FieldType::Padding => match value {
                Value::Array(items) => items.iter().any(|v| !is_finite_number(v)),
                v => !is_finite_number(v),
            },
            _ => false,
        }
    }

    /// 值是否符合该类型（不含嵌套对象内部）
    fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::Bool => value.is_boolean(),
            FieldType::Number => value.is_number(),
            FieldType::Integer => as_integer(value).is_some(),
            FieldType::String | FieldType::Enum(_) => value.is_string(),
            FieldType::Color => as_color(value).is_some(),
            FieldType::Vec3 => as_floats::<3>(value).is_some(),
            FieldType::Quat | FieldType::Padding => as_floats::<4>(value).is_some(),
            FieldType::Size => as_floats::<2>(value).is_some(),
            FieldType::SizeOrScalar => value.is_number() || as_floats::<2>(value).is_some(),
            FieldType::Object(_) => value.is_object(),
            FieldType::List(_) => value.is_array(),
        }
    }
}

/// 字段声明
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty, required: false }
    }

    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty, required: true }
    }
}

/// 一种节点的完整模式：公共字段组 + 自有字段
#[derive(Debug)]
pub struct Schema {
    pub kind: NodeKind,
    pub groups: &'static [&'static [FieldSpec]],
}

impl Schema {
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.groups.iter().flat_map(|g| g.iter())
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.fields().filter(|f| f.required)
    }

    /// 按模式检查属性表
    pub fn validate(
        &self,
        map: &Map<String, Value>,
        mode: ConvertMode,
        policy: UnknownPropertyPolicy,
    ) -> ConvertResult<()> {
        let mut checker = Checker { kind: self.kind, mode, policy };
        let fields: Vec<&FieldSpec> = self.fields().collect();
        checker.check_map(&fields, map, None)
    }
}

struct Checker {
    kind: NodeKind,
    mode: ConvertMode,
    policy: UnknownPropertyPolicy,
}

impl Checker {
    fn fail(&self, path: String, reason: MismatchReason) -> ShapeMismatch {
        ShapeMismatch::new(self.kind, Some(path), reason)
    }

    fn check_map(
        &mut self,
        fields: &[&FieldSpec],
        map: &Map<String, Value>,
        prefix: Option<&str>,
    ) -> ConvertResult<()> {
        let join = |key: &str| match prefix {
            Some(p) => format!("{}.{}", p, key),
            None => key.to_string(),
        };

        if self.mode == ConvertMode::Create {
            for field in fields.iter().filter(|f| f.required) {
                if map.get(field.name).map_or(true, Value::is_null) {
                    return Err(self.fail(join(field.name), MismatchReason::MissingRequired));
                }
            }
        }

        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            let path = join(key);
            match fields.iter().find(|f| f.name == key.as_str()) {
                Some(field) => self.check_value(&field.ty, value, path)?,
                None => self.unknown(path)?,
            }
        }
        Ok(())
    }

    fn check_value(&mut self, ty: &FieldType, value: &Value, path: String) -> ConvertResult<()> {
        if !ty.accepts(value) {
            return Err(self.fail(
                path,
                MismatchReason::WrongType { expected: ty.describe(), found: value_type_name(value) },
            ));
        }
        if ty.has_non_finite(value) {
            return Err(self.fail(
                path,
                MismatchReason::OutOfRange("number does not fit in 32-bit float".to_string()),
            ));
        }
        match ty {
            FieldType::Enum(names) => {
                let s = value.as_str().unwrap_or_default();
                if !names.contains(&s) {
                    return Err(self.fail(
                        path,
                        MismatchReason::OutOfRange(format!(
                            "`{}` is not one of {}",
                            s,
                            names.join(", ")
                        )),
                    ));
                }
            }
            FieldType::Object(fields) => {
                if let Value::Object(map) = value {
                    let fields: Vec<&FieldSpec> = fields.iter().collect();
                    // 嵌套对象的必填项在更新时同样要检查：对象总是整体替换
                    let mode = std::mem::replace(&mut self.mode, ConvertMode::Create);
                    let result = self.check_map(&fields, map, Some(path.as_str()));
                    self.mode = mode;
                    result?;
                }
            }
            FieldType::List(inner) => {
                if let Value::Array(items) = value {
                    for (i, item) in items.iter().enumerate() {
                        self.check_value(inner, item, format!("{}[{}]", path, i))?;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn unknown(&self, path: String) -> ConvertResult<()> {
        match self.policy {
            UnknownPropertyPolicy::Ignore => {
                debug!(kind = %self.kind, property = %path, "ignoring unknown property");
                Ok(())
            }
            UnknownPropertyPolicy::Warn => {
                warn!(kind = %self.kind, property = %path, "ignoring unknown property");
                Ok(())
            }
            UnknownPropertyPolicy::Reject => Err(self.fail(path, MismatchReason::UnknownProperty)),
        }
    }
}
