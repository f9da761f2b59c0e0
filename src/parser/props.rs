//! 属性读取器 - 从动态属性表中读取强类型值
//!
//! 脚本层传来的属性都是 JSON 形状的值。这里集中定义所有强制转换规则：
//! - `null` 视为缺省
//! - 数值只接受 JSON number；整数要求没有小数部分（`2.0` 可以）
//! - 颜色：`[r, g, b]` / `[r, g, b, a]`（0..1）或 `#RGB` / `#RRGGBB` / `#RRGGBBAA`
//! - 向量、四元数、尺寸、内边距都是定长数值数组
//!
//! 读取失败时返回带属性路径的 [`ShapeMismatch`]。

use crate::error::{ConvertResult, MismatchReason, ShapeMismatch};
use crate::geometry::{Padding, Quat, Size, Vec3};
use crate::nodes::NodeKind;
use crate::Color;
use serde_json::{Map, Value};

/// 可以从字符串属性解析的枚举
pub trait PropEnum: Sized + Copy + 'static {
    /// 所有合法取值
    const NAMES: &'static [&'static str];

    fn from_name(name: &str) -> Option<Self>;

    fn name(&self) -> &'static str;
}

/// JSON 值的类型名，用于错误信息
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn as_number(value: &Value) -> Option<f32> {
    value.as_f64().map(|n| n as f32)
}

/// 转为 f32 后仍是有限值
pub fn is_finite_number(value: &Value) -> bool {
    as_number(value).map_or(false, f32::is_finite)
}

pub fn as_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// 定长数值数组
pub fn as_floats<const N: usize>(value: &Value) -> Option<[f32; N]> {
    let arr = value.as_array()?;
    if arr.len() != N {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(arr) {
        *slot = as_number(item)?;
    }
    Some(out)
}

pub fn as_color(value: &Value) -> Option<Color> {
    match value {
        Value::String(s) => Color::parse_hex(s),
        Value::Array(arr) => match arr.len() {
            3 => {
                let [r, g, b] = as_floats::<3>(value)?;
                Some(Color::from_floats(r, g, b, 1.0))
            }
            4 => {
                let [r, g, b, a] = as_floats::<4>(value)?;
                Some(Color::from_floats(r, g, b, a))
            }
            _ => None,
        },
        _ => None,
    }
}

/// 节点属性表的只读视图
///
/// 借用输入，不做任何修改，也不保留引用到读取结束之后。
#[derive(Debug, Clone)]
pub struct PropReader<'a> {
    kind: NodeKind,
    map: &'a Map<String, Value>,
    prefix: Option<String>,
}

impl<'a> PropReader<'a> {
    pub fn new(kind: NodeKind, map: &'a Map<String, Value>) -> Self {
        Self { kind, map, prefix: None }
    }

    /// 输入必须是映射
    pub fn from_value(kind: NodeKind, value: &'a Value) -> ConvertResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::new(kind, map)),
            other => Err(ShapeMismatch::not_a_mapping(kind, value_type_name(other))),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn map(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// 属性的完整路径
    pub fn path(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.to_string(),
        }
    }

    pub fn mismatch(&self, key: &str, reason: MismatchReason) -> ShapeMismatch {
        ShapeMismatch::new(self.kind, Some(self.path(key)), reason)
    }

    pub fn out_of_range(&self, key: &str, detail: impl Into<String>) -> ShapeMismatch {
        self.mismatch(key, MismatchReason::OutOfRange(detail.into()))
    }

    fn wrong_type(&self, key: &str, expected: &'static str, found: &Value) -> ShapeMismatch {
        self.mismatch(
            key,
            MismatchReason::WrongType { expected, found: value_type_name(found) },
        )
    }

    /// 取原始值，`null` 视为不存在
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn read<T>(
        &self,
        key: &str,
        expected: &'static str,
        coerce: impl FnOnce(&'a Value) -> Option<T>,
    ) -> ConvertResult<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => coerce(v).map(Some).ok_or_else(|| self.wrong_type(key, expected, v)),
        }
    }

    pub fn bool(&self, key: &str) -> ConvertResult<Option<bool>> {
        self.read(key, "bool", Value::as_bool)
    }

    pub fn f32(&self, key: &str) -> ConvertResult<Option<f32>> {
        match self.read(key, "number", as_number)? {
            Some(n) if !n.is_finite() => {
                Err(self.out_of_range(key, "number does not fit in 32-bit float"))
            }
            n => Ok(n),
        }
    }

    pub fn i32(&self, key: &str) -> ConvertResult<Option<i32>> {
        let Some(v) = self.get(key) else { return Ok(None) };
        let i = as_integer(v).ok_or_else(|| self.wrong_type(key, "integer", v))?;
        i32::try_from(i)
            .map(Some)
            .map_err(|_| self.out_of_range(key, format!("{} does not fit in 32 bits", i)))
    }

    pub fn string(&self, key: &str) -> ConvertResult<Option<String>> {
        self.read(key, "string", |v| v.as_str().map(str::to_string))
    }

    pub fn color(&self, key: &str) -> ConvertResult<Option<Color>> {
        self.read(key, "color", as_color)
    }

    pub fn vec3(&self, key: &str) -> ConvertResult<Option<Vec3>> {
        self.read(key, "[x, y, z]", |v| as_floats::<3>(v).map(|[x, y, z]| Vec3::new(x, y, z)))
    }

    pub fn quat(&self, key: &str) -> ConvertResult<Option<Quat>> {
        self.read(key, "[x, y, z, w]", |v| {
            as_floats::<4>(v).map(|[x, y, z, w]| Quat::new(x, y, z, w))
        })
    }

    pub fn size(&self, key: &str) -> ConvertResult<Option<Size>> {
        self.read(key, "[width, height]", |v| as_floats::<2>(v).map(|[w, h]| Size::new(w, h)))
    }

    /// 尺寸，单个数值表示宽高相同
    pub fn size_or_scalar(&self, key: &str) -> ConvertResult<Option<Size>> {
        match self.get(key) {
            Some(v) if v.is_number() => Ok(self.f32(key)?.map(|n| Size::new(n, n))),
            _ => self.size(key),
        }
    }

    pub fn padding(&self, key: &str) -> ConvertResult<Option<Padding>> {
        self.read(key, "[top, right, bottom, left]", |v| {
            as_floats::<4>(v).map(|[t, r, b, l]| Padding::new(t, r, b, l))
        })
    }

    pub fn enumeration<E: PropEnum>(&self, key: &str) -> ConvertResult<Option<E>> {
        let Some(v) = self.get(key) else { return Ok(None) };
        let name = v.as_str().ok_or_else(|| self.wrong_type(key, "string", v))?;
        E::from_name(name).map(Some).ok_or_else(|| {
            self.out_of_range(key, format!("`{}` is not one of {}", name, E::NAMES.join(", ")))
        })
    }

    /// 嵌套对象属性
    pub fn object(&self, key: &str) -> ConvertResult<Option<PropReader<'a>>> {
        let Some(v) = self.get(key) else { return Ok(None) };
        match v {
            Value::Object(map) => Ok(Some(self.nested(self.path(key), map))),
            other => Err(self.wrong_type(key, "object", other)),
        }
    }

    pub fn list(&self, key: &str) -> ConvertResult<Option<&'a [Value]>> {
        self.read(key, "array", |v| v.as_array().map(Vec::as_slice))
    }

    /// 对象数组：逐项返回嵌套读取器
    pub fn object_list(&self, key: &str) -> ConvertResult<Option<Vec<PropReader<'a>>>> {
        let Some(items) = self.list(key)? else { return Ok(None) };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_path = format!("{}[{}]", self.path(key), i);
                match item {
                    Value::Object(map) => Ok(self.nested(item_path, map)),
                    other => Err(ShapeMismatch::new(
                        self.kind,
                        Some(item_path),
                        MismatchReason::WrongType { expected: "object", found: value_type_name(other) },
                    )),
                }
            })
            .collect::<ConvertResult<Vec<_>>>()
            .map(Some)
    }

    /// 向量数组
    pub fn vec3_list(&self, key: &str) -> ConvertResult<Option<Vec<Vec3>>> {
        let Some(items) = self.list(key)? else { return Ok(None) };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                as_floats::<3>(item).map(|[x, y, z]| Vec3::new(x, y, z)).ok_or_else(|| {
                    ShapeMismatch::new(
                        self.kind,
                        Some(format!("{}[{}]", self.path(key), i)),
                        MismatchReason::WrongType { expected: "[x, y, z]", found: value_type_name(item) },
                    )
                })
            })
            .collect::<ConvertResult<Vec<_>>>()
            .map(Some)
    }

    fn nested(&self, prefix: String, map: &'a Map<String, Value>) -> PropReader<'a> {
        PropReader { kind: self.kind, map, prefix: Some(prefix) }
    }
}
