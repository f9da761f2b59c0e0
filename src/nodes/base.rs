//! 节点基础定义：公共属性、枚举、公共字段表

use super::schema::{FieldSpec, FieldType};
use super::ConvertContext;
use crate::error::ConvertResult;
use crate::geometry::{Quat, Vec3};
use crate::parser::props::{PropEnum, PropReader};
use crate::Color;
use serde::Serialize;

/// 定义一个由字符串属性取值的枚举
macro_rules! prop_enum {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl $crate::parser::props::PropEnum for $name {
            const NAMES: &'static [&'static str] = &[ $( $value, )+ ];

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

pub(crate) use prop_enum;

/// 为节点实现到公共属性的 Deref
macro_rules! impl_node_base {
    ($ty:ty => $base:ty) => {
        impl std::ops::Deref for $ty {
            type Target = $base;
            fn deref(&self) -> &Self::Target {
                &self.base
            }
        }

        impl std::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.base
            }
        }
    };
}

pub(crate) use impl_node_base;

prop_enum! {
    /// 节点的对齐方式（枢轴位置）
    Alignment default TopLeft {
        TopLeft => "top-left",
        TopCenter => "top-center",
        TopRight => "top-right",
        CenterLeft => "center-left",
        CenterCenter => "center-center",
        CenterRight => "center-right",
        BottomLeft => "bottom-left",
        BottomCenter => "bottom-center",
        BottomRight => "bottom-right",
    }
}

prop_enum! {
    /// 文本水平对齐
    HorizontalTextAlignment default Left {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
}

/// 所有节点共有的变换属性
pub const TRANSFORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("name", FieldType::String),
    FieldSpec::optional("localPosition", FieldType::Vec3),
    FieldSpec::optional("localRotation", FieldType::Quat),
    FieldSpec::optional("localScale", FieldType::Vec3),
    FieldSpec::optional("anchorPosition", FieldType::Vec3),
    FieldSpec::optional("visible", FieldType::Bool),
];

/// UI 节点共有属性
pub const UI_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("alignment", FieldType::Enum(Alignment::NAMES)),
    FieldSpec::optional("enabled", FieldType::Bool),
];

/// 渲染节点共有属性
pub const RENDER_FIELDS: &[FieldSpec] = &[FieldSpec::optional("color", FieldType::Color)];

/// 变换属性
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformProps {
    pub name: Option<String>,
    pub local_position: Vec3,
    pub local_rotation: Quat,
    pub local_scale: Vec3,
    pub anchor_position: Vec3,
    pub visible: bool,
}

impl Default for TransformProps {
    fn default() -> Self {
        Self {
            name: None,
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            local_scale: Vec3::ONE,
            anchor_position: Vec3::ZERO,
            visible: true,
        }
    }
}

impl TransformProps {
    pub fn apply(&mut self, props: &PropReader) -> ConvertResult<()> {
        if let Some(name) = props.string("name")? {
            self.name = Some(name);
        }
        if let Some(v) = props.vec3("localPosition")? {
            self.local_position = v;
        }
        if let Some(q) = props.quat("localRotation")? {
            self.local_rotation = q;
        }
        if let Some(v) = props.vec3("localScale")? {
            self.local_scale = v;
        }
        if let Some(v) = props.vec3("anchorPosition")? {
            self.anchor_position = v;
        }
        if let Some(visible) = props.bool("visible")? {
            self.visible = visible;
        }
        Ok(())
    }
}

/// UI 节点公共属性
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiBase {
    #[serde(flatten)]
    pub transform: TransformProps,
    pub alignment: Alignment,
    pub enabled: bool,
}

impl Default for UiBase {
    fn default() -> Self {
        Self::with_alignment(Alignment::TopLeft)
    }
}

impl UiBase {
    /// 部分节点（如文本）默认对齐不同
    pub fn with_alignment(alignment: Alignment) -> Self {
        Self { transform: TransformProps::default(), alignment, enabled: true }
    }

    pub fn apply(&mut self, props: &PropReader) -> ConvertResult<()> {
        self.transform.apply(props)?;
        if let Some(alignment) = props.enumeration("alignment")? {
            self.alignment = alignment;
        }
        if let Some(enabled) = props.bool("enabled")? {
            self.enabled = enabled;
        }
        Ok(())
    }
}

/// 渲染节点公共属性
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBase {
    #[serde(flatten)]
    pub transform: TransformProps,
    pub color: Color,
}

impl RenderBase {
    pub fn apply(&mut self, props: &PropReader) -> ConvertResult<()> {
        self.transform.apply(props)?;
        if let Some(color) = props.color("color")? {
            self.color = color;
        }
        Ok(())
    }
}

/// 尺寸不能为负（0 表示随内容）
pub(crate) fn check_non_negative(props: &PropReader, key: &str, value: f32) -> ConvertResult<f32> {
    if value < 0.0 {
        return Err(props.out_of_range(key, format!("{} must not be negative", value)));
    }
    Ok(value)
}

/// 资源路径不能为空
pub(crate) fn check_non_empty(props: &PropReader, key: &str, value: String) -> ConvertResult<String> {
    if value.is_empty() {
        return Err(props.out_of_range(key, "path must not be empty"));
    }
    Ok(value)
}

/// 必须为正数
pub(crate) fn check_positive(props: &PropReader, key: &str, value: f32) -> ConvertResult<f32> {
    if value <= 0.0 {
        return Err(props.out_of_range(key, format!("{} must be greater than 0", value)));
    }
    Ok(value)
}

/// 把 value 限制在 [min, max]；配置关闭钳制时越界即报错
pub(crate) fn fit_to_range(
    props: &PropReader,
    ctx: &ConvertContext,
    key: &str,
    value: f32,
    min: f32,
    max: f32,
) -> ConvertResult<f32> {
    if min > max {
        return Err(props.out_of_range("min", format!("min {} is greater than max {}", min, max)));
    }
    if value >= min && value <= max {
        return Ok(value);
    }
    if ctx.config.clamp_values {
        Ok(value.clamp(min, max))
    } else {
        Err(props.out_of_range(key, format!("{} is outside [{}, {}]", value, min, max)))
    }
}

/// 读取一对宽高属性，尺寸不能为负
pub(crate) fn apply_dimensions(
    props: &PropReader,
    width: &mut f32,
    height: &mut f32,
) -> ConvertResult<()> {
    if let Some(w) = props.f32("width")? {
        *width = check_non_negative(props, "width", w)?;
    }
    if let Some(h) = props.f32("height")? {
        *height = check_non_negative(props, "height", h)?;
    }
    Ok(())
}

/// 宽高字段声明
pub const DIMENSION_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("width", FieldType::Number),
    FieldSpec::optional("height", FieldType::Number),
];
