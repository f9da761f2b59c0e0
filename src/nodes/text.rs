//! text 节点 - 文本
//!
//! 属性：
//! - text: 文本内容
//! - textColor: 颜色，默认白色
//! - textSize: 字号（米），默认 0.025
//! - textAlignment: left / center / right / justify
//! - boundsSize: { boundsSize: [w, h], wrap: bool } 文本框大小与是否换行
//! - charSpacing / lineSpacing: 字间距（em）、行距倍数
//! - allCaps: 全部大写
//! - fontParameters: { style, weight }
//!
//! 文本默认对齐为 bottom-left。

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::geometry::Size;
use crate::parser::props::{PropEnum, PropReader};
use crate::Color;
use serde::Serialize;

pub const DEFAULT_TEXT_SIZE: f32 = 0.025;

prop_enum! {
    /// 字体样式
    FontStyle default Normal {
        Normal => "normal",
        Italic => "italic",
    }
}

prop_enum! {
    /// 字重
    FontWeight default Regular {
        ExtraLight => "extra-light",
        Light => "light",
        Regular => "regular",
        Medium => "medium",
        Bold => "bold",
        ExtraBold => "extra-bold",
    }
}

const BOUNDS_SIZE_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("boundsSize", FieldType::Size),
    FieldSpec::optional("wrap", FieldType::Bool),
];

const FONT_PARAMETER_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("style", FieldType::Enum(FontStyle::NAMES)),
    FieldSpec::optional("weight", FieldType::Enum(FontWeight::NAMES)),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("text", FieldType::String),
    FieldSpec::optional("textColor", FieldType::Color),
    FieldSpec::optional("textSize", FieldType::Number),
    FieldSpec::optional("textAlignment", FieldType::Enum(HorizontalTextAlignment::NAMES)),
    FieldSpec::optional("boundsSize", FieldType::Object(BOUNDS_SIZE_FIELDS)),
    FieldSpec::optional("charSpacing", FieldType::Number),
    FieldSpec::optional("lineSpacing", FieldType::Number),
    FieldSpec::optional("allCaps", FieldType::Bool),
    FieldSpec::optional("fontParameters", FieldType::Object(FONT_PARAMETER_FIELDS)),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Text,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, FIELDS],
};

/// 文本框
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsSize {
    /// 0 表示不限制
    pub size: Size,
    pub wrap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FontParameters {
    pub style: FontStyle,
    pub weight: FontWeight,
}

impl FontParameters {
    pub(crate) fn apply(&mut self, props: &PropReader) -> ConvertResult<()> {
        if let Some(style) = props.enumeration("style")? {
            self.style = style;
        }
        if let Some(weight) = props.enumeration("weight")? {
            self.weight = weight;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTextNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub text: String,
    pub text_color: Color,
    pub text_size: f32,
    pub text_alignment: HorizontalTextAlignment,
    pub bounds_size: BoundsSize,
    pub char_spacing: f32,
    pub line_spacing: f32,
    pub all_caps: bool,
    pub font_parameters: FontParameters,
}

impl_node_base!(UiTextNode => UiBase);

impl Default for UiTextNode {
    fn default() -> Self {
        Self {
            base: UiBase::with_alignment(Alignment::BottomLeft),
            text: String::new(),
            text_color: Color::WHITE,
            text_size: DEFAULT_TEXT_SIZE,
            text_alignment: HorizontalTextAlignment::Left,
            bounds_size: BoundsSize::default(),
            char_spacing: 0.0,
            line_spacing: 1.0,
            all_caps: false,
            font_parameters: FontParameters::default(),
        }
    }
}

impl UiTextNode {
    /// 实际显示的文字
    pub fn display_text(&self) -> String {
        if self.all_caps {
            self.text.to_uppercase()
        } else {
            self.text.clone()
        }
    }
}

impl NodeConvert for UiTextNode {
    const KIND: NodeKind = NodeKind::Text;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;

        if let Some(text) = props.string("text")? {
            self.text = text;
        }
        if let Some(color) = props.color("textColor")? {
            self.text_color = color;
        }
        if let Some(size) = props.f32("textSize")? {
            self.text_size = check_positive(props, "textSize", size)?;
        }
        if let Some(alignment) = props.enumeration("textAlignment")? {
            self.text_alignment = alignment;
        }
        if let Some(bounds) = props.object("boundsSize")? {
            // 对象整体替换
            let mut next = BoundsSize::default();
            if let Some(size) = bounds.size("boundsSize")? {
                check_non_negative(&bounds, "boundsSize", size.width.min(size.height))?;
                next.size = size;
            }
            if let Some(wrap) = bounds.bool("wrap")? {
                next.wrap = wrap;
            }
            self.bounds_size = next;
        }
        if let Some(spacing) = props.f32("charSpacing")? {
            self.char_spacing = spacing;
        }
        if let Some(spacing) = props.f32("lineSpacing")? {
            self.line_spacing = check_positive(props, "lineSpacing", spacing)?;
        }
        if let Some(all_caps) = props.bool("allCaps")? {
            self.all_caps = all_caps;
        }
        if let Some(font) = props.object("fontParameters")? {
            self.font_parameters.apply(&font)?;
        }
        Ok(())
    }
}
