//! textEdit 节点 - 文本输入框
//!
//! 属性：
//! - text / hint: 内容与占位提示
//! - textColor / hintColor: 颜色
//! - textSize: 字号，默认 0.0298
//! - textAlignment: left / center / right / justify
//! - textPadding: [top, right, bottom, left]，默认各 0.003
//! - charSpacing / lineSpacing
//! - multiline / password
//! - width / height
//! - textEntry: email / none / normal / numeric / url
//! - charLimit: 最大字符数，0 表示不限制

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::geometry::Padding;
use crate::parser::props::{PropEnum, PropReader};
use crate::Color;
use serde::Serialize;

pub const DEFAULT_TEXT_SIZE: f32 = 0.0298;
pub const DEFAULT_TEXT_PADDING: f32 = 0.003;

prop_enum! {
    /// 输入模式（决定虚拟键盘）
    TextEntryMode default Normal {
        Email => "email",
        /// 不弹出虚拟键盘
        None => "none",
        Normal => "normal",
        Numeric => "numeric",
        Url => "url",
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("text", FieldType::String),
    FieldSpec::optional("hint", FieldType::String),
    FieldSpec::optional("textColor", FieldType::Color),
    FieldSpec::optional("hintColor", FieldType::Color),
    FieldSpec::optional("textSize", FieldType::Number),
    FieldSpec::optional("textAlignment", FieldType::Enum(HorizontalTextAlignment::NAMES)),
    FieldSpec::optional("textPadding", FieldType::Padding),
    FieldSpec::optional("charSpacing", FieldType::Number),
    FieldSpec::optional("lineSpacing", FieldType::Number),
    FieldSpec::optional("multiline", FieldType::Bool),
    FieldSpec::optional("password", FieldType::Bool),
    FieldSpec::optional("textEntry", FieldType::Enum(TextEntryMode::NAMES)),
    FieldSpec::optional("charLimit", FieldType::Integer),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::TextEdit,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, DIMENSION_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTextEditNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub text: String,
    pub hint: Option<String>,
    pub text_color: Color,
    pub hint_color: Color,
    pub text_size: f32,
    pub text_alignment: HorizontalTextAlignment,
    pub text_padding: Padding,
    pub char_spacing: f32,
    pub line_spacing: f32,
    pub multiline: bool,
    pub password: bool,
    pub width: f32,
    pub height: f32,
    pub text_entry: TextEntryMode,
    pub char_limit: u32,
}

impl_node_base!(UiTextEditNode => UiBase);

impl Default for UiTextEditNode {
    fn default() -> Self {
        Self {
            base: UiBase::default(),
            text: String::new(),
            hint: None,
            text_color: Color::WHITE,
            hint_color: Color::GRAY,
            text_size: DEFAULT_TEXT_SIZE,
            text_alignment: HorizontalTextAlignment::Left,
            text_padding: Padding::uniform(DEFAULT_TEXT_PADDING),
            char_spacing: 0.0,
            line_spacing: 1.0,
            multiline: false,
            password: false,
            width: 0.0,
            height: 0.0,
            text_entry: TextEntryMode::Normal,
            char_limit: 0,
        }
    }
}

impl UiTextEditNode {
    /// 文本为空时显示提示
    pub fn shows_hint(&self) -> bool {
        self.text.is_empty() && self.hint.is_some()
    }
}

impl NodeConvert for UiTextEditNode {
    const KIND: NodeKind = NodeKind::TextEdit;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        apply_dimensions(props, &mut self.width, &mut self.height)?;

        if let Some(text) = props.string("text")? {
            self.text = text;
        }
        if let Some(hint) = props.string("hint")? {
            self.hint = Some(hint);
        }
        if let Some(color) = props.color("textColor")? {
            self.text_color = color;
        }
        if let Some(color) = props.color("hintColor")? {
            self.hint_color = color;
        }
        if let Some(size) = props.f32("textSize")? {
            self.text_size = check_positive(props, "textSize", size)?;
        }
        if let Some(alignment) = props.enumeration("textAlignment")? {
            self.text_alignment = alignment;
        }
        if let Some(padding) = props.padding("textPadding")? {
            self.text_padding = padding;
        }
        if let Some(spacing) = props.f32("charSpacing")? {
            self.char_spacing = spacing;
        }
        if let Some(spacing) = props.f32("lineSpacing")? {
            self.line_spacing = check_positive(props, "lineSpacing", spacing)?;
        }
        if let Some(multiline) = props.bool("multiline")? {
            self.multiline = multiline;
        }
        if let Some(password) = props.bool("password")? {
            self.password = password;
        }
        if let Some(mode) = props.enumeration("textEntry")? {
            self.text_entry = mode;
        }
        if let Some(limit) = props.i32("charLimit")? {
            self.char_limit = u32::try_from(limit).map_err(|_| {
                props.out_of_range("charLimit", format!("{} must not be negative", limit))
            })?;
        }
        Ok(())
    }

    fn finish(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        let limit = self.char_limit as usize;
        if limit > 0 && self.text.chars().count() > limit {
            return Err(props.out_of_range(
                "text",
                format!("{} characters exceed charLimit {}", self.text.chars().count(), limit),
            ));
        }
        Ok(())
    }
}
