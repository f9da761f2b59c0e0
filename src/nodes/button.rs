//! button 节点 - 按钮
//!
//! 属性：
//! - text: 按钮文字
//! - textColor: 文字颜色，默认白色
//! - textSize: 文字大小；未给出时按高度的 1/3 推算，高度为 0 时取 0.0167
//! - width / height: 尺寸，0 表示随内容
//! - roundness: 圆角程度 0..1，默认 1
//! - iconType: 系统图标名

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, ConvertMode, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::parser::props::PropReader;
use crate::Color;
use serde::Serialize;

pub const DEFAULT_TEXT_SIZE: f32 = 0.0167;
pub const DEFAULT_ROUNDNESS: f32 = 1.0;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("text", FieldType::String),
    FieldSpec::optional("textColor", FieldType::Color),
    FieldSpec::optional("textSize", FieldType::Number),
    FieldSpec::optional("roundness", FieldType::Number),
    FieldSpec::optional("iconType", FieldType::String),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Button,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, DIMENSION_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiButtonNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub text: String,
    pub text_color: Color,
    pub text_size: f32,
    pub width: f32,
    pub height: f32,
    pub roundness: f32,
    pub icon_type: Option<String>,
}

impl_node_base!(UiButtonNode => UiBase);

impl Default for UiButtonNode {
    fn default() -> Self {
        Self {
            base: UiBase::default(),
            text: String::new(),
            text_color: Color::WHITE,
            text_size: DEFAULT_TEXT_SIZE,
            width: 0.0,
            height: 0.0,
            roundness: DEFAULT_ROUNDNESS,
            icon_type: None,
        }
    }
}

impl NodeConvert for UiButtonNode {
    const KIND: NodeKind = NodeKind::Button;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        apply_dimensions(props, &mut self.width, &mut self.height)?;

        if let Some(text) = props.string("text")? {
            self.text = text;
        }
        if let Some(color) = props.color("textColor")? {
            self.text_color = color;
        }
        if let Some(size) = props.f32("textSize")? {
            self.text_size = check_positive(props, "textSize", size)?;
        }
        if let Some(roundness) = props.f32("roundness")? {
            if !(0.0..=1.0).contains(&roundness) {
                return Err(props.out_of_range("roundness", format!("{} is outside [0, 1]", roundness)));
            }
            self.roundness = roundness;
        }
        if let Some(icon) = props.string("iconType")? {
            self.icon_type = Some(icon);
        }
        Ok(())
    }

    fn finish(&mut self, props: &PropReader, ctx: &ConvertContext) -> ConvertResult<()> {
        // 文字大小跟随按钮高度
        if ctx.mode == ConvertMode::Create && !props.contains("textSize") {
            self.text_size = if self.height > 0.0 { self.height / 3.0 } else { DEFAULT_TEXT_SIZE };
        }
        Ok(())
    }
}
