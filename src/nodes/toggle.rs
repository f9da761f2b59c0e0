//! toggle 节点 - 开关 / 复选框 / 单选框

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::parser::props::{PropEnum, PropReader};
use crate::Color;
use serde::Serialize;

pub const DEFAULT_TEXT_SIZE: f32 = 0.0167;

prop_enum! {
    /// 开关外观
    ToggleType default Default {
        Default => "default",
        Checkbox => "checkbox",
        Radio => "radio",
        Switch => "switch",
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("text", FieldType::String),
    FieldSpec::optional("textColor", FieldType::Color),
    FieldSpec::optional("textSize", FieldType::Number),
    FieldSpec::optional("on", FieldType::Bool),
    FieldSpec::optional("type", FieldType::Enum(ToggleType::NAMES)),
    FieldSpec::optional("height", FieldType::Number),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Toggle,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiToggleNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub text: String,
    pub text_color: Color,
    pub text_size: f32,
    pub on: bool,
    /// 输出时与节点的 type 标签区分
    pub toggle_type: ToggleType,
    pub height: f32,
}

impl_node_base!(UiToggleNode => UiBase);

impl Default for UiToggleNode {
    fn default() -> Self {
        Self {
            base: UiBase::default(),
            text: String::new(),
            text_color: Color::WHITE,
            text_size: DEFAULT_TEXT_SIZE,
            on: false,
            toggle_type: ToggleType::Default,
            height: 0.0,
        }
    }
}

impl NodeConvert for UiToggleNode {
    const KIND: NodeKind = NodeKind::Toggle;

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
        if let Some(on) = props.bool("on")? {
            self.on = on;
        }
        if let Some(toggle_type) = props.enumeration("type")? {
            self.toggle_type = toggle_type;
        }
        if let Some(height) = props.f32("height")? {
            self.height = check_non_negative(props, "height", height)?;
        }
        Ok(())
    }
}
