//! slider 节点 - 滑动选择器
//!
//! 属性：
//! - min: 最小值，默认 0
//! - max: 最大值，默认 1
//! - value: 当前值；超出 [min, max] 时默认钳制，配置 clampValues=false 时报错
//! - width / height: 尺寸
//! - minLabel / maxLabel: 两端标签文字
//!
//! min 大于 max 总是报错。

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::parser::props::PropReader;
use serde::Serialize;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("min", FieldType::Number),
    FieldSpec::optional("max", FieldType::Number),
    FieldSpec::optional("value", FieldType::Number),
    FieldSpec::optional("minLabel", FieldType::String),
    FieldSpec::optional("maxLabel", FieldType::String),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Slider,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, DIMENSION_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSliderNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub min: f32,
    pub max: f32,
    pub value: f32,
    pub width: f32,
    pub height: f32,
    pub min_label: Option<String>,
    pub max_label: Option<String>,
}

impl_node_base!(UiSliderNode => UiBase);

impl Default for UiSliderNode {
    fn default() -> Self {
        Self {
            base: UiBase::default(),
            min: 0.0,
            max: 1.0,
            value: 0.0,
            width: 0.0,
            height: 0.0,
            min_label: None,
            max_label: None,
        }
    }
}

impl NodeConvert for UiSliderNode {
    const KIND: NodeKind = NodeKind::Slider;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        apply_dimensions(props, &mut self.width, &mut self.height)?;

        if let Some(min) = props.f32("min")? {
            self.min = min;
        }
        if let Some(max) = props.f32("max")? {
            self.max = max;
        }
        if let Some(value) = props.f32("value")? {
            self.value = value;
        }
        if let Some(label) = props.string("minLabel")? {
            self.min_label = Some(label);
        }
        if let Some(label) = props.string("maxLabel")? {
            self.max_label = Some(label);
        }
        Ok(())
    }

    fn finish(&mut self, props: &PropReader, ctx: &ConvertContext) -> ConvertResult<()> {
        self.value = fit_to_range(props, ctx, "value", self.value, self.min, self.max)?;
        Ok(())
    }
}
