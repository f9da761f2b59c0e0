//! progressBar 节点 - 进度条
//!
//! 属性：
//! - min / max: 取值范围，默认 0..1
//! - value: 当前值，超出范围时按配置钳制或报错
//! - width / height: 尺寸
//! - progressColor: { beginColor, endColor } 渐变色

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::parser::props::PropReader;
use crate::Color;
use serde::Serialize;

const PROGRESS_COLOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("beginColor", FieldType::Color),
    FieldSpec::optional("endColor", FieldType::Color),
];

const PROGRESS_COLOR_TYPE: FieldType = FieldType::Object(PROGRESS_COLOR_FIELDS);

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("min", FieldType::Number),
    FieldSpec::optional("max", FieldType::Number),
    FieldSpec::optional("value", FieldType::Number),
    FieldSpec::optional("progressColor", PROGRESS_COLOR_TYPE),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::ProgressBar,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, DIMENSION_FIELDS, FIELDS],
};

/// 进度条渐变色
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressColor {
    pub begin_color: Color,
    pub end_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiProgressBarNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub min: f32,
    pub max: f32,
    pub value: f32,
    pub width: f32,
    pub height: f32,
    pub progress_color: ProgressColor,
}

impl_node_base!(UiProgressBarNode => UiBase);

impl Default for UiProgressBarNode {
    fn default() -> Self {
        Self {
            base: UiBase::default(),
            min: 0.0,
            max: 1.0,
            value: 0.0,
            width: 0.0,
            height: 0.0,
            progress_color: ProgressColor::default(),
        }
    }
}

impl UiProgressBarNode {
    /// 当前进度占比 0..1
    pub fn fraction(&self) -> f32 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }
}

impl NodeConvert for UiProgressBarNode {
    const KIND: NodeKind = NodeKind::ProgressBar;

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
        if let Some(colors) = props.object("progressColor")? {
            if let Some(begin) = colors.color("beginColor")? {
                self.progress_color.begin_color = begin;
            }
            if let Some(end) = colors.color("endColor")? {
                self.progress_color.end_color = end;
            }
        }
        Ok(())
    }

    fn finish(&mut self, props: &PropReader, ctx: &ConvertContext) -> ConvertResult<()> {
        self.value = fit_to_range(props, ctx, "value", self.value, self.min, self.max)?;
        Ok(())
    }
}
