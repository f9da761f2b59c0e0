//! spinner 节点 - 加载指示器
//!
//! size 可以是 `[width, height]`，也可以是单个数值（宽高相同）。

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::geometry::Size;
use crate::parser::props::PropReader;
use serde::Serialize;

/// size 为 0 时渲染端使用的边长
pub const DEFAULT_SIZE: f32 = 0.07;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("size", FieldType::SizeOrScalar),
    FieldSpec::optional("value", FieldType::Number),
    FieldSpec::optional("determinate", FieldType::Bool),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Spinner,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSpinnerNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub size: Size,
    /// 进度 0..1，仅 determinate 时有意义
    pub value: f32,
    pub determinate: bool,
}

impl_node_base!(UiSpinnerNode => UiBase);

impl UiSpinnerNode {
    /// 实际绘制尺寸，未指定的边取默认值
    pub fn effective_size(&self) -> Size {
        let width = if self.size.width > 0.0 { self.size.width } else { DEFAULT_SIZE };
        let height = if self.size.height > 0.0 { self.size.height } else { DEFAULT_SIZE };
        Size::new(width, height)
    }
}

impl NodeConvert for UiSpinnerNode {
    const KIND: NodeKind = NodeKind::Spinner;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        if let Some(size) = props.size_or_scalar("size")? {
            check_non_negative(props, "size", size.width.min(size.height))?;
            self.size = size;
        }
        if let Some(value) = props.f32("value")? {
            self.value = value;
        }
        if let Some(determinate) = props.bool("determinate")? {
            self.determinate = determinate;
        }
        Ok(())
    }

    fn finish(&mut self, props: &PropReader, ctx: &ConvertContext) -> ConvertResult<()> {
        self.value = fit_to_range(props, ctx, "value", self.value, 0.0, 1.0)?;
        Ok(())
    }
}
