//! line 节点 - 折线

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::geometry::Vec3;
use crate::parser::props::PropReader;
use serde::Serialize;

pub const DEFAULT_THICKNESS: f32 = 1.0;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("points", FieldType::List(&FieldType::Vec3)),
    FieldSpec::optional("thickness", FieldType::Number),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Line,
    groups: &[TRANSFORM_FIELDS, RENDER_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiLineNode {
    #[serde(flatten)]
    pub base: RenderBase,
    pub points: Vec<Vec3>,
    pub thickness: f32,
}

impl_node_base!(UiLineNode => RenderBase);

impl Default for UiLineNode {
    fn default() -> Self {
        Self { base: RenderBase::default(), points: Vec::new(), thickness: DEFAULT_THICKNESS }
    }
}

impl NodeConvert for UiLineNode {
    const KIND: NodeKind = NodeKind::Line;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        if let Some(points) = props.vec3_list("points")? {
            self.points = points;
        }
        if let Some(thickness) = props.f32("thickness")? {
            self.thickness = check_positive(props, "thickness", thickness)?;
        }
        Ok(())
    }
}
