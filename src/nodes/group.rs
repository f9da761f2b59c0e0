//! view 节点 - 分组容器
//!
//! 分组只承载子节点，大小由子节点决定；对齐固定为 center-center，
//! 输入的 alignment 会被接受但不生效。

use super::base::*;
use super::schema::Schema;
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::parser::props::PropReader;
use serde::Serialize;

static SCHEMA: Schema = Schema {
    kind: NodeKind::Group,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiGroupNode {
    #[serde(flatten)]
    pub base: UiBase,
}

impl_node_base!(UiGroupNode => UiBase);

impl Default for UiGroupNode {
    fn default() -> Self {
        Self { base: UiBase::with_alignment(Alignment::CenterCenter) }
    }
}

impl NodeConvert for UiGroupNode {
    const KIND: NodeKind = NodeKind::Group;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        self.base.alignment = Alignment::CenterCenter;
        Ok(())
    }
}
