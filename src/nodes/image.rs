//! image 节点 - 图片
//!
//! 属性：
//! - filePath: 图片资源路径
//! - icon: 系统图标名（与 filePath 至少给出一个）
//! - width / height: 尺寸，0 表示按图片原始比例
//! - color: 着色，默认白色（不改变图片）
//! - useFrame: 是否绘制边框

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, ConvertMode, NodeConvert, NodeKind};
use crate::error::{ConvertResult, MismatchReason};
use crate::parser::props::PropReader;
use crate::Color;
use serde::Serialize;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("filePath", FieldType::String),
    FieldSpec::optional("icon", FieldType::String),
    FieldSpec::optional("color", FieldType::Color),
    FieldSpec::optional("useFrame", FieldType::Bool),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Image,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, DIMENSION_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiImageNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub file_path: Option<String>,
    pub icon: Option<String>,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub use_frame: bool,
}

impl_node_base!(UiImageNode => UiBase);

impl NodeConvert for UiImageNode {
    const KIND: NodeKind = NodeKind::Image;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        apply_dimensions(props, &mut self.width, &mut self.height)?;

        if let Some(path) = props.string("filePath")? {
            self.file_path = Some(check_non_empty(props, "filePath", path)?);
        }
        if let Some(icon) = props.string("icon")? {
            self.icon = Some(check_non_empty(props, "icon", icon)?);
        }
        if let Some(color) = props.color("color")? {
            self.color = color;
        }
        if let Some(use_frame) = props.bool("useFrame")? {
            self.use_frame = use_frame;
        }
        Ok(())
    }

    fn finish(&mut self, props: &PropReader, ctx: &ConvertContext) -> ConvertResult<()> {
        if ctx.mode == ConvertMode::Create && self.file_path.is_none() && self.icon.is_none() {
            return Err(props.mismatch("filePath", MismatchReason::MissingRequired));
        }
        Ok(())
    }
}
