//! model 节点 - 3D 模型
//!
//! 属性：
//! - modelPath: 模型文件路径（glb / gltf 等），必填
//! - importScale: 导入缩放，默认 1
//! - defaultTextureIndex: 默认贴图序号
//! - materialOverride: 覆盖材质名

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::parser::props::PropReader;
use serde::Serialize;

pub const DEFAULT_IMPORT_SCALE: f32 = 1.0;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("modelPath", FieldType::String),
    FieldSpec::optional("importScale", FieldType::Number),
    FieldSpec::optional("defaultTextureIndex", FieldType::Integer),
    FieldSpec::optional("materialOverride", FieldType::String),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Model,
    groups: &[TRANSFORM_FIELDS, RENDER_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiModelNode {
    #[serde(flatten)]
    pub base: RenderBase,
    pub model_path: String,
    pub import_scale: f32,
    pub default_texture_index: u32,
    pub material_override: Option<String>,
}

impl_node_base!(UiModelNode => RenderBase);

impl Default for UiModelNode {
    fn default() -> Self {
        Self {
            base: RenderBase::default(),
            model_path: String::new(),
            import_scale: DEFAULT_IMPORT_SCALE,
            default_texture_index: 0,
            material_override: None,
        }
    }
}

impl NodeConvert for UiModelNode {
    const KIND: NodeKind = NodeKind::Model;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        if let Some(path) = props.string("modelPath")? {
            self.model_path = check_non_empty(props, "modelPath", path)?;
        }
        if let Some(scale) = props.f32("importScale")? {
            self.import_scale = check_positive(props, "importScale", scale)?;
        }
        if let Some(index) = props.i32("defaultTextureIndex")? {
            self.default_texture_index = u32::try_from(index).map_err(|_| {
                props.out_of_range("defaultTextureIndex", format!("{} must not be negative", index))
            })?;
        }
        if let Some(material) = props.string("materialOverride")? {
            self.material_override = Some(material);
        }
        Ok(())
    }
}
