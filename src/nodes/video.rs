//! video 节点 - 视频
//!
//! 属性：
//! - videoPath: 视频文件路径，必填
//! - width / height: 画面尺寸
//! - looping: 循环播放
//! - volume: 音量 0..1，默认 1
//! - action: start / stop / pause

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::ConvertResult;
use crate::parser::props::{PropEnum, PropReader};
use serde::Serialize;

prop_enum! {
    /// 播放控制
    VideoAction default Stop {
        Start => "start",
        Stop => "stop",
        Pause => "pause",
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("videoPath", FieldType::String),
    FieldSpec::optional("looping", FieldType::Bool),
    FieldSpec::optional("volume", FieldType::Number),
    FieldSpec::optional("action", FieldType::Enum(VideoAction::NAMES)),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::Video,
    groups: &[TRANSFORM_FIELDS, RENDER_FIELDS, DIMENSION_FIELDS, FIELDS],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiVideoNode {
    #[serde(flatten)]
    pub base: RenderBase,
    pub video_path: String,
    pub width: f32,
    pub height: f32,
    pub looping: bool,
    pub volume: f32,
    pub action: Option<VideoAction>,
}

impl_node_base!(UiVideoNode => RenderBase);

impl Default for UiVideoNode {
    fn default() -> Self {
        Self {
            base: RenderBase::default(),
            video_path: String::new(),
            width: 0.0,
            height: 0.0,
            looping: false,
            volume: 1.0,
            action: None,
        }
    }
}

impl NodeConvert for UiVideoNode {
    const KIND: NodeKind = NodeKind::Video;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        apply_dimensions(props, &mut self.width, &mut self.height)?;

        if let Some(path) = props.string("videoPath")? {
            self.video_path = check_non_empty(props, "videoPath", path)?;
        }
        if let Some(looping) = props.bool("looping")? {
            self.looping = looping;
        }
        if let Some(volume) = props.f32("volume")? {
            self.volume = volume;
        }
        if let Some(action) = props.enumeration("action")? {
            self.action = Some(action);
        }
        Ok(())
    }

    fn finish(&mut self, props: &PropReader, ctx: &ConvertContext) -> ConvertResult<()> {
        self.volume = fit_to_range(props, ctx, "volume", self.volume, 0.0, 1.0)?;
        Ok(())
    }
}
