//! Magic Nodes - 脚本层 UI 节点的强类型转换
//! 把 JSON 形状的属性表转换为 13 种 UI 节点，支持场景树读取与 C 接口

mod color;
mod geometry;

pub use color::Color;
pub use geometry::{Padding, Quat, Size, Vec3};

// 错误类型
pub mod error;
pub use error::{ConvertResult, Error, MismatchReason, Result, ShapeMismatch};

// 转换器配置
pub mod config;
pub use config::{ConverterConfig, UnknownPropertyPolicy};

// 属性读取、场景解析
pub mod parser;
pub use parser::{convert_scene, parse_scene, SceneNode};

// 节点定义与转换
pub mod nodes;
pub use nodes::{
    convert, convert_button, convert_grid_layout, convert_group, convert_image, convert_line,
    convert_model, convert_progress_bar, convert_slider, convert_spinner, convert_text,
    convert_text_edit, convert_toggle, convert_video, ConvertMode, NodeConvert, NodeConverter,
    NodeKind, UiButtonNode, UiGridLayoutNode, UiGroupNode, UiImageNode, UiLineNode, UiModelNode,
    UiNode, UiProgressBarNode, UiSliderNode, UiSpinnerNode, UiTextEditNode, UiTextNode,
    UiToggleNode, UiVideoNode,
};

// FFI 导出
mod ffi;
pub use ffi::*;

// 单元测试
#[cfg(test)]
mod tests;
