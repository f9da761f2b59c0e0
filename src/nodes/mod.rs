//! UI 节点转换
//! 每种节点独立文件，便于维护
//!
//! 节点种类是封闭集合：`define_nodes!` 一处声明，生成 [`NodeKind`]、
//! [`UiNode`]、按种类分发的转换函数。增删一种节点只需改这里一行，
//! 再加上对应的节点文件。

mod base;
pub mod schema;

mod button;
mod grid_layout;
mod group;
mod image;
mod line;
mod model;
mod progress_bar;
mod slider;
mod spinner;
mod text;
mod text_edit;
mod toggle;
mod video;

pub use base::*;
pub use button::UiButtonNode;
pub use grid_layout::{ItemAlignment, ItemPadding, UiGridLayoutNode};
pub use group::UiGroupNode;
pub use image::UiImageNode;
pub use line::UiLineNode;
pub use model::UiModelNode;
pub use progress_bar::{ProgressColor, UiProgressBarNode};
pub use slider::UiSliderNode;
pub use spinner::UiSpinnerNode;
pub use text::{BoundsSize, FontParameters, FontStyle, FontWeight, UiTextNode};
pub use text_edit::{TextEntryMode, UiTextEditNode};
pub use toggle::{ToggleType, UiToggleNode};
pub use video::{UiVideoNode, VideoAction};

use crate::config::ConverterConfig;
use crate::error::ConvertResult;
use crate::parser::props::PropReader;
use once_cell::sync::Lazy;
use schema::Schema;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// 转换模式：新建节点，或向已有节点应用部分属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertMode {
    Create,
    Update,
}

/// 转换上下文
pub struct ConvertContext<'a> {
    pub config: &'a ConverterConfig,
    pub mode: ConvertMode,
}

/// 节点转换 trait
///
/// 节点先取默认值，再由 `apply` 写入出现的属性，最后 `finish` 做跨字段
/// 检查（必填组合、范围钳制、派生值）。
pub trait NodeConvert: Sized + Default + Clone {
    const KIND: NodeKind;

    fn schema() -> &'static Schema;

    fn apply(&mut self, props: &PropReader, ctx: &ConvertContext) -> ConvertResult<()>;

    fn finish(&mut self, _props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        Ok(())
    }
}

/// 节点转换器
///
/// 除只读配置外不持有任何状态，可在多线程间共享。
#[derive(Debug, Clone, Default)]
pub struct NodeConverter {
    config: ConverterConfig,
}

impl NodeConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// 将动态值转换为指定类型的节点
    pub fn convert<T: NodeConvert>(&self, value: &Value) -> ConvertResult<T> {
        let props = PropReader::from_value(T::KIND, value)?;
        T::schema().validate(props.map(), ConvertMode::Create, self.config.unknown_properties)?;

        let ctx = ConvertContext { config: &self.config, mode: ConvertMode::Create };
        let mut node = T::default();
        node.apply(&props, &ctx)?;
        node.finish(&props, &ctx)?;
        debug!(kind = %T::KIND, properties = props.map().len(), "converted node");
        Ok(node)
    }

    /// 向已有节点应用部分属性；失败时节点保持不变
    pub fn update<T: NodeConvert>(&self, node: &mut T, value: &Value) -> ConvertResult<()> {
        let props = PropReader::from_value(T::KIND, value)?;
        T::schema().validate(props.map(), ConvertMode::Update, self.config.unknown_properties)?;

        let ctx = ConvertContext { config: &self.config, mode: ConvertMode::Update };
        let mut next = node.clone();
        next.apply(&props, &ctx)?;
        next.finish(&props, &ctx)?;
        *node = next;
        debug!(kind = %T::KIND, properties = props.map().len(), "updated node");
        Ok(())
    }
}

/// 用默认配置转换
pub fn convert<T: NodeConvert>(value: &Value) -> ConvertResult<T> {
    NodeConverter::default().convert(value)
}

macro_rules! define_nodes {
    ( $( $variant:ident => $ty:ident, $element:literal, $func:ident ),+ $(,)? ) => {
        /// 节点种类
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum NodeKind {
            $( $variant, )+
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$variant, )+ ];

            /// 原生类型名，如 `UiButtonNode`
            pub fn type_name(&self) -> &'static str {
                match self {
                    $( NodeKind::$variant => stringify!($ty), )+
                }
            }

            /// 脚本层元素名，如 `button`
            pub fn element_name(&self) -> &'static str {
                match self {
                    $( NodeKind::$variant => $element, )+
                }
            }

            pub fn schema(&self) -> &'static Schema {
                match self {
                    $( NodeKind::$variant => <$ty as NodeConvert>::schema(), )+
                }
            }
        }

        /// 转换后的节点
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "type")]
        pub enum UiNode {
            $( $variant($ty), )+
        }

        impl UiNode {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $( UiNode::$variant(_) => NodeKind::$variant, )+
                }
            }

            pub fn transform(&self) -> &TransformProps {
                match self {
                    $( UiNode::$variant(n) => &n.transform, )+
                }
            }
        }

        $(
            impl From<$ty> for UiNode {
                fn from(node: $ty) -> Self {
                    UiNode::$variant(node)
                }
            }

            #[doc = concat!("将动态值转换为 `", stringify!($ty), "`")]
            pub fn $func(value: &Value) -> ConvertResult<$ty> {
                convert::<$ty>(value)
            }
        )+

        impl NodeConverter {
            /// 按运行时给定的种类转换
            pub fn convert_kind(&self, kind: NodeKind, value: &Value) -> ConvertResult<UiNode> {
                match kind {
                    $( NodeKind::$variant => self.convert::<$ty>(value).map(UiNode::$variant), )+
                }
            }

            /// 向已转换的节点应用部分属性
            pub fn update_node(&self, node: &mut UiNode, value: &Value) -> ConvertResult<()> {
                match node {
                    $( UiNode::$variant(n) => self.update(n, value), )+
                }
            }
        }
    };
}

define_nodes! {
    Button => UiButtonNode, "button", convert_button,
    GridLayout => UiGridLayoutNode, "gridLayout", convert_grid_layout,
    Group => UiGroupNode, "view", convert_group,
    Image => UiImageNode, "image", convert_image,
    Line => UiLineNode, "line", convert_line,
    Model => UiModelNode, "model", convert_model,
    ProgressBar => UiProgressBarNode, "progressBar", convert_progress_bar,
    Slider => UiSliderNode, "slider", convert_slider,
    Spinner => UiSpinnerNode, "spinner", convert_spinner,
    Text => UiTextNode, "text", convert_text,
    TextEdit => UiTextEditNode, "textEdit", convert_text_edit,
    Toggle => UiToggleNode, "toggle", convert_toggle,
    Video => UiVideoNode, "video", convert_video,
}

/// 元素名 / 类型名 → 种类
static KIND_LOOKUP: Lazy<HashMap<&'static str, NodeKind>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for kind in NodeKind::ALL {
        map.insert(kind.element_name(), *kind);
        map.insert(kind.type_name(), *kind);
    }
    map.insert("group", NodeKind::Group);
    map
});

impl NodeKind {
    /// 按元素名或类型名查找
    pub fn lookup(name: &str) -> Option<NodeKind> {
        KIND_LOOKUP.get(name).copied()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl std::str::FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::lookup(s).ok_or_else(|| format!("Unknown node kind: {}", s))
    }
}
