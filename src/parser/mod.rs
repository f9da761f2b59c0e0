//! 属性与场景解析

pub mod props;
pub mod scene;

pub use props::{PropEnum, PropReader};
pub use scene::{convert_scene, parse_scene, SceneNode, SceneReader};
