//! 场景读取 - 把脚本层的元素树转换为节点树
//!
//! 元素格式：
//!
//! ```json
//! { "type": "view", "props": { "name": "root" }, "children": [
//!     { "type": "text", "props": { "text": "Hello" } }
//! ] }
//! ```
//!
//! 顶层可以是单个元素，也可以是元素数组。`type` 接受元素名（`button`）
//! 或节点类型名（`UiButtonNode`）。出错时报告元素路径，如 `0/children/2`。

use crate::error::{Error, Result};
use crate::nodes::{NodeConverter, NodeKind, UiNode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// 场景中的一个节点及其子节点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    #[serde(flatten)]
    pub node: UiNode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// 子树节点总数（含自身）
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::count).sum::<usize>()
    }

    /// 深度优先遍历
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a SceneNode, usize)) {
        self.walk_depth(f, 0);
    }

    fn walk_depth<'a>(&'a self, f: &mut impl FnMut(&'a SceneNode, usize), depth: usize) {
        f(self, depth);
        for child in &self.children {
            child.walk_depth(f, depth + 1);
        }
    }

    /// 按 name 属性查找第一个匹配的节点
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.node.transform().name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }
}

/// 场景读取器
pub struct SceneReader<'a> {
    converter: &'a NodeConverter,
}

impl<'a> SceneReader<'a> {
    pub fn new(converter: &'a NodeConverter) -> Self {
        Self { converter }
    }

    /// 读取整个场景，返回顶层节点列表
    pub fn read(&self, scene: &Value) -> Result<Vec<SceneNode>> {
        let roots = match scene {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.read_element(item, i.to_string()))
                .collect::<Result<Vec<_>>>()?,
            other => vec![self.read_element(other, "0".to_string())?],
        };
        debug!(
            roots = roots.len(),
            nodes = roots.iter().map(SceneNode::count).sum::<usize>(),
            "scene converted"
        );
        Ok(roots)
    }

    fn read_element(&self, element: &Value, path: String) -> Result<SceneNode> {
        let Value::Object(map) = element else {
            return Err(Error::InvalidElement { path, detail: "element must be an object".into() });
        };

        let name = match map.get("type") {
            Some(Value::String(name)) => name,
            Some(_) => {
                return Err(Error::InvalidElement { path, detail: "`type` must be a string".into() })
            }
            None => return Err(Error::InvalidElement { path, detail: "missing `type`".into() }),
        };
        let kind = NodeKind::lookup(name)
            .ok_or_else(|| Error::UnknownElement { path: path.clone(), name: name.clone() })?;

        let empty = Value::Object(Map::new());
        let props = match map.get("props") {
            None | Some(Value::Null) => &empty,
            Some(props) => props,
        };
        let node = self
            .converter
            .convert_kind(kind, props)
            .map_err(|source| Error::InElement { path: path.clone(), source })?;

        let children = match map.get("children") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, child)| self.read_element(child, format!("{}/children/{}", path, i)))
                .collect::<Result<Vec<_>>>()?,
            Some(_) => {
                return Err(Error::InvalidElement { path, detail: "`children` must be an array".into() })
            }
        };

        Ok(SceneNode { node, children })
    }
}

/// 用给定转换器读取场景
pub fn convert_scene(converter: &NodeConverter, scene: &Value) -> Result<Vec<SceneNode>> {
    SceneReader::new(converter).read(scene)
}

/// 从 JSON 文本读取场景
pub fn parse_scene(converter: &NodeConverter, json: &str) -> Result<Vec<SceneNode>> {
    let scene: Value = serde_json::from_str(json)?;
    convert_scene(converter, &scene)
}
