//! 场景读取测试

use crate::error::{Error, MismatchReason};
use crate::nodes::{NodeConverter, NodeKind, UiNode};
use crate::parser::scene::{convert_scene, parse_scene};
use serde_json::json;

fn sample_scene() -> serde_json::Value {
    json!({
        "type": "view",
        "props": { "name": "root" },
        "children": [
            { "type": "text", "props": { "name": "title", "text": "Settings" } },
            {
                "type": "gridLayout",
                "props": { "columns": 2 },
                "children": [
                    { "type": "toggle", "props": { "name": "wifi", "on": true } },
                    { "type": "UiSliderNode", "props": { "name": "brightness", "value": 0.5 } }
                ]
            }
        ]
    })
}

/// 测试读取嵌套场景
#[test]
fn test_read_nested_scene() {
    let converter = NodeConverter::default();
    let roots = convert_scene(&converter, &sample_scene()).unwrap();
    assert_eq!(roots.len(), 1);

    let root = &roots[0];
    assert_eq!(root.node.kind(), NodeKind::Group);
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.count(), 5);

    let grid = &root.children[1];
    assert_eq!(grid.node.kind(), NodeKind::GridLayout);
    assert_eq!(grid.children[1].node.kind(), NodeKind::Slider);

    match &root.find("wifi").unwrap().node {
        UiNode::Toggle(toggle) => assert!(toggle.on),
        other => panic!("expected toggle, got {:?}", other.kind()),
    }
    assert!(root.find("missing").is_none());
}

/// 测试深度优先遍历
#[test]
fn test_walk_order() {
    let roots = convert_scene(&NodeConverter::default(), &sample_scene()).unwrap();
    let mut visited = Vec::new();
    roots[0].walk(&mut |node, depth| visited.push((node.node.kind(), depth)));
    assert_eq!(
        visited,
        vec![
            (NodeKind::Group, 0),
            (NodeKind::Text, 1),
            (NodeKind::GridLayout, 1),
            (NodeKind::Toggle, 2),
            (NodeKind::Slider, 2),
        ]
    );
}

/// 测试顶层数组与缺省 props
#[test]
fn test_top_level_array() {
    let scene = json!([
        { "type": "spinner" },
        { "type": "button", "props": null, "children": [] }
    ]);
    let roots = convert_scene(&NodeConverter::default(), &scene).unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].node.kind(), NodeKind::Spinner);
    assert_eq!(roots[1].node.kind(), NodeKind::Button);
}

/// 测试未知元素报告路径
#[test]
fn test_unknown_element() {
    let scene = json!({ "type": "view", "children": [{ "type": "text" }, { "type": "canvas" }] });
    match convert_scene(&NodeConverter::default(), &scene) {
        Err(Error::UnknownElement { path, name }) => {
            assert_eq!(path, "0/children/1");
            assert_eq!(name, "canvas");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

/// 测试节点属性错误带元素路径
#[test]
fn test_property_error_in_element() {
    let scene = json!([
        { "type": "view" },
        { "type": "view", "children": [{ "type": "model", "props": { "importScale": 2 } }] }
    ]);
    match convert_scene(&NodeConverter::default(), &scene) {
        Err(Error::InElement { path, source }) => {
            assert_eq!(path, "1/children/0");
            assert_eq!(source.kind, NodeKind::Model);
            assert_eq!(source.reason, MismatchReason::MissingRequired);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

/// 测试元素结构错误
#[test]
fn test_invalid_element_shape() {
    let converter = NodeConverter::default();

    let err = convert_scene(&converter, &json!(["view"])).unwrap_err();
    assert!(matches!(err, Error::InvalidElement { ref path, .. } if path == "0"));

    let err = convert_scene(&converter, &json!({ "props": {} })).unwrap_err();
    assert!(matches!(err, Error::InvalidElement { .. }));

    let err = convert_scene(&converter, &json!({ "type": "view", "children": {} })).unwrap_err();
    assert!(matches!(err, Error::InvalidElement { .. }));
}

/// 测试从 JSON 文本读取
#[test]
fn test_parse_scene_text() {
    let converter = NodeConverter::default();
    let roots = parse_scene(&converter, r#"{ "type": "text", "props": { "text": "hi" } }"#).unwrap();
    assert_eq!(roots[0].node.kind(), NodeKind::Text);

    let err = parse_scene(&converter, "{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

/// 测试场景序列化
#[test]
fn test_scene_serialization() {
    let roots = convert_scene(&NodeConverter::default(), &sample_scene()).unwrap();
    let value = serde_json::to_value(&roots).unwrap();
    assert_eq!(value[0]["type"], "Group");
    assert_eq!(value[0]["name"], "root");
    assert_eq!(value[0]["children"][0]["text"], "Settings");
    assert!(value[0]["children"][0].get("children").is_none());
}
