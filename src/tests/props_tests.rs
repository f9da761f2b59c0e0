//! 属性读取与颜色解析测试

use crate::geometry::{Padding, Quat, Vec3};
use crate::nodes::{Alignment, NodeKind};
use crate::parser::props::{as_color, as_integer, PropEnum, PropReader};
use crate::Color;
use serde_json::json;

/// 测试十六进制颜色
#[test]
fn test_parse_hex_color() {
    assert_eq!(Color::parse_hex("#F00"), Some(Color::RED));
    assert_eq!(Color::parse_hex("#00FF00"), Some(Color::GREEN));
    assert_eq!(Color::parse_hex("#0000FF80"), Some(Color::new(0, 0, 255, 128)));
    assert_eq!(Color::parse_hex("0000FF"), None);
    assert_eq!(Color::parse_hex("#12345"), None);
    assert_eq!(Color::parse_hex("#GGGGGG"), None);
    // 不去空白，不接受符号
    assert_eq!(Color::parse_hex("#+F+F+F"), None);
    assert_eq!(Color::parse_hex("  #FFF  "), None);
    assert_eq!(Color::parse_hex("#FFF "), None);
    assert!(as_color(&json!("#+F+F+F")).is_none());
}

/// 测试数组颜色
#[test]
fn test_array_color() {
    assert_eq!(as_color(&json!([1, 0, 0])), Some(Color::RED));
    assert_eq!(as_color(&json!([0, 0, 0, 0])), Some(Color::TRANSPARENT));
    // 分量超出 0..1 时钳制
    assert_eq!(as_color(&json!([2.0, -1.0, 0.0])), Some(Color::RED));
    assert_eq!(as_color(&json!([1, 0])), None);
    assert_eq!(as_color(&json!(["1", 0, 0])), None);
    assert_eq!(as_color(&json!(255)), None);
}

/// 测试整数判定
#[test]
fn test_integer_coercion() {
    assert_eq!(as_integer(&json!(3)), Some(3));
    assert_eq!(as_integer(&json!(3.0)), Some(3));
    assert_eq!(as_integer(&json!(-2)), Some(-2));
    assert_eq!(as_integer(&json!(3.5)), None);
    assert_eq!(as_integer(&json!("3")), None);
}

/// 测试读取器的类型转换
#[test]
fn test_reader_values() {
    let value = json!({
        "flag": true,
        "pos": [1, 2, 3],
        "rot": [0, 0, 0, 1],
        "pad": [1, 2, 3, 4],
        "align": "bottom-right",
        "missing": null,
    });
    let props = PropReader::from_value(NodeKind::Group, &value).unwrap();

    assert_eq!(props.bool("flag").unwrap(), Some(true));
    assert_eq!(props.vec3("pos").unwrap(), Some(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(props.quat("rot").unwrap(), Some(Quat::IDENTITY));
    assert_eq!(props.padding("pad").unwrap(), Some(Padding::new(1.0, 2.0, 3.0, 4.0)));
    assert_eq!(props.enumeration::<Alignment>("align").unwrap(), Some(Alignment::BottomRight));
    assert_eq!(props.string("missing").unwrap(), None);
    assert!(!props.contains("missing"));
    assert_eq!(props.f32("absent").unwrap(), None);

    let err = props.f32("flag").unwrap_err();
    assert_eq!(err.property(), Some("flag"));
    assert_eq!(err.kind, NodeKind::Group);
}

/// 测试嵌套读取器的属性路径
#[test]
fn test_nested_reader_path() {
    let value = json!({ "outer": { "inner": "x" }, "items": [{ "a": 1 }, 2] });
    let props = PropReader::from_value(NodeKind::Text, &value).unwrap();

    let outer = props.object("outer").unwrap().unwrap();
    assert_eq!(outer.path("inner"), "outer.inner");
    let err = outer.bool("inner").unwrap_err();
    assert_eq!(err.property(), Some("outer.inner"));

    let err = props.object_list("items").unwrap_err();
    assert_eq!(err.property(), Some("items[1]"));
}

/// 测试枚举名称往返
#[test]
fn test_prop_enum_names() {
    assert_eq!(Alignment::NAMES.len(), 9);
    for name in Alignment::NAMES {
        let alignment = Alignment::from_name(name).unwrap();
        assert_eq!(alignment.name(), *name);
    }
    assert_eq!(Alignment::from_name("middle"), None);
}
