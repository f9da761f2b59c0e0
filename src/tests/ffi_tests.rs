//! C 接口测试

use crate::ffi::*;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// 取出返回的字符串并释放
fn take(ptr: *mut c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    mn_string_free(ptr);
    Some(text)
}

/// 测试转换单个节点
#[test]
fn test_ffi_convert_node() {
    let kind = CString::new("slider").unwrap();
    let props = CString::new(r#"{ "min": 0, "max": 100, "value": 150 }"#).unwrap();
    let json = take(mn_convert_node(kind.as_ptr(), props.as_ptr())).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "Slider");
    assert_eq!(value["value"], 100.0);
    assert!(take(mn_last_error()).is_none());
}

/// 测试失败时返回空指针并记录错误
#[test]
fn test_ffi_convert_node_errors() {
    let kind = CString::new("button").unwrap();
    let props = CString::new("[1, 2]").unwrap();
    assert!(mn_convert_node(kind.as_ptr(), props.as_ptr()).is_null());
    let message = take(mn_last_error()).unwrap();
    assert!(message.contains("UiButtonNode"), "{}", message);

    let kind = CString::new("canvas").unwrap();
    let props = CString::new("{}").unwrap();
    assert!(mn_convert_node(kind.as_ptr(), props.as_ptr()).is_null());
    assert!(take(mn_last_error()).unwrap().contains("canvas"));

    assert!(mn_convert_node(std::ptr::null(), props.as_ptr()).is_null());
    assert!(take(mn_last_error()).is_some());
}

/// 测试转换场景
#[test]
fn test_ffi_convert_scene() {
    let scene = CString::new(
        r#"{ "type": "view", "children": [{ "type": "video", "props": { "videoPath": "a.mp4" } }] }"#,
    )
    .unwrap();
    let json = take(mn_convert_scene(scene.as_ptr())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["children"][0]["videoPath"], "a.mp4");

    let bad = CString::new("not json").unwrap();
    assert!(mn_convert_scene(bad.as_ptr()).is_null());
    assert!(take(mn_last_error()).unwrap().contains("JSON"));
}

/// 测试按配置转换单个节点
#[test]
fn test_ffi_convert_node_with_config() {
    let kind = CString::new("slider").unwrap();
    let props = CString::new(r#"{ "min": 0, "max": 100, "value": 150 }"#).unwrap();

    let strict = CString::new(r#"{ "clampValues": false }"#).unwrap();
    assert!(mn_convert_node_with_config(kind.as_ptr(), props.as_ptr(), strict.as_ptr()).is_null());
    let message = take(mn_last_error()).unwrap();
    assert!(message.contains("UiSliderNode.value"), "{}", message);

    // 空配置指针等同默认配置
    let json = take(mn_convert_node_with_config(kind.as_ptr(), props.as_ptr(), std::ptr::null())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["value"], 100.0);

    let kind = CString::new("button").unwrap();
    let props = CString::new(r#"{ "text": "ok", "bogus": 1 }"#).unwrap();
    let reject = CString::new(r#"{ "unknownProperties": "reject" }"#).unwrap();
    assert!(mn_convert_node_with_config(kind.as_ptr(), props.as_ptr(), reject.as_ptr()).is_null());
    assert!(take(mn_last_error()).unwrap().contains("bogus"));

    let bad = CString::new(r#"{ "clampValues": "yes" }"#).unwrap();
    assert!(mn_convert_node_with_config(kind.as_ptr(), props.as_ptr(), bad.as_ptr()).is_null());
    assert!(take(mn_last_error()).unwrap().starts_with("config:"));
}

/// 测试按配置转换场景
#[test]
fn test_ffi_convert_scene_with_config() {
    let scene = CString::new(
        r#"{ "type": "view", "children": [{ "type": "slider", "props": { "max": 1, "value": 5 } }] }"#,
    )
    .unwrap();
    let strict = CString::new(r#"{ "clampValues": false }"#).unwrap();
    assert!(mn_convert_scene_with_config(scene.as_ptr(), strict.as_ptr()).is_null());
    assert!(take(mn_last_error()).unwrap().contains("value"));

    let json = take(mn_convert_scene_with_config(scene.as_ptr(), std::ptr::null())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["children"][0]["value"], 1.0);
}

/// 测试释放空指针无副作用
#[test]
fn test_ffi_free_null() {
    mn_string_free(std::ptr::null_mut());
}
