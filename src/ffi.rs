//! FFI 接口 - C/C++ 绑定
//!
//! 输入输出都是 UTF-8 JSON 字符串，`*_with_config` 变体额外接受配置 JSON。
//! 返回的字符串由 Rust 分配，调用方必须用 `mn_string_free` 释放。
//! 失败时返回空指针，错误信息通过 `mn_last_error` 取得（按线程保存）。

use crate::config::ConverterConfig;
use crate::nodes::{NodeConverter, NodeKind};
use crate::parser::scene::convert_scene;
use serde_json::Value;
use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use tracing::debug;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_last_error(message: String) {
    debug!(error = %message, "ffi call failed");
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(message));
}

fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// 读取 C 字符串并解析为 JSON
fn read_json(ptr: *const c_char, what: &str) -> Result<Value, String> {
    if ptr.is_null() {
        return Err(format!("{} is null", what));
    }
    let text = unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|e| format!("{} is not valid UTF-8: {}", what, e))?;
    serde_json::from_str(text).map_err(|e| format!("{} is not valid JSON: {}", what, e))
}

fn into_c_string(text: String) -> *mut c_char {
    match CString::new(text) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            set_last_error(format!("output contains a NUL byte: {}", e));
            std::ptr::null_mut()
        }
    }
}

fn finish(result: Result<String, String>) -> *mut c_char {
    match result {
        Ok(json) => {
            clear_last_error();
            into_c_string(json)
        }
        Err(message) => {
            set_last_error(message);
            std::ptr::null_mut()
        }
    }
}

/// 读取转换器配置，空指针表示默认配置
fn read_converter(config: *const c_char) -> Result<NodeConverter, String> {
    if config.is_null() {
        return Ok(NodeConverter::default());
    }
    let text = unsafe { CStr::from_ptr(config) }
        .to_str()
        .map_err(|e| format!("config is not valid UTF-8: {}", e))?;
    let config = ConverterConfig::from_json(text).map_err(|e| format!("config: {}", e))?;
    Ok(NodeConverter::new(config))
}

/// 转换单个节点（默认配置）
///
/// `kind` 为元素名或类型名（`slider` / `UiSliderNode`），`props` 为属性 JSON。
/// 成功返回节点 JSON。
#[no_mangle]
pub extern "C" fn mn_convert_node(kind: *const c_char, props: *const c_char) -> *mut c_char {
    mn_convert_node_with_config(kind, props, std::ptr::null())
}

/// 按给定配置 JSON（`{ "unknownProperties": ..., "clampValues": ... }`）转换单个节点
#[no_mangle]
pub extern "C" fn mn_convert_node_with_config(
    kind: *const c_char,
    props: *const c_char,
    config: *const c_char,
) -> *mut c_char {
    finish((|| {
        if kind.is_null() {
            return Err("kind is null".to_string());
        }
        let name = unsafe { CStr::from_ptr(kind) }
            .to_str()
            .map_err(|e| format!("kind is not valid UTF-8: {}", e))?;
        let kind = NodeKind::lookup(name).ok_or_else(|| format!("unknown node kind `{}`", name))?;
        let converter = read_converter(config)?;
        let props = read_json(props, "props")?;
        let node = converter.convert_kind(kind, &props).map_err(|e| e.to_string())?;
        serde_json::to_string(&node).map_err(|e| e.to_string())
    })())
}

/// 转换整个场景（默认配置），成功返回节点树 JSON
#[no_mangle]
pub extern "C" fn mn_convert_scene(scene: *const c_char) -> *mut c_char {
    mn_convert_scene_with_config(scene, std::ptr::null())
}

/// 按给定配置 JSON 转换整个场景
#[no_mangle]
pub extern "C" fn mn_convert_scene_with_config(
    scene: *const c_char,
    config: *const c_char,
) -> *mut c_char {
    finish((|| {
        let converter = read_converter(config)?;
        let scene = read_json(scene, "scene")?;
        let roots = convert_scene(&converter, &scene).map_err(|e| e.to_string())?;
        serde_json::to_string(&roots).map_err(|e| e.to_string())
    })())
}

/// 当前线程最近一次失败的错误信息，没有时返回空指针
#[no_mangle]
pub extern "C" fn mn_last_error() -> *mut c_char {
    LAST_ERROR.with(|slot| match slot.borrow().as_ref() {
        Some(message) => CString::new(message.replace('\0', " "))
            .map(CString::into_raw)
            .unwrap_or(std::ptr::null_mut()),
        None => std::ptr::null_mut(),
    })
}

/// 释放由本库返回的字符串
#[no_mangle]
pub extern "C" fn mn_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe { drop(CString::from_raw(ptr)); }
    }
}
