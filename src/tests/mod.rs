//! 单元测试模块
//! 覆盖节点转换、属性模式、场景读取、配置与 C 接口

pub mod full_props_tests;
pub mod props_tests;
pub mod scene_tests;
pub mod ffi_tests;

use serde_json::{json, Value};

use crate::nodes::NodeKind;

/// 每种节点的完整属性输入
pub(crate) fn full_props(kind: NodeKind) -> Value {
    match kind {
        NodeKind::Button => json!({
            "name": "submit",
            "localPosition": [0.1, 0.2, 0.3],
            "alignment": "center-center",
            "enabled": false,
            "text": "Submit",
            "textColor": "#FF0000",
            "textSize": 0.02,
            "width": 0.2,
            "height": 0.06,
            "roundness": 0.5,
            "iconType": "check",
        }),
        NodeKind::GridLayout => json!({
            "name": "grid",
            "columns": 3,
            "rows": 2,
            "width": 0.5,
            "height": 0.25,
            "defaultItemAlignment": "center-center",
            "defaultItemPadding": [0.01, 0.01, 0.01, 0.01],
            "itemAlignment": [{ "column": 1, "row": 0, "alignment": "top-right" }],
            "itemPadding": [{ "column": 2, "row": 1, "padding": [0.0, 0.02, 0.0, 0.02] }],
            "skipInvisibleItems": true,
        }),
        NodeKind::Group => json!({
            "name": "root",
            "localScale": [2.0, 2.0, 2.0],
            "visible": false,
        }),
        NodeKind::Image => json!({
            "name": "logo",
            "filePath": "assets/logo.png",
            "width": 0.1,
            "height": 0.1,
            "color": [1.0, 1.0, 1.0, 0.5],
            "useFrame": true,
        }),
        NodeKind::Line => json!({
            "name": "path",
            "color": "#00FF00",
            "points": [[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.1, 0.1, 0.0]],
            "thickness": 2.0,
        }),
        NodeKind::Model => json!({
            "name": "robot",
            "localRotation": [0.0, 0.0, 0.0, 1.0],
            "modelPath": "assets/robot.glb",
            "importScale": 0.5,
            "defaultTextureIndex": 2,
            "materialOverride": "metal",
        }),
        NodeKind::ProgressBar => json!({
            "name": "download",
            "min": 0,
            "max": 10,
            "value": 5,
            "width": 0.3,
            "height": 0.01,
            "progressColor": { "beginColor": "#0000FF", "endColor": [0.0, 1.0, 0.0] },
        }),
        NodeKind::Slider => json!({
            "name": "volume",
            "min": 0,
            "max": 100,
            "value": 40,
            "width": 0.4,
            "minLabel": "quiet",
            "maxLabel": "loud",
        }),
        NodeKind::Spinner => json!({
            "name": "loading",
            "size": [0.05, 0.05],
            "value": 0.25,
            "determinate": true,
        }),
        NodeKind::Text => json!({
            "name": "title",
            "text": "Hello",
            "textColor": [0.0, 0.0, 0.0],
            "textSize": 0.04,
            "textAlignment": "center",
            "boundsSize": { "boundsSize": [0.5, 0.2], "wrap": true },
            "charSpacing": 0.1,
            "lineSpacing": 1.5,
            "allCaps": true,
            "fontParameters": { "style": "italic", "weight": "bold" },
        }),
        NodeKind::TextEdit => json!({
            "name": "email",
            "text": "me@example.com",
            "hint": "Email",
            "textColor": "#000",
            "hintColor": "#888888",
            "textSize": 0.03,
            "textAlignment": "right",
            "textPadding": [0.01, 0.02, 0.01, 0.02],
            "charSpacing": 0.05,
            "lineSpacing": 1.2,
            "multiline": true,
            "password": true,
            "width": 0.4,
            "height": 0.08,
            "textEntry": "email",
            "charLimit": 64,
        }),
        NodeKind::Toggle => json!({
            "name": "wifi",
            "text": "Wi-Fi",
            "textColor": "#FFFFFF",
            "textSize": 0.02,
            "on": true,
            "type": "switch",
            "height": 0.05,
        }),
        NodeKind::Video => json!({
            "name": "intro",
            "videoPath": "assets/intro.mp4",
            "width": 0.64,
            "height": 0.36,
            "looping": true,
            "volume": 0.5,
            "action": "start",
        }),
    }
}

/// 浮点比较
pub(crate) fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
