//! 完整属性测试
//! 每种节点的完整输入逐字段对照期望值

use super::full_props;
use crate::geometry::{Padding, Quat, Size, Vec3};
use crate::nodes::*;
use crate::Color;

fn named(name: &str) -> TransformProps {
    TransformProps { name: Some(name.to_string()), ..TransformProps::default() }
}

fn ui_base(name: &str) -> UiBase {
    UiBase { transform: named(name), ..UiBase::default() }
}

fn render_base(name: &str, color: Color) -> RenderBase {
    RenderBase { transform: named(name), color }
}

/// 测试按钮
#[test]
fn test_button_full_props() {
    let button = convert_button(&full_props(NodeKind::Button)).unwrap();
    let expected = UiButtonNode {
        base: UiBase {
            transform: TransformProps {
                local_position: Vec3::new(0.1, 0.2, 0.3),
                ..named("submit")
            },
            alignment: Alignment::CenterCenter,
            enabled: false,
        },
        text: "Submit".to_string(),
        text_color: Color::RED,
        text_size: 0.02,
        width: 0.2,
        height: 0.06,
        roundness: 0.5,
        icon_type: Some("check".to_string()),
    };
    assert_eq!(button, expected);
}

/// 测试网格布局
#[test]
fn test_grid_layout_full_props() {
    let grid = convert_grid_layout(&full_props(NodeKind::GridLayout)).unwrap();
    let expected = UiGridLayoutNode {
        base: ui_base("grid"),
        columns: 3,
        rows: 2,
        width: 0.5,
        height: 0.25,
        default_item_alignment: Alignment::CenterCenter,
        default_item_padding: Padding::uniform(0.01),
        item_alignment: vec![ItemAlignment { column: 1, row: 0, alignment: Alignment::TopRight }],
        item_padding: vec![ItemPadding {
            column: 2,
            row: 1,
            padding: Padding::new(0.0, 0.02, 0.0, 0.02),
        }],
        skip_invisible_items: true,
    };
    assert_eq!(grid, expected);
}

/// 测试分组
#[test]
fn test_group_full_props() {
    let group = convert_group(&full_props(NodeKind::Group)).unwrap();
    let expected = UiGroupNode {
        base: UiBase {
            transform: TransformProps {
                local_scale: Vec3::new(2.0, 2.0, 2.0),
                visible: false,
                ..named("root")
            },
            alignment: Alignment::CenterCenter,
            enabled: true,
        },
    };
    assert_eq!(group, expected);
}

/// 测试图片
#[test]
fn test_image_full_props() {
    let image = convert_image(&full_props(NodeKind::Image)).unwrap();
    let expected = UiImageNode {
        base: ui_base("logo"),
        file_path: Some("assets/logo.png".to_string()),
        icon: None,
        width: 0.1,
        height: 0.1,
        color: Color::new(255, 255, 255, 128),
        use_frame: true,
    };
    assert_eq!(image, expected);
}

/// 测试线条
#[test]
fn test_line_full_props() {
    let line = convert_line(&full_props(NodeKind::Line)).unwrap();
    let expected = UiLineNode {
        base: render_base("path", Color::GREEN),
        points: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.1, 0.0, 0.0),
            Vec3::new(0.1, 0.1, 0.0),
        ],
        thickness: 2.0,
    };
    assert_eq!(line, expected);
}

/// 测试模型
#[test]
fn test_model_full_props() {
    let model = convert_model(&full_props(NodeKind::Model)).unwrap();
    let expected = UiModelNode {
        base: RenderBase {
            transform: TransformProps { local_rotation: Quat::IDENTITY, ..named("robot") },
            color: Color::WHITE,
        },
        model_path: "assets/robot.glb".to_string(),
        import_scale: 0.5,
        default_texture_index: 2,
        material_override: Some("metal".to_string()),
    };
    assert_eq!(model, expected);
}

/// 测试进度条
#[test]
fn test_progress_bar_full_props() {
    let bar = convert_progress_bar(&full_props(NodeKind::ProgressBar)).unwrap();
    let expected = UiProgressBarNode {
        base: ui_base("download"),
        min: 0.0,
        max: 10.0,
        value: 5.0,
        width: 0.3,
        height: 0.01,
        progress_color: ProgressColor { begin_color: Color::BLUE, end_color: Color::GREEN },
    };
    assert_eq!(bar, expected);
    assert_eq!(bar.fraction(), 0.5);
}

/// 测试滑块
#[test]
fn test_slider_full_props() {
    let slider = convert_slider(&full_props(NodeKind::Slider)).unwrap();
    let expected = UiSliderNode {
        base: ui_base("volume"),
        min: 0.0,
        max: 100.0,
        value: 40.0,
        width: 0.4,
        height: 0.0,
        min_label: Some("quiet".to_string()),
        max_label: Some("loud".to_string()),
    };
    assert_eq!(slider, expected);
}

/// 测试加载指示器
#[test]
fn test_spinner_full_props() {
    let spinner = convert_spinner(&full_props(NodeKind::Spinner)).unwrap();
    let expected = UiSpinnerNode {
        base: ui_base("loading"),
        size: Size::new(0.05, 0.05),
        value: 0.25,
        determinate: true,
    };
    assert_eq!(spinner, expected);
}

/// 测试文本
#[test]
fn test_text_full_props() {
    let text = convert_text(&full_props(NodeKind::Text)).unwrap();
    let expected = UiTextNode {
        base: UiBase { transform: named("title"), ..UiBase::with_alignment(Alignment::BottomLeft) },
        text: "Hello".to_string(),
        text_color: Color::BLACK,
        text_size: 0.04,
        text_alignment: HorizontalTextAlignment::Center,
        bounds_size: BoundsSize { size: Size::new(0.5, 0.2), wrap: true },
        char_spacing: 0.1,
        line_spacing: 1.5,
        all_caps: true,
        font_parameters: FontParameters { style: FontStyle::Italic, weight: FontWeight::Bold },
    };
    assert_eq!(text, expected);
    assert_eq!(text.display_text(), "HELLO");
}

/// 测试输入框
#[test]
fn test_text_edit_full_props() {
    let edit = convert_text_edit(&full_props(NodeKind::TextEdit)).unwrap();
    let expected = UiTextEditNode {
        base: ui_base("email"),
        text: "me@example.com".to_string(),
        hint: Some("Email".to_string()),
        text_color: Color::BLACK,
        hint_color: Color::rgb(0x88, 0x88, 0x88),
        text_size: 0.03,
        text_alignment: HorizontalTextAlignment::Right,
        text_padding: Padding::new(0.01, 0.02, 0.01, 0.02),
        char_spacing: 0.05,
        line_spacing: 1.2,
        multiline: true,
        password: true,
        width: 0.4,
        height: 0.08,
        text_entry: TextEntryMode::Email,
        char_limit: 64,
    };
    assert_eq!(edit, expected);
    assert!(!edit.shows_hint());
}

/// 测试开关
#[test]
fn test_toggle_full_props() {
    let toggle = convert_toggle(&full_props(NodeKind::Toggle)).unwrap();
    let expected = UiToggleNode {
        base: ui_base("wifi"),
        text: "Wi-Fi".to_string(),
        text_color: Color::WHITE,
        text_size: 0.02,
        on: true,
        toggle_type: ToggleType::Switch,
        height: 0.05,
    };
    assert_eq!(toggle, expected);
}

/// 测试视频
#[test]
fn test_video_full_props() {
    let video = convert_video(&full_props(NodeKind::Video)).unwrap();
    let expected = UiVideoNode {
        base: render_base("intro", Color::WHITE),
        video_path: "assets/intro.mp4".to_string(),
        width: 0.64,
        height: 0.36,
        looping: true,
        volume: 0.5,
        action: Some(VideoAction::Start),
    };
    assert_eq!(video, expected);
}
