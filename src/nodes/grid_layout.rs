//! gridLayout 节点 - 网格布局
//!
//! 属性：
//! - columns: 列数，0 表示随内容增长
//! - rows: 行数，0 表示随内容增长
//! - defaultItemAlignment / defaultItemPadding: 子项默认对齐与内边距
//! - itemAlignment: [{ column, row, alignment }] 单独指定某格的对齐
//! - itemPadding: [{ column, row, padding }] 单独指定某格的内边距
//! - skipInvisibleItems: 布局时跳过不可见子项

use super::base::*;
use super::schema::{FieldSpec, FieldType, Schema};
use super::{ConvertContext, NodeConvert, NodeKind};
use crate::error::{ConvertResult, MismatchReason};
use crate::geometry::Padding;
use crate::parser::props::{PropEnum, PropReader};
use serde::Serialize;

const CELL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("column", FieldType::Integer),
    FieldSpec::required("row", FieldType::Integer),
];

const ITEM_ALIGNMENT_FIELDS: &[FieldSpec] = &[
    CELL_FIELDS[0],
    CELL_FIELDS[1],
    FieldSpec::required("alignment", FieldType::Enum(Alignment::NAMES)),
];

const ITEM_PADDING_FIELDS: &[FieldSpec] = &[
    CELL_FIELDS[0],
    CELL_FIELDS[1],
    FieldSpec::required("padding", FieldType::Padding),
];

const ITEM_ALIGNMENT_TYPE: FieldType = FieldType::Object(ITEM_ALIGNMENT_FIELDS);
const ITEM_PADDING_TYPE: FieldType = FieldType::Object(ITEM_PADDING_FIELDS);

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("columns", FieldType::Integer),
    FieldSpec::optional("rows", FieldType::Integer),
    FieldSpec::optional("defaultItemAlignment", FieldType::Enum(Alignment::NAMES)),
    FieldSpec::optional("defaultItemPadding", FieldType::Padding),
    FieldSpec::optional("itemAlignment", FieldType::List(&ITEM_ALIGNMENT_TYPE)),
    FieldSpec::optional("itemPadding", FieldType::List(&ITEM_PADDING_TYPE)),
    FieldSpec::optional("skipInvisibleItems", FieldType::Bool),
];

static SCHEMA: Schema = Schema {
    kind: NodeKind::GridLayout,
    groups: &[TRANSFORM_FIELDS, UI_FIELDS, DIMENSION_FIELDS, FIELDS],
};

/// 某一格的对齐
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemAlignment {
    pub column: u32,
    pub row: u32,
    pub alignment: Alignment,
}

/// 某一格的内边距
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemPadding {
    pub column: u32,
    pub row: u32,
    pub padding: Padding,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiGridLayoutNode {
    #[serde(flatten)]
    pub base: UiBase,
    pub columns: u32,
    pub rows: u32,
    pub width: f32,
    pub height: f32,
    pub default_item_alignment: Alignment,
    pub default_item_padding: Padding,
    pub item_alignment: Vec<ItemAlignment>,
    pub item_padding: Vec<ItemPadding>,
    pub skip_invisible_items: bool,
}

impl_node_base!(UiGridLayoutNode => UiBase);

impl Default for UiGridLayoutNode {
    fn default() -> Self {
        Self {
            base: UiBase::default(),
            columns: 0,
            rows: 0,
            width: 0.0,
            height: 0.0,
            default_item_alignment: Alignment::TopLeft,
            default_item_padding: Padding::ZERO,
            item_alignment: Vec::new(),
            item_padding: Vec::new(),
            skip_invisible_items: false,
        }
    }
}

/// 读取非负整数
fn read_count(props: &PropReader, key: &str) -> ConvertResult<Option<u32>> {
    match props.i32(key)? {
        Some(n) => u32::try_from(n)
            .map(Some)
            .map_err(|_| props.out_of_range(key, format!("{} must not be negative", n))),
        None => Ok(None),
    }
}

/// 读取格子坐标，两项都是必填
fn read_cell(props: &PropReader) -> ConvertResult<(u32, u32)> {
    let column = read_count(props, "column")?
        .ok_or_else(|| props.mismatch("column", MismatchReason::MissingRequired))?;
    let row = read_count(props, "row")?
        .ok_or_else(|| props.mismatch("row", MismatchReason::MissingRequired))?;
    Ok((column, row))
}

impl NodeConvert for UiGridLayoutNode {
    const KIND: NodeKind = NodeKind::GridLayout;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn apply(&mut self, props: &PropReader, _ctx: &ConvertContext) -> ConvertResult<()> {
        self.base.apply(props)?;
        apply_dimensions(props, &mut self.width, &mut self.height)?;

        if let Some(columns) = read_count(props, "columns")? {
            self.columns = columns;
        }
        if let Some(rows) = read_count(props, "rows")? {
            self.rows = rows;
        }
        if let Some(alignment) = props.enumeration("defaultItemAlignment")? {
            self.default_item_alignment = alignment;
        }
        if let Some(padding) = props.padding("defaultItemPadding")? {
            self.default_item_padding = padding;
        }
        if let Some(items) = props.object_list("itemAlignment")? {
            self.item_alignment = items
                .iter()
                .map(|item| {
                    let (column, row) = read_cell(item)?;
                    let alignment = item
                        .enumeration("alignment")?
                        .ok_or_else(|| item.mismatch("alignment", MismatchReason::MissingRequired))?;
                    Ok(ItemAlignment { column, row, alignment })
                })
                .collect::<ConvertResult<Vec<_>>>()?;
        }
        if let Some(items) = props.object_list("itemPadding")? {
            self.item_padding = items
                .iter()
                .map(|item| {
                    let (column, row) = read_cell(item)?;
                    let padding = item
                        .padding("padding")?
                        .ok_or_else(|| item.mismatch("padding", MismatchReason::MissingRequired))?;
                    Ok(ItemPadding { column, row, padding })
                })
                .collect::<ConvertResult<Vec<_>>>()?;
        }
        if let Some(skip) = props.bool("skipInvisibleItems")? {
            self.skip_invisible_items = skip;
        }
        Ok(())
    }
}
