//! Depth-limited JSON dump used for debugging datum presentations.
//!
//! The output keeps field declaration order and is not a stable format.

use std::io::Write;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::PartTable;
use crate::error::DatumResult;
use crate::render::{ArrowAspect, Color, LineAspect, PointAspect, ShadingAspect, TextAspect};

use super::DatumAspect;

/// Printed instead of an object once the depth budget is spent.
pub const DUMP_PLACEHOLDER: &str = "...";

/// How many nested object levels a dump expands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpDepth {
    #[default]
    Unlimited,
    Limited(u32),
}

impl DumpDepth {
    /// Budget left for the children of an expanded object, or `None` when
    /// the object itself must be replaced by the placeholder.
    #[must_use]
    pub fn descend(self) -> Option<Self> {
        match self {
            Self::Unlimited => Some(Self::Unlimited),
            Self::Limited(0) => None,
            Self::Limited(remaining) => Some(Self::Limited(remaining - 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DumpNode {
    Value(serde_json::Value),
    Object(IndexMap<&'static str, DumpNode>),
}

impl DumpNode {
    fn placeholder() -> Self {
        Self::Value(serde_json::Value::from(DUMP_PLACEHOLDER))
    }

    fn debug_name(value: impl std::fmt::Debug) -> Self {
        Self::Value(serde_json::Value::from(format!("{value:?}")))
    }
}

impl From<f64> for DumpNode {
    fn from(value: f64) -> Self {
        Self::Value(serde_json::Value::from(value))
    }
}

impl From<bool> for DumpNode {
    fn from(value: bool) -> Self {
        Self::Value(serde_json::Value::from(value))
    }
}

impl From<&str> for DumpNode {
    fn from(value: &str) -> Self {
        Self::Value(serde_json::Value::from(value))
    }
}

pub type DumpFields = IndexMap<&'static str, DumpNode>;

/// Types that can describe themselves as a nested dump object.
pub trait DumpJson {
    /// Pushes this object's fields; nested objects receive `depth`.
    fn dump_fields(&self, depth: DumpDepth, fields: &mut DumpFields);
}

/// Expands `value` as one nested level, or the placeholder once `depth` is spent.
pub fn dump_node<T: DumpJson + ?Sized>(value: &T, depth: DumpDepth) -> DumpNode {
    match depth.descend() {
        Some(inner) => {
            let mut fields = DumpFields::new();
            value.dump_fields(inner, &mut fields);
            DumpNode::Object(fields)
        }
        None => DumpNode::placeholder(),
    }
}

impl<T: DumpJson + ?Sized> DumpJson for Arc<T> {
    fn dump_fields(&self, depth: DumpDepth, fields: &mut DumpFields) {
        self.as_ref().dump_fields(depth, fields);
    }
}

/// Lays out one entry per part. The table is a plain keyed view of its
/// aspects, so it is always expanded and spends no depth of its own.
fn part_table_node<T: DumpJson>(table: &PartTable<T>, depth: DumpDepth) -> DumpNode {
    let mut entries = DumpFields::new();
    for (part, value) in table.iter() {
        entries.insert(part.name(), dump_node(value, depth));
    }
    DumpNode::Object(entries)
}

impl DumpJson for Color {
    fn dump_fields(&self, _depth: DumpDepth, fields: &mut DumpFields) {
        fields.insert("red", self.red.into());
        fields.insert("green", self.green.into());
        fields.insert("blue", self.blue.into());
        fields.insert("alpha", self.alpha.into());
    }
}

impl DumpJson for LineAspect {
    fn dump_fields(&self, depth: DumpDepth, fields: &mut DumpFields) {
        fields.insert("color", dump_node(&self.color, depth));
        fields.insert("stroke_style", DumpNode::debug_name(self.stroke_style));
        fields.insert("width", self.width.into());
    }
}

impl DumpJson for ShadingAspect {
    fn dump_fields(&self, depth: DumpDepth, fields: &mut DumpFields) {
        fields.insert("color", dump_node(&self.color, depth));
        fields.insert("transparency", self.transparency.into());
    }
}

impl DumpJson for TextAspect {
    fn dump_fields(&self, depth: DumpDepth, fields: &mut DumpFields) {
        fields.insert("color", dump_node(&self.color, depth));
        fields.insert("font", self.font.as_str().into());
        fields.insert("height_px", self.height_px.into());
        fields.insert("h_align", DumpNode::debug_name(self.h_align));
    }
}

impl DumpJson for PointAspect {
    fn dump_fields(&self, depth: DumpDepth, fields: &mut DumpFields) {
        fields.insert("marker", DumpNode::debug_name(self.marker));
        fields.insert("color", dump_node(&self.color, depth));
        fields.insert("scale", self.scale.into());
    }
}

impl DumpJson for ArrowAspect {
    fn dump_fields(&self, depth: DumpDepth, fields: &mut DumpFields) {
        fields.insert("angle", self.angle.into());
        fields.insert("length", self.length.into());
        let color = match &self.color {
            Some(color) => dump_node(color, depth),
            None => DumpNode::Value(serde_json::Value::Null),
        };
        fields.insert("color", color);
    }
}

impl DumpJson for DatumAspect {
    fn dump_fields(&self, depth: DumpDepth, fields: &mut DumpFields) {
        fields.insert("shading_aspects", part_table_node(self.shading_aspects(), depth));
        fields.insert("line_aspects", part_table_node(self.line_aspects(), depth));
        fields.insert("text_aspect", dump_node(self.text_aspect(), depth));
        fields.insert("point_aspect", dump_node(self.point_aspect(), depth));
        fields.insert("arrow_aspect", dump_node(self.arrow_aspect(), depth));

        let mut attributes = DumpFields::new();
        for (attribute, value) in self.attributes().iter() {
            attributes.insert(attribute.name(), value.into());
        }
        fields.insert("attributes", DumpNode::Object(attributes));

        let axes: Vec<serde_json::Value> = self
            .datum_axes()
            .flag_names()
            .into_iter()
            .map(serde_json::Value::from)
            .collect();
        fields.insert("axes", DumpNode::Value(serde_json::Value::Array(axes)));
        fields.insert("mode", DumpNode::debug_name(self.datum_mode()));
        fields.insert("to_draw_labels", self.to_draw_labels().into());
        fields.insert("to_draw_arrows", self.to_draw_arrows().into());
    }
}

impl DatumAspect {
    /// Builds the dump tree. Top-level scalars and the per-part tables are
    /// always present; aspect objects consume one level of `depth` per nesting.
    #[must_use]
    pub fn dump_tree(&self, depth: DumpDepth) -> DumpNode {
        let mut fields = DumpFields::new();
        self.dump_fields(depth, &mut fields);
        DumpNode::Object(fields)
    }

    /// Writes the pretty-printed dump into `out`.
    pub fn dump_json<W: Write>(&self, out: &mut W, depth: DumpDepth) -> DatumResult<()> {
        serde_json::to_writer_pretty(&mut *out, &self.dump_tree(depth))?;
        out.flush()?;
        Ok(())
    }

    pub fn dump_json_string(&self, depth: DumpDepth) -> DatumResult<String> {
        Ok(serde_json::to_string_pretty(&self.dump_tree(depth))?)
    }
}
