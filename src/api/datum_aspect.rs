use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::core::{AttributeTable, DatumAttribute, DatumAxes, DatumMode, DatumPart, PartTable};
use crate::render::{
    ArrowAspect, Color, LineAspect, LineStrokeStyle, MarkerKind, PointAspect, ShadingAspect,
    TextAspect,
};

use super::DatumAspectSnapshot;

/// Display settings for a datum presentation: origin, three axes, arrow
/// tips, plane indicators and axis labels.
///
/// Style aspects are held through `Arc` handles. Setters replace the handle
/// and never touch the previous pointee; `*_mut` accessors edit through
/// `Arc::make_mut`, so handles shared with other holders are left intact.
#[derive(Debug, Clone, PartialEq)]
pub struct DatumAspect {
    shading_aspects: PartTable<Arc<ShadingAspect>>,
    line_aspects: PartTable<Arc<LineAspect>>,
    text_aspect: Arc<TextAspect>,
    point_aspect: Arc<PointAspect>,
    arrow_aspect: Arc<ArrowAspect>,
    attributes: AttributeTable,
    axes: DatumAxes,
    mode: DatumMode,
    to_draw_labels: bool,
    to_draw_arrows: bool,
}

impl DatumAspect {
    pub const DEFAULT_AXIS_LENGTH: f64 = 100.0;
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
    pub const DEFAULT_SHADING_TUBE_RADIUS_PERCENT: f64 = 0.02;
    pub const DEFAULT_SHADING_CONE_RADIUS_PERCENT: f64 = 0.04;
    pub const DEFAULT_SHADING_CONE_LENGTH_PERCENT: f64 = 0.1;
    pub const DEFAULT_SHADING_ORIGIN_RADIUS_PERCENT: f64 = 0.015;
    pub const DEFAULT_SHADING_NUMBER_OF_FACETTES: f64 = 12.0;

    /// Creates a datum aspect populated with stock styles for every part.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(
            Color::default(),
            Self::DEFAULT_LINE_WIDTH,
            TextAspect::DEFAULT_HEIGHT_PX,
        )
    }

    pub(crate) fn with_style(color: Color, line_width: f64, text_height_px: f64) -> Self {
        let mut attributes = AttributeTable::default();
        attributes[DatumAttribute::XAxisLength] = Self::DEFAULT_AXIS_LENGTH;
        attributes[DatumAttribute::YAxisLength] = Self::DEFAULT_AXIS_LENGTH;
        attributes[DatumAttribute::ZAxisLength] = Self::DEFAULT_AXIS_LENGTH;
        attributes[DatumAttribute::ShadingTubeRadiusPercent] =
            Self::DEFAULT_SHADING_TUBE_RADIUS_PERCENT;
        attributes[DatumAttribute::ShadingConeRadiusPercent] =
            Self::DEFAULT_SHADING_CONE_RADIUS_PERCENT;
        attributes[DatumAttribute::ShadingConeLengthPercent] =
            Self::DEFAULT_SHADING_CONE_LENGTH_PERCENT;
        attributes[DatumAttribute::ShadingOriginRadiusPercent] =
            Self::DEFAULT_SHADING_ORIGIN_RADIUS_PERCENT;
        attributes[DatumAttribute::ShadingNumberOfFacettes] =
            Self::DEFAULT_SHADING_NUMBER_OF_FACETTES;

        Self {
            shading_aspects: PartTable::from_fn(|_| Arc::new(ShadingAspect::new(color, 0.0))),
            line_aspects: PartTable::from_fn(|_| {
                Arc::new(LineAspect::new(color, LineStrokeStyle::Solid, line_width))
            }),
            text_aspect: Arc::new(TextAspect::new(
                color,
                TextAspect::DEFAULT_FONT,
                text_height_px,
            )),
            point_aspect: Arc::new(PointAspect::new(MarkerKind::Empty, color, 1.0)),
            arrow_aspect: Arc::new(ArrowAspect::default()),
            attributes,
            axes: DatumAxes::XYZ,
            mode: DatumMode::WireFrame,
            to_draw_labels: true,
            to_draw_arrows: true,
        }
    }

    /// Rebuilds every field from `snapshot`, one fresh handle per slot.
    pub(crate) fn restore(snapshot: &DatumAspectSnapshot) -> Self {
        Self {
            shading_aspects: snapshot
                .shading_aspects
                .map(|_, shading| Arc::new(shading.clone())),
            line_aspects: snapshot.line_aspects.map(|_, line| Arc::new(line.clone())),
            text_aspect: Arc::new(snapshot.text_aspect.clone()),
            point_aspect: Arc::new(snapshot.point_aspect.clone()),
            arrow_aspect: Arc::new(snapshot.arrow_aspect.clone()),
            attributes: snapshot.attributes,
            axes: snapshot.axes,
            mode: snapshot.mode,
            to_draw_labels: snapshot.draw_labels,
            to_draw_arrows: snapshot.draw_arrows,
        }
    }

    #[must_use]
    pub fn line_aspect(&self, part: DatumPart) -> &Arc<LineAspect> {
        &self.line_aspects[part]
    }

    pub fn set_line_aspect(&mut self, part: DatumPart, aspect: Arc<LineAspect>) {
        debug!(part = part.name(), "replace datum line aspect");
        self.line_aspects[part] = aspect;
    }

    /// Copy-on-write access to the line aspect of `part`.
    pub fn line_aspect_mut(&mut self, part: DatumPart) -> &mut LineAspect {
        Arc::make_mut(&mut self.line_aspects[part])
    }

    #[must_use]
    pub fn shading_aspect(&self, part: DatumPart) -> &Arc<ShadingAspect> {
        &self.shading_aspects[part]
    }

    pub fn set_shading_aspect(&mut self, part: DatumPart, aspect: Arc<ShadingAspect>) {
        debug!(part = part.name(), "replace datum shading aspect");
        self.shading_aspects[part] = aspect;
    }

    /// Copy-on-write access to the shading aspect of `part`.
    pub fn shading_aspect_mut(&mut self, part: DatumPart) -> &mut ShadingAspect {
        Arc::make_mut(&mut self.shading_aspects[part])
    }

    /// Text attributes shared by every axis label.
    #[must_use]
    pub fn text_aspect(&self) -> &Arc<TextAspect> {
        &self.text_aspect
    }

    pub fn set_text_aspect(&mut self, aspect: Arc<TextAspect>) {
        debug!("replace datum text aspect");
        self.text_aspect = aspect;
    }

    pub fn text_aspect_mut(&mut self) -> &mut TextAspect {
        Arc::make_mut(&mut self.text_aspect)
    }

    /// Marker used for the origin in wireframe mode.
    #[must_use]
    pub fn point_aspect(&self) -> &Arc<PointAspect> {
        &self.point_aspect
    }

    pub fn set_point_aspect(&mut self, aspect: Arc<PointAspect>) {
        debug!("replace datum point aspect");
        self.point_aspect = aspect;
    }

    pub fn point_aspect_mut(&mut self) -> &mut PointAspect {
        Arc::make_mut(&mut self.point_aspect)
    }

    #[must_use]
    pub fn arrow_aspect(&self) -> &Arc<ArrowAspect> {
        &self.arrow_aspect
    }

    pub fn set_arrow_aspect(&mut self, aspect: Arc<ArrowAspect>) {
        debug!("replace datum arrow aspect");
        self.arrow_aspect = aspect;
    }

    pub fn arrow_aspect_mut(&mut self) -> &mut ArrowAspect {
        Arc::make_mut(&mut self.arrow_aspect)
    }

    /// Returns whether `part` is drawn with the current axes and toggles.
    ///
    /// - origin: always
    /// - axis line: its axis flag is set
    /// - arrow tip: its axis flag is set and arrows are enabled
    /// - plane indicators: never; they are not built from the axis set
    #[must_use]
    pub fn draw_datum_part(&self, part: DatumPart) -> bool {
        match part {
            DatumPart::Origin => true,
            DatumPart::XAxis | DatumPart::YAxis | DatumPart::ZAxis => {
                self.axes.contains(part.axis_flag())
            }
            DatumPart::XArrow | DatumPart::YArrow | DatumPart::ZArrow => {
                self.to_draw_arrows && self.axes.contains(part.axis_flag())
            }
            DatumPart::XOYAxis | DatumPart::YOZAxis | DatumPart::XOZAxis => false,
        }
    }

    /// Returns whether the text label attached to the axis of `part` is drawn.
    ///
    /// Labels hang off axis lines (or their arrow tips); origin and plane
    /// parts carry no label.
    #[must_use]
    pub fn draw_datum_label(&self, part: DatumPart) -> bool {
        if !self.to_draw_labels || !(part.is_axis() || part.is_arrow()) {
            return false;
        }
        self.axes.contains(part.axis_flag())
    }

    pub fn set_draw_datum_axes(&mut self, axes: DatumAxes) {
        debug!(axes = axes.bits(), "set datum axes");
        self.axes = axes;
    }

    #[must_use]
    pub fn datum_axes(&self) -> DatumAxes {
        self.axes
    }

    #[must_use]
    pub fn attribute(&self, attribute: DatumAttribute) -> f64 {
        self.attributes[attribute]
    }

    pub fn set_attribute(&mut self, attribute: DatumAttribute, value: f64) {
        trace!(attribute = attribute.name(), value, "set datum attribute");
        self.attributes[attribute] = value;
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    /// Displayed length of the axis owning `part`.
    ///
    /// Arrow tips report the length of their axis. Origin and plane parts
    /// have no length and yield `0.0`.
    #[must_use]
    pub fn axis_length(&self, part: DatumPart) -> f64 {
        match DatumAttribute::length_for_part(part) {
            Some(attribute) => self.attributes[attribute],
            None => {
                warn!(part = part.name(), "axis length requested for non-axis part");
                0.0
            }
        }
    }

    /// Sets the X, Y and Z axis lengths.
    pub fn set_axis_length(&mut self, x_length: f64, y_length: f64, z_length: f64) {
        self.attributes[DatumAttribute::XAxisLength] = x_length;
        self.attributes[DatumAttribute::YAxisLength] = y_length;
        self.attributes[DatumAttribute::ZAxisLength] = z_length;
        trace!(x_length, y_length, z_length, "set datum axis lengths");
    }

    /// `true` by default.
    #[must_use]
    pub fn to_draw_labels(&self) -> bool {
        self.to_draw_labels
    }

    pub fn set_draw_labels(&mut self, to_draw: bool) {
        self.to_draw_labels = to_draw;
    }

    pub fn set_to_draw_labels(&mut self, to_draw: bool) {
        self.set_draw_labels(to_draw);
    }

    /// `true` by default.
    #[must_use]
    pub fn to_draw_arrows(&self) -> bool {
        self.to_draw_arrows
    }

    pub fn set_draw_arrows(&mut self, to_draw: bool) {
        self.to_draw_arrows = to_draw;
    }

    #[must_use]
    pub fn datum_mode(&self) -> DatumMode {
        self.mode
    }

    pub fn set_datum_mode(&mut self, mode: DatumMode) {
        debug!(?mode, "set datum mode");
        self.mode = mode;
    }

    /// Arrow tip drawn at the end of the axis owning `part`.
    #[must_use]
    pub fn arrow_part_for_axis(&self, part: DatumPart) -> Option<DatumPart> {
        match part {
            DatumPart::XAxis | DatumPart::XArrow => Some(DatumPart::XArrow),
            DatumPart::YAxis | DatumPart::YArrow => Some(DatumPart::YArrow),
            DatumPart::ZAxis | DatumPart::ZArrow => Some(DatumPart::ZArrow),
            _ => None,
        }
    }

    /// Parts drawn with the current axes and toggles, in part order.
    pub fn visible_parts(&self) -> impl Iterator<Item = DatumPart> + '_ {
        DatumPart::ALL
            .into_iter()
            .filter(|part| self.draw_datum_part(*part))
    }

    pub(crate) fn line_aspects(&self) -> &PartTable<Arc<LineAspect>> {
        &self.line_aspects
    }

    pub(crate) fn shading_aspects(&self) -> &PartTable<Arc<ShadingAspect>> {
        &self.shading_aspects
    }
}

impl Default for DatumAspect {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::DatumAspect;
    use crate::core::{DatumAttribute, DatumAxes, DatumMode, DatumPart};
    use crate::render::{Color, LineAspect};

    #[test]
    fn fresh_aspect_uses_engine_defaults() {
        let aspect = DatumAspect::new();
        assert_eq!(aspect.datum_axes(), DatumAxes::XYZ);
        assert!(aspect.to_draw_labels());
        assert!(aspect.to_draw_arrows());
        assert_eq!(aspect.datum_mode(), DatumMode::WireFrame);
        assert_eq!(aspect.attribute(DatumAttribute::XAxisLength), 100.0);
        assert_eq!(aspect.attribute(DatumAttribute::ShadingNumberOfFacettes), 12.0);
        assert_eq!(aspect.line_aspect(DatumPart::Origin).color, Color::LIGHT_STEEL_BLUE_4);
    }

    #[test]
    fn default_slots_are_distinct_handles() {
        let aspect = DatumAspect::new();
        assert!(!Arc::ptr_eq(
            aspect.line_aspect(DatumPart::XAxis),
            aspect.line_aspect(DatumPart::YAxis)
        ));
    }

    #[test]
    fn make_mut_leaves_shared_handle_untouched() {
        let shared = Arc::new(LineAspect::default());
        let mut aspect = DatumAspect::new();
        aspect.set_line_aspect(DatumPart::ZAxis, Arc::clone(&shared));

        aspect.line_aspect_mut(DatumPart::ZAxis).width = 3.0;

        assert_eq!(shared.width, 1.0);
        assert_eq!(aspect.line_aspect(DatumPart::ZAxis).width, 3.0);
        assert!(!Arc::ptr_eq(aspect.line_aspect(DatumPart::ZAxis), &shared));
    }

    #[test]
    fn visible_parts_follow_axes_and_arrow_toggle() {
        let mut aspect = DatumAspect::new();
        aspect.set_draw_datum_axes(DatumAxes::Z);
        aspect.set_draw_arrows(false);
        let parts: Vec<DatumPart> = aspect.visible_parts().collect();
        assert_eq!(parts, vec![DatumPart::Origin, DatumPart::ZAxis]);
    }

    #[test]
    fn labels_require_owning_axis_and_toggle() {
        let mut aspect = DatumAspect::new();
        aspect.set_draw_datum_axes(DatumAxes::XY);
        assert!(aspect.draw_datum_label(DatumPart::XAxis));
        assert!(aspect.draw_datum_label(DatumPart::YArrow));
        assert!(!aspect.draw_datum_label(DatumPart::ZAxis));
        assert!(!aspect.draw_datum_label(DatumPart::Origin));
        assert!(!aspect.draw_datum_label(DatumPart::XOYAxis));

        aspect.set_to_draw_labels(false);
        assert!(!aspect.draw_datum_label(DatumPart::XAxis));
    }
}
