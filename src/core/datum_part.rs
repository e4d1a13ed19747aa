use serde::{Deserialize, Serialize};

use super::DatumAxes;

/// One drawable piece of a datum presentation.
///
/// The set is closed: every part owns a fixed slot in part-indexed tables,
/// so there is no "none" value. Queries that may have no answer return
/// `Option<DatumPart>` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatumPart {
    #[serde(rename = "origin")]
    Origin,
    #[serde(rename = "x_axis")]
    XAxis,
    #[serde(rename = "y_axis")]
    YAxis,
    #[serde(rename = "z_axis")]
    ZAxis,
    #[serde(rename = "x_arrow")]
    XArrow,
    #[serde(rename = "y_arrow")]
    YArrow,
    #[serde(rename = "z_arrow")]
    ZArrow,
    #[serde(rename = "xoy_axis")]
    XOYAxis,
    #[serde(rename = "yoz_axis")]
    YOZAxis,
    #[serde(rename = "xoz_axis")]
    XOZAxis,
}

impl DatumPart {
    pub const COUNT: usize = 10;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Origin,
        Self::XAxis,
        Self::YAxis,
        Self::ZAxis,
        Self::XArrow,
        Self::YArrow,
        Self::ZArrow,
        Self::XOYAxis,
        Self::YOZAxis,
        Self::XOZAxis,
    ];

    /// Axis line parts in X, Y, Z order.
    pub const AXES: [Self; 3] = [Self::XAxis, Self::YAxis, Self::ZAxis];

    /// Arrow tip parts in X, Y, Z order.
    pub const ARROWS: [Self; 3] = [Self::XArrow, Self::YArrow, Self::ZArrow];

    /// Stable slot index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake-case name, shared by dumps and JSON payloads.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::XAxis => "x_axis",
            Self::YAxis => "y_axis",
            Self::ZAxis => "z_axis",
            Self::XArrow => "x_arrow",
            Self::YArrow => "y_arrow",
            Self::ZArrow => "z_arrow",
            Self::XOYAxis => "xoy_axis",
            Self::YOZAxis => "yoz_axis",
            Self::XOZAxis => "xoz_axis",
        }
    }

    #[must_use]
    pub const fn is_axis(self) -> bool {
        matches!(self, Self::XAxis | Self::YAxis | Self::ZAxis)
    }

    #[must_use]
    pub const fn is_arrow(self) -> bool {
        matches!(self, Self::XArrow | Self::YArrow | Self::ZArrow)
    }

    #[must_use]
    pub const fn is_plane(self) -> bool {
        matches!(self, Self::XOYAxis | Self::YOZAxis | Self::XOZAxis)
    }

    /// Axis flags this part depends on.
    ///
    /// Axis and arrow parts map to their own axis, plane parts to both
    /// spanning axes, the origin to no axis at all.
    #[must_use]
    pub const fn axis_flag(self) -> DatumAxes {
        match self {
            Self::Origin => DatumAxes::empty(),
            Self::XAxis | Self::XArrow => DatumAxes::X,
            Self::YAxis | Self::YArrow => DatumAxes::Y,
            Self::ZAxis | Self::ZArrow => DatumAxes::Z,
            Self::XOYAxis => DatumAxes::XY,
            Self::YOZAxis => DatumAxes::YZ,
            Self::XOZAxis => DatumAxes::XZ,
        }
    }
}

/// Named scalar stored on a datum aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatumAttribute {
    #[serde(rename = "x_axis_length")]
    XAxisLength,
    #[serde(rename = "y_axis_length")]
    YAxisLength,
    #[serde(rename = "z_axis_length")]
    ZAxisLength,
    #[serde(rename = "shading_tube_radius_percent")]
    ShadingTubeRadiusPercent,
    #[serde(rename = "shading_cone_radius_percent")]
    ShadingConeRadiusPercent,
    #[serde(rename = "shading_cone_length_percent")]
    ShadingConeLengthPercent,
    #[serde(rename = "shading_origin_radius_percent")]
    ShadingOriginRadiusPercent,
    #[serde(rename = "shading_number_of_facettes")]
    ShadingNumberOfFacettes,
}

impl DatumAttribute {
    pub const COUNT: usize = 8;

    pub const ALL: [Self; Self::COUNT] = [
        Self::XAxisLength,
        Self::YAxisLength,
        Self::ZAxisLength,
        Self::ShadingTubeRadiusPercent,
        Self::ShadingConeRadiusPercent,
        Self::ShadingConeLengthPercent,
        Self::ShadingOriginRadiusPercent,
        Self::ShadingNumberOfFacettes,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::XAxisLength => "x_axis_length",
            Self::YAxisLength => "y_axis_length",
            Self::ZAxisLength => "z_axis_length",
            Self::ShadingTubeRadiusPercent => "shading_tube_radius_percent",
            Self::ShadingConeRadiusPercent => "shading_cone_radius_percent",
            Self::ShadingConeLengthPercent => "shading_cone_length_percent",
            Self::ShadingOriginRadiusPercent => "shading_origin_radius_percent",
            Self::ShadingNumberOfFacettes => "shading_number_of_facettes",
        }
    }

    /// Length attribute backing an axis or arrow part.
    #[must_use]
    pub const fn length_for_part(part: DatumPart) -> Option<Self> {
        match part {
            DatumPart::XAxis | DatumPart::XArrow => Some(Self::XAxisLength),
            DatumPart::YAxis | DatumPart::YArrow => Some(Self::YAxisLength),
            DatumPart::ZAxis | DatumPart::ZArrow => Some(Self::ZAxisLength),
            _ => None,
        }
    }
}

/// Presentation mode the renderer builds the datum in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatumMode {
    /// Axis lines, origin marker and arrow heads drawn with line aspects.
    #[default]
    WireFrame,
    /// Tubes, cones and origin sphere drawn with shading aspects.
    Shading,
}
