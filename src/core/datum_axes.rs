use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use super::DatumPart;

bitflags::bitflags! {
    /// Axes enabled for display, combined with bitwise OR: `DatumAxes::X | DatumAxes::Z`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DatumAxes: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const XY = Self::X.bits() | Self::Y.bits();
        const YZ = Self::Y.bits() | Self::Z.bits();
        const XZ = Self::X.bits() | Self::Z.bits();
        const XYZ = Self::X.bits() | Self::Y.bits() | Self::Z.bits();
    }
}

impl Default for DatumAxes {
    fn default() -> Self {
        Self::XYZ
    }
}

impl Serialize for DatumAxes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for DatumAxes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Self::from_bits(bits)
            .ok_or_else(|| D::Error::custom(format!("unknown datum axes bits: {bits:#05b}")))
    }
}

impl DatumAxes {
    /// Axis line parts enabled by these flags, in X, Y, Z order.
    #[must_use]
    pub fn axis_parts(self) -> SmallVec<[DatumPart; 3]> {
        DatumPart::AXES
            .into_iter()
            .filter(|part| self.contains(part.axis_flag()))
            .collect()
    }

    /// Single-axis flag names, used by diagnostic dumps.
    #[must_use]
    pub fn flag_names(self) -> SmallVec<[&'static str; 3]> {
        [(Self::X, "x"), (Self::Y, "y"), (Self::Z, "z")]
            .into_iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
            .collect()
    }
}
