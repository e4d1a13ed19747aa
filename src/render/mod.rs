mod aspects;
mod primitives;

pub use aspects::{ArrowAspect, LineAspect, MarkerKind, PointAspect, ShadingAspect, TextAspect};
pub use primitives::{Color, LineStrokeStyle, TextHAlign};

pub(crate) use primitives::ensure_positive;
