pub mod datum_axes;
pub mod datum_part;
pub mod part_table;

pub use datum_axes::DatumAxes;
pub use datum_part::{DatumAttribute, DatumMode, DatumPart};
pub use part_table::{AttributeTable, PartTable};
