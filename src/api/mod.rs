mod datum_aspect;
mod datum_aspect_config;
mod datum_snapshot;
mod dump;
mod json_contract;
mod legacy;

pub use datum_aspect::DatumAspect;
pub use datum_aspect_config::DatumAspectConfig;
pub use datum_snapshot::DatumAspectSnapshot;
pub use dump::{DUMP_PLACEHOLDER, DumpDepth, DumpFields, DumpJson, DumpNode, dump_node};
pub use json_contract::{DATUM_SNAPSHOT_JSON_SCHEMA_V1, DatumAspectSnapshotJsonContractV1};
