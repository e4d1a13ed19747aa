use serde::{Deserialize, Serialize};

use crate::error::{DatumError, DatumResult};

use super::{DatumAspect, DatumAspectSnapshot};

pub const DATUM_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatumAspectSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DatumAspectSnapshot,
}

impl DatumAspectSnapshot {
    pub fn to_json_pretty(&self) -> DatumResult<String> {
        self.ensure_finite()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_contract_v1_pretty(&self) -> DatumResult<String> {
        self.ensure_finite()?;
        let payload = DatumAspectSnapshotJsonContractV1 {
            schema_version: DATUM_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Accepts either a bare snapshot or a versioned contract envelope.
    ///
    /// A payload without `schema_version` is parsed as a bare snapshot and
    /// reports that parse error.
    pub fn from_json_compat_str(input: &str) -> DatumResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            DatumError::InvalidData(format!("failed to parse datum snapshot json: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                DatumError::InvalidData(format!("failed to parse datum snapshot: {e}"))
            });
        }
        let payload: DatumAspectSnapshotJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                DatumError::InvalidData(format!("failed to parse datum snapshot json payload: {e}"))
            })?;
        if payload.schema_version != DATUM_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(DatumError::UnsupportedSchema(payload.schema_version));
        }
        Ok(payload.snapshot)
    }
}

impl DatumAspect {
    pub fn snapshot_json_contract_v1_pretty(&self) -> DatumResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }

    pub fn from_json_compat_str(input: &str) -> DatumResult<Self> {
        Ok(Self::from_snapshot(
            &DatumAspectSnapshot::from_json_compat_str(input)?,
        ))
    }
}
