use serde::{Deserialize, Serialize};

use crate::domain::Percent;

/// One scraped occupancy reading. Produced by the external collector,
/// consumed read-only here. Wire form is the collector's JSON (camelCase,
/// epoch-millis timestamp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    pub lead: Option<Percent>,
    pub boulder: Option<Percent>,
    pub overall: Option<Percent>,
    pub open_sectors: Option<String>,
}

impl Sample {
    /// Build a reading, deriving `overall` from the per-discipline values.
    pub fn new(
        timestamp_ms: i64,
        lead: Option<Percent>,
        boulder: Option<Percent>,
        open_sectors: Option<String>,
    ) -> Self {
        Self {
            timestamp_ms,
            lead,
            boulder,
            overall: derive_overall(lead, boulder),
            open_sectors,
        }
    }
}

/// `overall` is the rounded mean of lead/boulder when both are present,
/// else whichever one is present, else absent.
pub fn derive_overall(lead: Option<Percent>, boulder: Option<Percent>) -> Option<Percent> {
    match (lead, boulder) {
        (Some(l), Some(b)) => {
            let mean = (l.as_f64() + b.as_f64()) / 2.0;
            Some(Percent::new(mean.round() as u8))
        }
        (Some(l), None) => Some(l),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Run status written by the collector alongside the sample file.
/// Fetch failure of this resource is non-fatal; the dashboard falls back
/// to sample-derived timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorStatus {
    #[serde(rename = "lastRun")]
    pub last_run_ms: i64,
    pub success: bool,
    pub message: String,
    pub data: Option<Sample>,
}
