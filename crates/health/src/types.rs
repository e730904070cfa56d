//! Health metric types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Step total for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyStepCount {
    pub date: NaiveDate,
    pub count: f64,
}

/// Sleep analysis stage of a recorded interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepStage {
    InBed,
    Asleep,
    Awake,
}

/// One raw sleep interval as recorded by the platform store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepSample {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub stage: SleepStage,
}

impl SleepSample {
    /// Interval length in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }
}

/// Errors from the platform health store.
#[derive(Error, Debug)]
pub enum HealthError {
    /// Health data is not available on this device.
    #[error("health data unavailable on this device")]
    Unavailable,

    /// The user has not granted read access.
    #[error("health data access not authorized")]
    NotAuthorized,

    /// A store query failed.
    #[error("health query failed: {0}")]
    Query(String),
}
