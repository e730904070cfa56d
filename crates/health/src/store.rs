//! Platform health-store interface

use async_trait::async_trait;

use crate::types::{DailyStepCount, HealthError, SleepSample};

/// Read access to the platform health store.
///
/// Every query is direct and single-shot; callers do their own filtering and
/// summing (see `summary`). Implementations live in platform integration
/// crates; tests use in-memory fakes.
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Request read authorization for steps, sleep, and active energy.
    /// Idempotent; safe to call on every launch.
    async fn request_authorization(&self) -> Result<(), HealthError>;

    /// Cumulative step count since the start of today.
    async fn steps_today(&self) -> Result<f64, HealthError>;

    /// Active energy burned (kcal) since the start of today.
    async fn active_energy_today_kcal(&self) -> Result<f64, HealthError>;

    /// Per-day step totals for the last seven days including today,
    /// ascending by date.
    async fn step_counts_last_7_days(&self) -> Result<Vec<DailyStepCount>, HealthError>;

    /// Raw sleep intervals since the start of yesterday, unprocessed.
    async fn sleep_samples_last_night(&self) -> Result<Vec<SleepSample>, HealthError>;
}
