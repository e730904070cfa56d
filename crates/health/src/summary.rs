//! Caller-side aggregation over raw store queries

use serde::{Deserialize, Serialize};

use crate::store::HealthStore;
use crate::types::{DailyStepCount, HealthError, SleepSample, SleepStage};

/// Total hours spent asleep across the given samples.
///
/// Only `Asleep` intervals count; `InBed` and `Awake` records are ignored.
pub fn sleep_hours(samples: &[SleepSample]) -> f64 {
    samples
        .iter()
        .filter(|sample| sample.stage == SleepStage::Asleep)
        .map(SleepSample::duration_hours)
        .sum()
}

/// The metrics the dashboard shows, gathered in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub steps_today: f64,
    pub active_energy_kcal: f64,
    pub sleep_hours_last_night: f64,
    pub last_7_days_steps: Vec<DailyStepCount>,
}

impl DashboardSnapshot {
    /// Load all dashboard metrics from the store.
    pub async fn load(store: &dyn HealthStore) -> Result<Self, HealthError> {
        store.request_authorization().await?;

        let steps_today = store.steps_today().await?;
        let active_energy_kcal = store.active_energy_today_kcal().await?;
        let sleep_samples = store.sleep_samples_last_night().await?;
        let last_7_days_steps = store.step_counts_last_7_days().await?;

        Ok(Self {
            steps_today,
            active_energy_kcal,
            sleep_hours_last_night: sleep_hours(&sleep_samples),
            last_7_days_steps,
        })
    }

    /// Dashboard text lines, in display order.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Steps today: {}", self.steps_today as i64),
            format!("Active kcal today: {}", self.active_energy_kcal as i64),
            format!(
                "Sleep hours last night: {:.1}",
                self.sleep_hours_last_night
            ),
        ]
    }
}
