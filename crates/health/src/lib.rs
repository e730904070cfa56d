//! Health-store boundary
//!
//! The platform health store is an external collaborator; this crate
//! specifies it at the interface boundary only. `HealthStore` exposes the
//! single-shot queries the dashboard needs - no aggregation, retry, or
//! consistency logic beyond summing sleep intervals on the caller side.

pub mod store;
pub mod summary;
pub mod types;

pub use store::HealthStore;
pub use summary::{sleep_hours, DashboardSnapshot};
pub use types::{DailyStepCount, HealthError, SleepSample, SleepStage};
