//! Analytics module - derived read models over logged sets.

mod analytics_model;
mod analytics_service;


pub use analytics_model::{CalendarDay, MaxWeightPoint, PersonalRecord, VolumePoint};
pub use analytics_service::{AnalyticsService, AnalyticsServiceTrait};

/// Default lookback window for the volume chart, in days.
pub const DEFAULT_VOLUME_DAYS: i64 = 30;
/// Default lookback window for the max-weight chart, in days.
pub const DEFAULT_MAX_WEIGHT_DAYS: i64 = 90;
