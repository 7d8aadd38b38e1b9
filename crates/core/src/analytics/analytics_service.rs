use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::analytics::analytics_model::{
    CalendarDay, MaxWeightPoint, PersonalRecord, VolumePoint,
};
use crate::errors::{Error, Result, ValidationError};
use crate::schedule::{ScheduleFilters, ScheduledWorkoutRepositoryTrait};
use crate::sets::{SetWithExercise, WorkoutSetFilters, WorkoutSetRepositoryTrait};
use crate::workouts::{summarize_workout, WorkoutRepositoryTrait};

/// Trait for the analytics read models. All reads, hence all sync.
pub trait AnalyticsServiceTrait: Send + Sync {
    fn volume_by_day(&self, user_id: &str, days: i64) -> Result<Vec<VolumePoint>>;
    fn max_weight_by_day(
        &self,
        user_id: &str,
        exercise_id: &str,
        days: i64,
    ) -> Result<Vec<MaxWeightPoint>>;
    fn personal_records(&self, user_id: &str) -> Result<Vec<PersonalRecord>>;
    /// One entry per day of the inclusive range, no gaps. Defaults to the
    /// current calendar month when no range is given.
    fn calendar(
        &self,
        user_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Vec<CalendarDay>>;
}

pub struct AnalyticsService {
    workout_repository: Arc<dyn WorkoutRepositoryTrait>,
    set_repository: Arc<dyn WorkoutSetRepositoryTrait>,
    schedule_repository: Arc<dyn ScheduledWorkoutRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(
        workout_repository: Arc<dyn WorkoutRepositoryTrait>,
        set_repository: Arc<dyn WorkoutSetRepositoryTrait>,
        schedule_repository: Arc<dyn ScheduledWorkoutRepositoryTrait>,
    ) -> Self {
        AnalyticsService {
            workout_repository,
            set_repository,
            schedule_repository,
        }
    }

    fn sets_since(
        &self,
        user_id: &str,
        days: i64,
        exercise_id: Option<&str>,
    ) -> Result<Vec<SetWithExercise>> {
        let since = (Utc::now() - Duration::days(days)).naive_utc();
        let filters = WorkoutSetFilters {
            exercise_id: exercise_id.map(str::to_string),
            started_after: Some(since),
            ..Default::default()
        };
        self.set_repository.list_with_exercise(user_id, &filters)
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Last day of the month containing `date`.
fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // The first of a month always exists; the day before it is the last
    // day of the previous month.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first| first - Duration::days(1))
        .unwrap_or(date)
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn volume_by_day(&self, user_id: &str, days: i64) -> Result<Vec<VolumePoint>> {
        let sets = self.sets_since(user_id, days, None)?;
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for s in &sets {
            *by_date.entry(s.workout_start_time.date_naive()).or_default() +=
                s.weight * s.reps as f64;
        }
        Ok(by_date
            .into_iter()
            .map(|(date, volume)| VolumePoint {
                date,
                volume: round1(volume),
            })
            .collect())
    }

    fn max_weight_by_day(
        &self,
        user_id: &str,
        exercise_id: &str,
        days: i64,
    ) -> Result<Vec<MaxWeightPoint>> {
        if exercise_id.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "exercise_id".to_string(),
            )));
        }
        let sets = self.sets_since(user_id, days, Some(exercise_id))?;
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for s in &sets {
            let entry = by_date.entry(s.workout_start_time.date_naive()).or_default();
            if s.weight > *entry {
                *entry = s.weight;
            }
        }
        Ok(by_date
            .into_iter()
            .map(|(date, max_weight)| MaxWeightPoint { date, max_weight })
            .collect())
    }

    fn personal_records(&self, user_id: &str) -> Result<Vec<PersonalRecord>> {
        let sets = self
            .set_repository
            .list_with_exercise(user_id, &WorkoutSetFilters::default())?;
        let mut by_exercise: HashMap<String, PersonalRecord> = HashMap::new();
        for s in &sets {
            match by_exercise.get_mut(&s.exercise_id) {
                Some(record) => {
                    if s.weight > record.max_weight {
                        record.max_weight = s.weight;
                    }
                }
                None => {
                    by_exercise.insert(
                        s.exercise_id.clone(),
                        PersonalRecord {
                            exercise_id: s.exercise_id.clone(),
                            exercise_name: s.exercise_name.clone(),
                            muscle_group: s.muscle_group,
                            max_weight: s.weight,
                        },
                    );
                }
            }
        }
        let mut records: Vec<PersonalRecord> = by_exercise.into_values().collect();
        records.sort_by(|a, b| a.exercise_name.cmp(&b.exercise_name));
        Ok(records)
    }

    fn calendar(
        &self,
        user_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Vec<CalendarDay>> {
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                let first = today.with_day(1).unwrap_or(today);
                (first, end_of_month(today))
            }
        };
        if end < start {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "end date must not precede start date".to_string(),
            )));
        }

        let workouts = self.workout_repository.list_between(user_id, start, end)?;
        let set_filters = WorkoutSetFilters {
            started_after: Some(start.and_hms_opt(0, 0, 0).unwrap_or_default()),
            started_before: (end + Duration::days(1))
                .and_hms_opt(0, 0, 0)
                .or_else(|| end.and_hms_opt(23, 59, 59)),
            ..Default::default()
        };
        let sets = self.set_repository.list_with_exercise(user_id, &set_filters)?;
        let mut sets_by_workout: HashMap<&str, Vec<SetWithExercise>> = HashMap::new();
        for s in &sets {
            sets_by_workout
                .entry(s.workout_id.as_str())
                .or_default()
                .push(s.clone());
        }

        let schedule_filters = ScheduleFilters {
            date_from: Some(start),
            date_to: Some(end),
            is_completed: None,
        };
        let scheduled = self
            .schedule_repository
            .list_for_user(user_id, &schedule_filters)?;

        let empty = Vec::new();
        let mut workouts_by_date: BTreeMap<NaiveDate, Vec<_>> = BTreeMap::new();
        for w in &workouts {
            let summary =
                summarize_workout(w, sets_by_workout.get(w.id.as_str()).unwrap_or(&empty));
            workouts_by_date
                .entry(w.start_time.date_naive())
                .or_default()
                .push(summary);
        }
        let mut scheduled_by_date: BTreeMap<NaiveDate, Vec<_>> = BTreeMap::new();
        for s in scheduled {
            scheduled_by_date.entry(s.date).or_default().push(s);
        }

        // Materialize every day of the range; days with no activity get
        // empty lists.
        let mut days = Vec::new();
        let mut current = start;
        while current <= end {
            let completed_workouts = workouts_by_date.remove(&current).unwrap_or_default();
            let scheduled = scheduled_by_date.remove(&current).unwrap_or_default();
            days.push(CalendarDay {
                date: current,
                has_workout: !completed_workouts.is_empty(),
                has_scheduled: !scheduled.is_empty(),
                completed_workouts,
                scheduled,
            });
            current += Duration::days(1);
        }
        Ok(days)
    }
}
