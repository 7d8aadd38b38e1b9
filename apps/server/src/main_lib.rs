use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use trainlog_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    exercises::{ExerciseService, ExerciseServiceTrait},
    schedule::{ScheduleService, ScheduleServiceTrait},
    sets::{WorkoutSetService, WorkoutSetServiceTrait},
    users::UserRepositoryTrait,
    workouts::{WorkoutService, WorkoutServiceTrait},
};
use trainlog_storage_sqlite::{
    create_pool, run_migrations, spawn_writer, ExerciseRepository, ScheduleRepository,
    UserRepository, WorkoutRepository, WorkoutSetRepository,
};

use crate::{auth::AuthManager, config::Config};

pub struct AppState {
    pub exercise_service: Arc<dyn ExerciseServiceTrait>,
    pub workout_service: Arc<dyn WorkoutServiceTrait>,
    pub set_service: Arc<dyn WorkoutSetServiceTrait>,
    pub schedule_service: Arc<dyn ScheduleServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub user_repository: Arc<dyn UserRepositoryTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("TL_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = create_pool(&config.db_path)?;
    run_migrations(&pool)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let writer = spawn_writer(pool.clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));

    let exercise_repository = Arc::new(ExerciseRepository::new(pool.clone(), writer.clone()));
    let exercise_service = Arc::new(ExerciseService::new(exercise_repository));

    let workout_repository = Arc::new(WorkoutRepository::new(pool.clone(), writer.clone()));
    let set_repository = Arc::new(WorkoutSetRepository::new(pool.clone(), writer.clone()));
    let workout_service = Arc::new(WorkoutService::new(
        workout_repository.clone(),
        set_repository.clone(),
    ));
    let set_service = Arc::new(WorkoutSetService::new(set_repository.clone()));

    let schedule_repository = Arc::new(ScheduleRepository::new(pool.clone(), writer.clone()));
    let schedule_service = Arc::new(ScheduleService::new(schedule_repository.clone()));

    let analytics_service = Arc::new(AnalyticsService::new(
        workout_repository,
        set_repository,
        schedule_repository,
    ));

    let auth = Arc::new(AuthManager::new(config.jwt_secret.as_bytes()));

    Ok(Arc::new(AppState {
        exercise_service,
        workout_service,
        set_service,
        schedule_service,
        analytics_service,
        user_repository,
        auth,
    }))
}
