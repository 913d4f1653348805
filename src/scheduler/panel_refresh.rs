use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::{all::Cache, http::Http};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::panel::PanelService};

/// Cron expression firing at second 0 of every minute.
const REFRESH_SCHEDULE: &str = "0 * * * * *";

/// Starts the status panel refresh scheduler
///
/// This scheduler runs every minute and re-renders page 0 of every configured guild's
/// status panel. The first pass happens when the gateway cache is ready, see the
/// `cache_ready` handler.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for editing panel messages
/// - `cache`: Gateway cache holding guild roles and members
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler, kept so it can be shut down
/// - `Err(AppError::SchedulerErr)` - Failed to create, schedule or start the job
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    cache: Arc<Cache>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_http = discord_http.clone();
    let job_cache = cache.clone();

    let job = Job::new_async(REFRESH_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let cache = job_cache.clone();

        Box::pin(async move {
            if let Err(e) = refresh_panels(&db, http, cache).await {
                tracing::error!("Error refreshing status panels: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Status panel refresh scheduler started");

    Ok(scheduler)
}

/// Refreshes every configured guild's panel once.
pub async fn refresh_panels(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    cache: Arc<Cache>,
) -> Result<(), AppError> {
    let panel_service = PanelService::new(db, discord_http, cache);

    panel_service.refresh_all().await?;

    Ok(())
}
