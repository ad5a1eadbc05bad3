use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::auth::AuthService};

/// Starts the expired session cleanup scheduler
///
/// Runs every 15 minutes and deletes sessions whose `expires_at` has passed. Expired
/// tokens are already rejected at authentication time, so this only keeps the table small.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 */15 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_sessions(&db).await {
                tracing::error!("Error purging expired sessions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session cleanup scheduler started");

    Ok(scheduler)
}

async fn purge_expired_sessions(db: &DatabaseConnection) -> Result<(), AppError> {
    let purged = AuthService::new(db).purge_expired_sessions().await?;

    if purged > 0 {
        tracing::info!("Purged {} expired sessions", purged);
    }

    Ok(())
}
