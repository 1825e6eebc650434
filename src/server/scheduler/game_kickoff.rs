use chrono::Local;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::game::GameService};

/// Starts the game kick-off scheduler
///
/// Runs every minute and moves upcoming games whose date and time have passed to
/// `in-progress`. Game dates and times are stored without a zone and read as server
/// local time.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = kick_off_due_games(&db).await {
                tracing::error!("Error starting due games: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Game kick-off scheduler started");

    Ok(())
}

async fn kick_off_due_games(db: &DatabaseConnection) -> Result<(), AppError> {
    let now = Local::now().naive_local();
    let started = GameService::new(db).start_due_games(now).await?;

    if started > 0 {
        tracing::info!("Started {} game(s)", started);
    }

    Ok(())
}
