use chrono::{Days, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::meal_day::MealDayRepository, error::AppError, service::mail::MailClient,
};

/// Starts the attendance reminder scheduler
///
/// Runs once a day at the configured hour and emails everyone who signed up
/// for tomorrow's meal day, listing the scheduled meals.
///
/// # Arguments
/// - `db`: Database connection
/// - `mail`: Mail client for sending reminders
/// - `reminder_hour`: Hour of day (0-23) at which reminders go out
pub async fn start_scheduler(
    db: DatabaseConnection,
    mail: MailClient,
    reminder_hour: u32,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cron = format!("0 0 {} * * *", reminder_hour);

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let mail = mail.clone();

        Box::pin(async move {
            if let Err(e) = process_reminders(&db, &mail).await {
                tracing::error!("Error processing attendance reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Attendance reminder scheduler started");

    Ok(())
}

/// Sends reminder emails for every meal day scheduled tomorrow.
///
/// One failed send is logged and skipped; the remaining attendees still get
/// their reminders.
async fn process_reminders(db: &DatabaseConnection, mail: &MailClient) -> Result<(), AppError> {
    let Some(tomorrow) = Utc::now().date_naive().checked_add_days(Days::new(1)) else {
        return Ok(());
    };

    let meal_day_repo = MealDayRepository::new(db);

    // Tomorrow's meal days across all locations
    let days = entity::prelude::MealDay::find()
        .filter(entity::meal_day::Column::Date.eq(tomorrow))
        .all(db)
        .await?;

    for day in days {
        let meal_titles: Vec<String> = meal_day_repo
            .scheduled_meals(day.id)
            .await?
            .into_iter()
            .filter_map(|(_, meal)| meal.map(|m| m.title))
            .collect();

        let attendees = meal_day_repo.attendees(day.id).await?;

        tracing::info!(
            "Sending {} reminder(s) for meal day {} ({})",
            attendees.len(),
            day.id,
            day.date
        );

        for attendee in attendees {
            if let Err(e) = mail
                .send_attendance_reminder(&attendee.email, &attendee.name, day.date, &meal_titles)
                .await
            {
                tracing::error!(
                    "Failed to send reminder to {} for meal day {}: {}",
                    attendee.email,
                    day.id,
                    e
                );
            }
        }
    }

    Ok(())
}
