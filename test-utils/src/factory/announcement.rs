//! Announcement factory for creating test announcement entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an announcement with generated title and body.
///
/// # Arguments
/// - `db` - Database connection
/// - `location_id` - Location the announcement belongs to
/// - `created_by` - Admin user who posted it
pub async fn create_announcement(
    db: &DatabaseConnection,
    location_id: i32,
    created_by: i32,
) -> Result<entity::announcement::Model, DbErr> {
    let id = next_id();
    entity::announcement::ActiveModel {
        location_id: ActiveValue::Set(location_id),
        created_by: ActiveValue::Set(created_by),
        title: ActiveValue::Set(format!("Announcement {}", id)),
        body: ActiveValue::Set("Test announcement body".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
