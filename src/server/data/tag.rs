//! Tag data repository for database operations.
//!
//! Free-form tags are deduplicated by name: referencing an unknown label
//! creates it on demand, referencing a known one reuses the existing row.
//! Names are normalized to lowercase before storage and lookup.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for free-form meal tags.
pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a tag by name or creates it if missing.
    ///
    /// Names are trimmed and lowercased before lookup so "Soup" and "soup"
    /// resolve to the same tag.
    ///
    /// # Returns
    /// - `Ok(Model)` - Existing or freshly created tag
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn find_or_create(&self, name: &str) -> Result<entity::tag::Model, DbErr> {
        let normalized = name.trim().to_lowercase();

        let existing = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(&normalized))
            .one(self.db)
            .await?;

        if let Some(tag) = existing {
            return Ok(tag);
        }

        entity::tag::ActiveModel {
            name: ActiveValue::Set(normalized),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the tag labels attached to a meal, alphabetically.
    pub async fn names_for_meal(&self, meal_id: i32) -> Result<Vec<String>, DbErr> {
        let tags = entity::prelude::Tag::find()
            .inner_join(entity::prelude::MealTag)
            .filter(entity::meal_tag::Column::MealId.eq(meal_id))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(|t| t.name).collect())
    }

    /// Replaces the tag set of a meal with the given labels.
    ///
    /// Unknown labels are created on demand; duplicate labels in the input
    /// collapse to a single link. Returns the normalized labels actually
    /// stored.
    pub async fn set_meal_tags(
        &self,
        meal_id: i32,
        names: &[String],
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::MealTag::delete_many()
            .filter(entity::meal_tag::Column::MealId.eq(meal_id))
            .exec(self.db)
            .await?;

        let mut stored = Vec::new();
        for name in names {
            if name.trim().is_empty() {
                continue;
            }

            let tag = self.find_or_create(name).await?;
            if stored.contains(&tag.name) {
                continue;
            }

            entity::meal_tag::ActiveModel {
                meal_id: ActiveValue::Set(meal_id),
                tag_id: ActiveValue::Set(tag.id),
            }
            .insert(self.db)
            .await?;

            stored.push(tag.name);
        }

        Ok(stored)
    }
}
