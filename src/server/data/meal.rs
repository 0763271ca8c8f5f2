//! Meal data repository for database operations.
//!
//! Handles the meal library: creation, updates, text search with tag and
//! season filters, and the cascading delete that prunes a meal from every
//! meal day schedule inside a single database transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};

use entity::types::{AllergenSet, SeasonSet};

use crate::server::model::meal::{CreateMealParam, SearchMealsParam, UpdateMealParam};

/// Repository providing database operations for the meal library.
pub struct MealRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MealRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a meal.
    ///
    /// Free-form tags are linked separately through the tag repository; this
    /// only writes the meal row itself.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created meal entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMealParam) -> Result<entity::meal::Model, DbErr> {
        entity::meal::ActiveModel {
            location_id: ActiveValue::Set(param.location_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            image_url: ActiveValue::Set(None),
            allergens: ActiveValue::Set(AllergenSet(param.allergens)),
            seasons: ActiveValue::Set(SeasonSet(param.seasons)),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a meal by id.
    pub async fn find_by_id(&self, meal_id: i32) -> Result<Option<entity::meal::Model>, DbErr> {
        entity::prelude::Meal::find_by_id(meal_id).one(self.db).await
    }

    /// Updates a meal's title, description, and enum tag sets.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated meal entity
    /// - `Ok(None)` - No meal with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        param: UpdateMealParam,
    ) -> Result<Option<entity::meal::Model>, DbErr> {
        let Some(entity) = self.find_by_id(param.id).await? else {
            return Ok(None);
        };

        let mut active: entity::meal::ActiveModel = entity.into();
        active.title = ActiveValue::Set(param.title);
        active.description = ActiveValue::Set(param.description);
        active.allergens = ActiveValue::Set(AllergenSet(param.allergens));
        active.seasons = ActiveValue::Set(SeasonSet(param.seasons));

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Sets the image URL for a meal.
    pub async fn set_image(&self, meal_id: i32, image_url: String) -> Result<(), DbErr> {
        entity::prelude::Meal::update_many()
            .filter(entity::meal::Column::Id.eq(meal_id))
            .col_expr(
                entity::meal::Column::ImageUrl,
                sea_orm::sea_query::Expr::value(Some(image_url)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Searches the meal library of a location with pagination.
    ///
    /// Free-text queries match against title and description. The optional
    /// filters narrow by free-form tag (joined through the tag tables), by
    /// season, and by allergen exclusion. Enum sets are stored as JSON arrays
    /// of lowercase names, so the season/allergen filters match on the quoted
    /// name within the serialized column.
    ///
    /// # Arguments
    /// - `param` - Search filters plus page/per_page
    ///
    /// # Returns
    /// - `Ok((meals, total))` - Meal entities for the requested page and total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        param: &SearchMealsParam,
    ) -> Result<(Vec<entity::meal::Model>, u64), DbErr> {
        let mut query = entity::prelude::Meal::find()
            .filter(entity::meal::Column::LocationId.eq(param.location_id));

        if let Some(text) = &param.query {
            query = query.filter(
                Condition::any()
                    .add(entity::meal::Column::Title.contains(text))
                    .add(entity::meal::Column::Description.contains(text)),
            );
        }

        if let Some(season) = param.season {
            query = query.filter(
                entity::meal::Column::Seasons.contains(format!("\"{}\"", season.as_str())),
            );
        }

        if let Some(allergen) = param.without_allergen {
            query = query.filter(
                Condition::all()
                    .add(
                        entity::meal::Column::Allergens
                            .contains(format!("\"{}\"", allergen.as_str())),
                    )
                    .not(),
            );
        }

        if let Some(tag) = &param.tag {
            query = query
                .join(JoinType::InnerJoin, entity::meal::Relation::MealTag.def())
                .join(JoinType::InnerJoin, entity::meal_tag::Relation::Tag.def())
                .filter(entity::tag::Column::Name.eq(tag.trim().to_lowercase()));
        }

        let paginator = query
            .order_by_asc(entity::meal::Column::Title)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let meals = paginator.fetch_page(param.page).await?;

        Ok((meals, total))
    }

    /// Deletes a meal and prunes it from every meal day that references it.
    ///
    /// The whole operation runs in a single database transaction: first every
    /// schedule entry pointing at the meal is removed, then the tag links,
    /// then the meal row itself. Any failure aborts the transaction and
    /// rethrows, leaving all meal days untouched.
    ///
    /// # Arguments
    /// - `meal_id` - Primary key of the meal to delete
    ///
    /// # Returns
    /// - `Ok(pruned)` - Number of meal day schedule entries that referenced the meal
    /// - `Err(DbErr)` - Database or transaction error; nothing was deleted
    pub async fn delete_cascading(&self, meal_id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let referencing = entity::prelude::MealDayMeal::find()
            .filter(entity::meal_day_meal::Column::MealId.eq(meal_id))
            .all(&txn)
            .await?;

        let pruned = referencing.len() as u64;

        entity::prelude::MealDayMeal::delete_many()
            .filter(entity::meal_day_meal::Column::MealId.eq(meal_id))
            .exec(&txn)
            .await?;

        entity::prelude::MealTag::delete_many()
            .filter(entity::meal_tag::Column::MealId.eq(meal_id))
            .exec(&txn)
            .await?;

        entity::prelude::Meal::delete_by_id(meal_id).exec(&txn).await?;

        txn.commit().await?;

        Ok(pruned)
    }
}
