//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating accounts, looking users up by id or login
//! name, profile updates, search and XP accrual.

use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with zero XP.
    ///
    /// # Arguments
    /// - `param` - Account fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            display_name: ActiveValue::Set(param.display_name),
            password_hash: ActiveValue::Set(param.password_hash),
            bio: ActiveValue::Set(None),
            xp: ActiveValue::Set(0),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user whose username or email equals `login`.
    ///
    /// Email matching is case-insensitive since addresses are stored lowercased.
    pub async fn find_by_login(&self, login: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(login))
                    .add(entity::user::Column::Email.eq(login.to_lowercase())),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email address is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads several users at once keyed by ID. Unknown IDs are skipped.
    pub async fn find_by_ids(&self, user_ids: Vec<i32>) -> Result<HashMap<i32, User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.id, User::from_entity(entity)))
            .collect())
    }

    /// Updates the display name and/or bio of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParams,
    ) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                user_id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(display_name) = param.display_name {
            active_model.display_name = ActiveValue::Set(display_name);
        }
        if let Some(bio) = param.bio {
            active_model.bio = ActiveValue::Set(Some(bio).filter(|b| !b.is_empty()));
        }

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Adds `amount` XP to a user and returns the new total.
    pub async fn add_xp(&self, user_id: i32, amount: i32) -> Result<i32, DbErr> {
        let user = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                user_id
            )))?;

        let xp = user.xp.saturating_add(amount);
        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.xp = ActiveValue::Set(xp);
        active_model.update(self.db).await?;

        Ok(xp)
    }

    /// Case-insensitive substring search over username and display name.
    ///
    /// # Arguments
    /// - `query` - Text to search for; an empty query matches every user
    /// - `page` - Zero-based page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((users, total))` - Page of users ordered by username and the total match count
    /// - `Err(DbErr)` - Database error
    pub async fn search_paginated(
        &self,
        query: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let pattern = format!("%{}%", query.trim().to_lowercase());

        let paginator = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::Username)))
                            .like(pattern.as_str()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::DisplayName)))
                            .like(pattern.as_str()),
                    ),
            )
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users.into_iter().map(User::from_entity).collect(), total))
    }
}
