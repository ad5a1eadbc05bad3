use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        user::{Progress, UpdateProfileParams, User},
        Paginated,
    },
    service::progress::level_for_xp,
    util::pagination::total_pages,
};

const BIO_MAX_CHARS: usize = 500;
const DISPLAY_NAME_MAX_CHARS: usize = 64;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by ID
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn get_profile(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Updates the caller's display name and/or bio. An empty bio clears it.
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let display_name = match params.display_name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() || name.chars().count() > DISPLAY_NAME_MAX_CHARS {
                    return Err(AppError::BadRequest(format!(
                        "Display name must be between 1 and {} characters",
                        DISPLAY_NAME_MAX_CHARS
                    )));
                }
                Some(name)
            }
            None => None,
        };

        let bio = params.bio.map(|bio| bio.trim().to_string());
        if bio
            .as_ref()
            .is_some_and(|bio| bio.chars().count() > BIO_MAX_CHARS)
        {
            return Err(AppError::BadRequest(format!(
                "Bio must be at most {} characters",
                BIO_MAX_CHARS
            )));
        }

        Ok(UserRepository::new(self.db)
            .update_profile(user_id, UpdateProfileParams { display_name, bio })
            .await?)
    }

    /// Searches users by username or display name
    pub async fn search(
        &self,
        query: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<User>, AppError> {
        let (items, total) = UserRepository::new(self.db)
            .search_paginated(query, page, per_page)
            .await?;

        Ok(Paginated {
            items,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets the caller's XP standing
    pub async fn progress(&self, user_id: i32) -> Result<Progress, AppError> {
        let user = self.get_profile(user_id).await?;

        Ok(level_for_xp(user.xp))
    }

    /// Adds XP to a user and returns the resulting standing
    pub async fn award_xp(&self, user_id: i32, amount: i32) -> Result<Progress, AppError> {
        let xp = UserRepository::new(self.db).add_xp(user_id, amount).await?;

        tracing::debug!("Awarded {} XP to user {} (total {})", amount, user_id, xp);

        Ok(level_for_xp(xp))
    }
}
