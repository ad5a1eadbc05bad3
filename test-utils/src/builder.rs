use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from SeaORM entities using the SQLite backend and created in the
/// order they were added, so referenced tables must come before the tables that reference them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Lesson, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Lesson)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and auth session tables.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(AuthSession)
    }

    /// Adds every table needed for lessons, files, flashcards and exercises.
    ///
    /// Includes the user tables.
    pub fn with_lesson_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Lesson)
            .with_table(LessonFile)
            .with_table(Flashcard)
            .with_table(FlashcardReview)
            .with_table(LessonExercise)
            .with_table(ExerciseAttempt)
    }

    /// Adds the user tables plus connections and notifications.
    pub fn with_social_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Connection)
            .with_table(Notification)
    }

    /// Adds every table needed for rooms, membership, access requests and messages.
    ///
    /// Includes the social tables since room services notify and look up friends.
    pub fn with_room_tables(self) -> Self {
        self.with_social_tables()
            .with_table(Room)
            .with_table(RoomMember)
            .with_table(RoomAccessRequest)
            .with_table(RoomMessage)
    }

    /// Adds every table needed for posts, comments and reactions.
    ///
    /// Includes the social tables since commenting notifies the post author.
    pub fn with_community_tables(self) -> Self {
        self.with_social_tables()
            .with_table(Post)
            .with_table(Comment)
            .with_table(Reaction)
    }

    /// Builds and initializes the test context with the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
