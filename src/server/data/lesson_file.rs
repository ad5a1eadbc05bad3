use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::lesson::{CreateLessonFileParams, LessonFile};

pub struct LessonFileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonFileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a file to a lesson
    pub async fn create(&self, param: CreateLessonFileParams) -> Result<LessonFile, DbErr> {
        let entity = entity::lesson_file::ActiveModel {
            lesson_id: ActiveValue::Set(param.lesson_id),
            file_name: ActiveValue::Set(param.file_name),
            file_url: ActiveValue::Set(param.file_url),
            mime_type: ActiveValue::Set(param.mime_type),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LessonFile::from_entity(entity))
    }

    /// Gets all files of a lesson in upload order
    pub async fn get_by_lesson_id(&self, lesson_id: i32) -> Result<Vec<LessonFile>, DbErr> {
        let entities = entity::prelude::LessonFile::find()
            .filter(entity::lesson_file::Column::LessonId.eq(lesson_id))
            .order_by_asc(entity::lesson_file::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LessonFile::from_entity).collect())
    }

    /// Deletes a file if it belongs to the given lesson
    ///
    /// # Returns
    /// - `Ok(true)` - File deleted
    /// - `Ok(false)` - No such file in that lesson
    pub async fn delete(&self, id: i32, lesson_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LessonFile::delete_many()
            .filter(entity::lesson_file::Column::Id.eq(id))
            .filter(entity::lesson_file::Column::LessonId.eq(lesson_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
