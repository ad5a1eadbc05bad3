use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flashcard")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lesson_id: i32,
    #[sea_orm(column_type = "Text")]
    pub front: String,
    #[sea_orm(column_type = "Text")]
    pub back: String,
    #[sea_orm(column_type = "Double")]
    pub ease_factor: f64,
    pub interval_days: i32,
    pub repetitions: i32,
    pub due_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lesson,
    #[sea_orm(has_many = "super::flashcard_review::Entity")]
    FlashcardReview,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::flashcard_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlashcardReview.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
