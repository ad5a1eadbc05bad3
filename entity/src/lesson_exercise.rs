use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "lesson_exercise")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lesson_id: i32,
    pub exercise_type: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    /// JSON-encoded array of option strings.
    #[sea_orm(column_type = "Text", nullable)]
    pub options: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub correct_answer: Option<String>,
    pub points: i32,
    pub position: i32,
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
    #[sea_orm(has_many = "super::exercise_attempt::Entity")]
    ExerciseAttempt,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::exercise_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExerciseAttempt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
