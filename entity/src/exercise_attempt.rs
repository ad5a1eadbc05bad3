use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "exercise_attempt")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub exercise_id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    pub is_correct: bool,
    pub status: String,
    pub points_awarded: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson_exercise::Entity",
        from = "Column::ExerciseId",
        to = "super::lesson_exercise::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LessonExercise,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::lesson_exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonExercise.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
