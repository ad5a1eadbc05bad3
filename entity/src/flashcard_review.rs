use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "flashcard_review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flashcard_id: i32,
    pub user_id: i32,
    pub quality: i32,
    pub reviewed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flashcard::Entity",
        from = "Column::FlashcardId",
        to = "super::flashcard::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flashcard,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::flashcard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flashcard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
