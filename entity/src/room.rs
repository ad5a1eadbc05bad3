use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub visibility: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::room_member::Entity")]
    RoomMember,
    #[sea_orm(has_many = "super::room_message::Entity")]
    RoomMessage,
    #[sea_orm(has_many = "super::room_access_request::Entity")]
    RoomAccessRequest,
}

impl Related<super::room_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomMember.def()
    }
}

impl Related<super::room_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomMessage.def()
    }
}

impl Related<super::room_access_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomAccessRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
