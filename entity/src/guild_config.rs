use sea_orm::entity::prelude::*;

/// Tracking configuration for a single guild.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: i64,
    pub role_id: i64,
    pub channel_id: i64,
    pub message_id: Option<i64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::member_stat::Entity")]
    MemberStat,
}

impl Related<super::member_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
