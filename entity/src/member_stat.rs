use sea_orm::entity::prelude::*;

/// Accumulated presence durations for one member of a tracked guild.
///
/// At most one row exists per `(guild_id, member_id)`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "member_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "guild_member")]
    pub guild_id: i64,
    #[sea_orm(unique_key = "guild_member")]
    pub member_id: i64,
    #[sea_orm(column_type = "Double")]
    pub online_seconds: f64,
    #[sea_orm(column_type = "Double")]
    pub idle_seconds: f64,
    #[sea_orm(column_type = "Double")]
    pub dnd_seconds: f64,
    #[sea_orm(column_type = "Double")]
    pub offline_seconds: f64,
    pub last_status: String,
    pub last_update: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild_config::Entity",
        from = "Column::GuildId",
        to = "super::guild_config::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GuildConfig,
}

impl Related<super::guild_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildConfig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
