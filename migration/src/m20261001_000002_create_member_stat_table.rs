use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_guild_config_table::GuildConfig;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberStat::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberStat::Id))
                    .col(big_integer(MemberStat::GuildId))
                    .col(big_integer(MemberStat::MemberId))
                    .col(double(MemberStat::OnlineSeconds).default(0.0))
                    .col(double(MemberStat::IdleSeconds).default(0.0))
                    .col(double(MemberStat::DndSeconds).default(0.0))
                    .col(double(MemberStat::OfflineSeconds).default(0.0))
                    .col(string(MemberStat::LastStatus).default("offline"))
                    .col(timestamp(MemberStat::LastUpdate).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_stat_guild_id")
                            .from(MemberStat::Table, MemberStat::GuildId)
                            .to(GuildConfig::Table, GuildConfig::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One accumulator row per member per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_member_stat_guild_member")
                    .table(MemberStat::Table)
                    .col(MemberStat::GuildId)
                    .col(MemberStat::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_member_stat_guild_member")
                    .table(MemberStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MemberStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberStat {
    Table,
    Id,
    GuildId,
    MemberId,
    OnlineSeconds,
    IdleSeconds,
    DndSeconds,
    OfflineSeconds,
    LastStatus,
    LastUpdate,
}
