use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(big_integer(GuildConfig::GuildId).unique_key())
                    .col(big_integer(GuildConfig::RoleId))
                    .col(big_integer(GuildConfig::ChannelId))
                    .col(big_integer_null(GuildConfig::MessageId))
                    .col(timestamp(GuildConfig::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(GuildConfig::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    RoleId,
    ChannelId,
    MessageId,
    CreatedAt,
    UpdatedAt,
}
