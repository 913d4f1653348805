use super::*;
use sea_orm::PaginatorTrait;

/// Tests deleting a config removes its members too.
///
/// Expected: Ok(true) with both tables empty for the guild
#[tokio::test]
async fn deletes_config_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (config, _) = factory::helpers::create_guild_config_with_members(db, 4).await?;

    let repo = GuildConfigRepository::new(db);
    let deleted = repo.delete(config.guild_id as u64).await?;

    assert!(deleted);
    assert!(repo.find_by_guild_id(config.guild_id as u64).await?.is_none());
    let remaining = entity::prelude::MemberStat::find()
        .filter(entity::member_stat::Column::GuildId.eq(config.guild_id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests deleting a guild that has no config.
///
/// Expected: Ok(false), not an error
#[tokio::test]
async fn deleting_missing_config_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert!(!repo.delete(42).await?);
    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests deleting one guild leaves other guilds alone.
///
/// Expected: Ok with the other guild's config and members intact
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doomed, _) = factory::helpers::create_guild_config_with_members(db, 2).await?;
    let (kept, _) = factory::helpers::create_guild_config_with_members(db, 2).await?;

    let repo = GuildConfigRepository::new(db);
    repo.delete(doomed.guild_id as u64).await?;

    let found = repo.find_by_guild_id(kept.guild_id as u64).await?.unwrap();
    assert_eq!(found.members.len(), 2);

    Ok(())
}
