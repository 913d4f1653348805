use super::*;
use sea_orm::PaginatorTrait;

/// Tests creating a new guild config.
///
/// Expected: Ok with config created and no members
#[tokio::test]
async fn creates_new_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .upsert(UpsertGuildConfigParam {
            guild_id: 1,
            role_id: Some(2),
            channel_id: Some(3),
            message_id: None,
        })
        .await?;

    assert_eq!(config.guild_id, 1);
    assert_eq!(config.role_id, 2);
    assert_eq!(config.channel_id, 3);
    assert!(config.message_id.is_none());
    assert!(config.members.is_empty());

    Ok(())
}

/// Tests that creating a config without a role is rejected.
///
/// Expected: Err(DbErr::Custom) and no row written
#[tokio::test]
async fn rejects_creation_without_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo
        .upsert(UpsertGuildConfigParam {
            guild_id: 1,
            role_id: None,
            channel_id: Some(3),
            message_id: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert_eq!(entity::prelude::GuildConfig::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an update only overwrites the provided fields.
///
/// Setting just the message ID must leave role and channel untouched.
///
/// Expected: Ok with message_id updated and other fields unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(10)
        .role_id(20)
        .channel_id(30)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .upsert(UpsertGuildConfigParam {
            guild_id: 10,
            message_id: Some(99),
            ..Default::default()
        })
        .await?;

    assert_eq!(config.role_id, 20);
    assert_eq!(config.channel_id, 30);
    assert_eq!(config.message_id, Some(99));

    Ok(())
}

/// Tests that reconfiguring a guild keeps its tracked members.
///
/// Expected: Ok with new role and the existing member accumulators intact
#[tokio::test]
async fn keeps_members_when_changing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    factory::member_stat::MemberStatFactory::new(db, config.guild_id)
        .online_seconds(600.0)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let updated = repo
        .upsert(UpsertGuildConfigParam {
            guild_id: config.guild_id as u64,
            role_id: Some(777),
            channel_id: Some(888),
            message_id: None,
        })
        .await?;

    assert_eq!(updated.role_id, 777);
    assert_eq!(updated.channel_id, 888);
    assert_eq!(updated.members.len(), 1);
    assert_eq!(updated.members[0].online, 600.0);

    // Verify only one config exists for the guild
    let count = entity::prelude::GuildConfig::find()
        .filter(entity::guild_config::Column::GuildId.eq(config.guild_id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests storing snowflakes above i32 range.
///
/// Expected: Ok with ids preserved exactly
#[tokio::test]
async fn preserves_large_snowflakes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .upsert(UpsertGuildConfigParam {
            guild_id: 1_234_567_890_123_456_789,
            role_id: Some(987_654_321_098_765_432),
            channel_id: Some(876_543_210_987_654_321),
            message_id: Some(765_432_109_876_543_210),
        })
        .await?;

    assert_eq!(config.guild_id, 1_234_567_890_123_456_789);
    assert_eq!(config.role_id, 987_654_321_098_765_432);
    assert_eq!(config.message_id, Some(765_432_109_876_543_210));

    Ok(())
}
