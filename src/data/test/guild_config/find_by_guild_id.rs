use super::*;

/// Tests finding a guild config that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id(123456789).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests finding a guild config with its tracked members.
///
/// Verifies the config fields are converted back to u64 snowflakes and that
/// members are returned in the order they were first tracked.
///
/// Expected: Ok(Some) with all members in insertion order
#[tokio::test]
async fn returns_config_with_members_in_tracking_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(100)
        .role_id(200)
        .channel_id(300)
        .message_id(Some(400))
        .build()
        .await?;
    for member_id in [30, 10, 20] {
        factory::member_stat::MemberStatFactory::new(db, 100)
            .member_id(member_id)
            .build()
            .await?;
    }

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id(100).await?.unwrap();

    assert_eq!(config.guild_id, 100);
    assert_eq!(config.role_id, 200);
    assert_eq!(config.channel_id, 300);
    assert_eq!(config.message_id, Some(400));
    let ids: Vec<u64> = config.members.iter().map(|m| m.member_id).collect();
    assert_eq!(ids, vec![30, 10, 20]);

    Ok(())
}

/// Tests that members of other guilds are not included.
///
/// Expected: Ok(Some) with only the guild's own members
#[tokio::test]
async fn excludes_members_of_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (config, _) = factory::helpers::create_guild_config_with_members(db, 2).await?;
    factory::helpers::create_guild_config_with_members(db, 3).await?;

    let repo = GuildConfigRepository::new(db);
    let found = repo.find_by_guild_id(config.guild_id as u64).await?.unwrap();

    assert_eq!(found.members.len(), 2);

    Ok(())
}

/// Tests that an unknown stored status is surfaced as `None`.
///
/// Expected: Ok(Some) with member.last_status == None
#[tokio::test]
async fn maps_unknown_stored_status_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    factory::member_stat::MemberStatFactory::new(db, config.guild_id)
        .member_id(1)
        .last_status("streaming")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let found = repo.find_by_guild_id(config.guild_id as u64).await?.unwrap();

    assert_eq!(found.members[0].last_status, None);

    Ok(())
}
