use super::*;

/// Tests finding a tracked member's accumulators.
///
/// Expected: Ok(Some) with stored values
#[tokio::test]
async fn returns_stored_accumulators() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    factory::member_stat::MemberStatFactory::new(db, config.guild_id)
        .member_id(5)
        .online_seconds(10.0)
        .idle_seconds(20.0)
        .dnd_seconds(30.0)
        .offline_seconds(40.0)
        .last_status("dnd")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let stat = repo
        .find_member_stat(config.guild_id as u64, 5)
        .await?
        .unwrap();

    assert_eq!(stat.online, 10.0);
    assert_eq!(stat.idle, 20.0);
    assert_eq!(stat.dnd, 30.0);
    assert_eq!(stat.offline, 40.0);
    assert_eq!(stat.last_status, Some(PresenceState::Dnd));

    Ok(())
}

/// Tests that a member tracked in another guild is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn scopes_lookup_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_guild_config(db).await?;
    let second = factory::create_guild_config(db).await?;
    factory::member_stat::MemberStatFactory::new(db, first.guild_id)
        .member_id(5)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);

    assert!(repo
        .find_member_stat(second.guild_id as u64, 5)
        .await?
        .is_none());

    Ok(())
}
