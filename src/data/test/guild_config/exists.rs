use super::*;

/// Tests checking a guild with no config.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert!(!repo.exists(123456789).await?);

    Ok(())
}

/// Tests checking a tracked guild, with and without member rows.
///
/// Expected: Ok(true) in both cases, false again after deletion
#[tokio::test]
async fn true_for_configured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let empty = factory::create_guild_config(db).await?;
    let (tracked, _) = factory::helpers::create_guild_config_with_members(db, 2).await?;

    let repo = GuildConfigRepository::new(db);

    assert!(repo.exists(empty.guild_id as u64).await?);
    assert!(repo.exists(tracked.guild_id as u64).await?);

    repo.delete(tracked.guild_id as u64).await?;
    assert!(!repo.exists(tracked.guild_id as u64).await?);

    Ok(())
}
