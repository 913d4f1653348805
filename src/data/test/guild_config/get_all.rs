use super::*;

/// Tests getting all configs when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_configs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let configs = repo.get_all().await?;

    assert!(configs.is_empty());

    Ok(())
}

/// Tests getting all configs with their members grouped per guild.
///
/// Expected: Ok with one entry per guild, each holding only its own members
#[tokio::test]
async fn returns_every_config_with_its_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_guild_config_with_members(db, 3).await?;
    let (second, _) = factory::helpers::create_guild_config_with_members(db, 1).await?;
    let empty = factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    let configs = repo.get_all().await?;

    assert_eq!(configs.len(), 3);
    assert_eq!(configs[0].guild_id, first.guild_id as u64);
    assert_eq!(configs[0].members.len(), 3);
    assert_eq!(configs[1].guild_id, second.guild_id as u64);
    assert_eq!(configs[1].members.len(), 1);
    assert_eq!(configs[2].guild_id, empty.guild_id as u64);
    assert!(configs[2].members.is_empty());

    Ok(())
}
