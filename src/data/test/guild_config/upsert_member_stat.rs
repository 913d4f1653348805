use super::*;
use sea_orm::PaginatorTrait;

/// Tests appending a member that is not yet tracked.
///
/// Expected: Ok with a new member row
#[tokio::test]
async fn appends_new_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    let now = Utc::now();

    let repo = GuildConfigRepository::new(db);
    let stored = repo
        .upsert_member_stat(
            config.guild_id as u64,
            &MemberStat::new(77, PresenceState::Idle, now),
        )
        .await?;

    assert_eq!(stored.member_id, 77);
    assert_eq!(stored.last_status, Some(PresenceState::Idle));
    assert_eq!(stored.total(), 0.0);

    Ok(())
}

/// Tests updating a tracked member in place.
///
/// Expected: Ok with values replaced and no duplicate row
#[tokio::test]
async fn updates_existing_member_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    factory::member_stat::MemberStatFactory::new(db, config.guild_id)
        .member_id(77)
        .build()
        .await?;

    let now = Utc::now();
    let stat = MemberStat {
        member_id: 77,
        online: 125.5,
        idle: 0.0,
        dnd: 3.25,
        offline: 0.0,
        last_status: Some(PresenceState::Online),
        last_update: now,
    };

    let repo = GuildConfigRepository::new(db);
    let stored = repo.upsert_member_stat(config.guild_id as u64, &stat).await?;

    assert_eq!(stored.online, 125.5);
    assert_eq!(stored.dnd, 3.25);
    assert_eq!(stored.last_status, Some(PresenceState::Online));

    let count = entity::prelude::MemberStat::find()
        .filter(entity::member_stat::Column::GuildId.eq(config.guild_id))
        .filter(entity::member_stat::Column::MemberId.eq(77))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that writing two different members of one guild keeps both.
///
/// Each member is stored in its own row, so interleaved writes for different
/// members cannot overwrite one another.
///
/// Expected: Ok with both members present with their own values
#[tokio::test]
async fn interleaved_writes_for_different_members_both_land() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    let guild_id = config.guild_id as u64;
    let now = Utc::now();

    let repo = GuildConfigRepository::new(db);
    // Both writers read the config before either writes
    let snapshot_a = repo.find_by_guild_id(guild_id).await?.unwrap();
    let snapshot_b = repo.find_by_guild_id(guild_id).await?.unwrap();
    assert!(snapshot_a.member(1).is_none() && snapshot_b.member(2).is_none());

    let mut first = MemberStat::new(1, PresenceState::Online, now);
    first.idle = 10.0;
    let mut second = MemberStat::new(2, PresenceState::Dnd, now);
    second.offline = 20.0;

    let (a, b) = tokio::join!(
        repo.upsert_member_stat(guild_id, &first),
        repo.upsert_member_stat(guild_id, &second)
    );
    a?;
    b?;

    let found = repo.find_by_guild_id(guild_id).await?.unwrap();
    assert_eq!(found.members.len(), 2);
    assert_eq!(found.member(1).unwrap().idle, 10.0);
    assert_eq!(found.member(2).unwrap().offline, 20.0);

    Ok(())
}

/// Tests that an unknown last status is written back as-is.
///
/// Expected: Ok with last_status still None after a round trip
#[tokio::test]
async fn preserves_unknown_last_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = factory::create_guild_config(db).await?;
    let mut stat = MemberStat::new(9, PresenceState::Online, Utc::now() - Duration::minutes(5));
    stat.last_status = None;

    let repo = GuildConfigRepository::new(db);
    let stored = repo.upsert_member_stat(config.guild_id as u64, &stat).await?;

    assert_eq!(stored.last_status, None);

    Ok(())
}

/// Tests that the schema rejects a second row for the same member of a guild.
///
/// Expected: Err on the duplicate insert, while the same member id in another
/// guild is accepted
#[tokio::test]
async fn schema_rejects_duplicate_member_rows() -> Result<(), DbErr> {
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

    let duplicate = factory::member_stat::MemberStatFactory::new(db, first.guild_id)
        .member_id(5)
        .build()
        .await;
    assert!(duplicate.is_err());

    factory::member_stat::MemberStatFactory::new(db, second.guild_id)
        .member_id(5)
        .build()
        .await?;

    Ok(())
}
